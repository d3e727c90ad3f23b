//! One-vs-Rest log-odds ranking with Dirichlet smoothing.
//!
//! Given one district's token counter and the pooled counter of every other
//! district, [`rank_log_odds`] scores each token by how disproportionately
//! it occurs in the target district. The score is the difference of smoothed
//! empirical log-odds:
//!
//! ```text
//! p1 = (c1 + α) / (n1 + α·V)        p0 = (c0 + α) / (n0 + α·V)
//! score = ln(p1 / (1 − p1 + ε)) − ln(p0 / (1 − p0 + ε))
//! ```
//!
//! where `c1`/`c0` are the token's counts, `n1`/`n0` the counters' totals,
//! `V` the size of the combined vocabulary, `α` the Dirichlet pseudo-count,
//! and `ε` a guard against a proportion of exactly 1. Smoothing keeps
//! zero-count tokens from producing infinite ratios; the `ε` keeps the
//! logarithm's argument positive in the degenerate single-token case.
//!
//! The 기타 bucket is never ranked one-vs-rest: comparing "everything
//! unclassified" against the classified districts is not a meaningful
//! contrast. [`rank_by_frequency`] handles it with plain descending counts
//! and a fixed score of 0.

use crate::config::KeywordParams;
use crate::counter::FrequencyCounter;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Guard against log(0) when a smoothed proportion reaches exactly 1.
const EPSILON: f64 = 1e-12;

/// One scored keyword for a district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedKeyword {
    /// The token itself.
    pub token: String,

    /// Log-odds difference; 0.0 for frequency-ranked buckets.
    pub score: f64,

    /// Occurrences in the target district.
    pub count_in_district: u32,

    /// Occurrences pooled across the other districts.
    pub count_in_rest: u32,
}

/// Ranks a district's vocabulary against the pooled rest of the city.
///
/// Tokens below `params.min_count` in the target counter are skipped; only
/// the target count gates candidacy. The result is sorted by score
/// descending (ties by token order, so output is reproducible) and
/// truncated to `params.top_n`. An empty target yields an empty ranking.
#[must_use]
pub fn rank_log_odds(
    target: &FrequencyCounter,
    rest: &FrequencyCounter,
    params: &KeywordParams,
) -> Vec<RankedKeyword> {
    let vocab: HashSet<&str> = target.iter().map(|(t, _)| t).chain(rest.iter().map(|(t, _)| t)).collect();
    let v = vocab.len().max(1) as f64;
    let n1 = target.total() as f64;
    let n0 = rest.total() as f64;
    let alpha = params.alpha;

    let mut ranked: Vec<RankedKeyword> = vocab
        .into_iter()
        .filter_map(|token| {
            let c1 = target.get(token);
            if c1 < params.min_count {
                return None;
            }
            let c0 = rest.get(token);
            let p1 = (f64::from(c1) + alpha) / (n1 + alpha * v);
            let p0 = (f64::from(c0) + alpha) / (n0 + alpha * v);
            let score = (p1 / (1.0 - p1 + EPSILON)).ln() - (p0 / (1.0 - p0 + EPSILON)).ln();
            Some(RankedKeyword {
                token: token.to_string(),
                score,
                count_in_district: c1,
                count_in_rest: c0,
            })
        })
        .collect();

    ranked.sort_by(compare_by_score);
    ranked.truncate(params.top_n);
    ranked
}

/// Ranks a counter by raw frequency with every score fixed at 0.0.
///
/// This is the 기타 policy: its tokens are reported, but no one-vs-rest
/// contrast is computed for them.
#[must_use]
pub fn rank_by_frequency(counter: &FrequencyCounter, top_n: usize) -> Vec<RankedKeyword> {
    counter
        .most_common(top_n)
        .into_iter()
        .map(|(token, count)| RankedKeyword {
            token,
            score: 0.0,
            count_in_district: count,
            count_in_rest: 0,
        })
        .collect()
}

fn compare_by_score(a: &RankedKeyword, b: &RankedKeyword) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.token.cmp(&b.token))
}
