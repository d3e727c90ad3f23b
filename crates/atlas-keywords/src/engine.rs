//! The keyword pipeline facade.
//!
//! [`DistrictKeywordEngine`] runs the whole sequence over a record batch:
//!
//! 1. Aggregate tokenized descriptions into one counter per district.
//! 2. For each real district, pool every *other* real district's counter
//!    and rank one-vs-rest. The 기타 bucket never joins the rest pool and
//!    is ranked by plain frequency instead.
//! 3. Build the serializable payload and per-district stats.
//!
//! Per-record problems (missing descriptions, empty analyses) degrade to
//! zero contributed tokens. Only structural problems abort: an empty record
//! batch or an empty district set.

use crate::aggregate::aggregate_by_district;
use crate::analyzer::MorphAnalyzer;
use crate::config::KeywordParams;
use crate::counter::FrequencyCounter;
use crate::payload::KeywordPayload;
use crate::ranker::{rank_by_frequency, rank_log_odds, RankedKeyword};
use crate::tokenize::NounTokenizer;
use atlas_core::{District, Record};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Result alias for keyword pipeline operations.
pub type KeywordResult<T> = Result<T, KeywordError>;

/// Structural failures of the keyword pipeline.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KeywordError {
    /// The input batch had no records at all.
    #[error("no records to analyze")]
    NoRecords,

    /// The district set was empty.
    #[error("empty district set")]
    EmptyDistrictSet,
}

/// Per-district counts reported alongside the payload.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DistrictStats {
    pub district: District,
    /// Records labeled with this district.
    pub record_count: usize,
    /// Filtered tokens extracted from those records.
    pub token_count: u64,
    /// Keywords that survived ranking.
    pub keyword_count: usize,
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone)]
pub struct KeywordRun {
    /// Full rankings per district.
    pub rankings: BTreeMap<District, Vec<RankedKeyword>>,

    /// The serializable payload for the map page.
    pub payload: KeywordPayload,

    /// Per-district counts, in canonical district order.
    pub stats: Vec<DistrictStats>,
}

impl KeywordRun {
    /// Districts whose ranking came out empty.
    #[must_use]
    pub fn empty_districts(&self) -> Vec<District> {
        self.stats
            .iter()
            .filter(|s| s.keyword_count == 0)
            .map(|s| s.district)
            .collect()
    }
}

/// Runs normalization, tokenization, aggregation, and ranking as one batch.
pub struct DistrictKeywordEngine<A: MorphAnalyzer> {
    analyzer: A,
    params: KeywordParams,
}

impl<A: MorphAnalyzer> DistrictKeywordEngine<A> {
    #[must_use]
    pub fn new(analyzer: A, params: KeywordParams) -> Self {
        Self { analyzer, params }
    }

    #[must_use]
    pub fn params(&self) -> &KeywordParams {
        &self.params
    }

    /// Runs the pipeline over all districts (the five plus 기타).
    pub fn run(&self, records: &[Record]) -> KeywordResult<KeywordRun> {
        self.run_for_districts(records, &District::WITH_ETC)
    }

    /// Runs the pipeline over an explicit district set.
    ///
    /// Real districts are ranked one-vs-rest against the other real
    /// districts in the set; an included 기타 bucket is ranked by raw
    /// frequency.
    pub fn run_for_districts(
        &self,
        records: &[Record],
        districts: &[District],
    ) -> KeywordResult<KeywordRun> {
        if records.is_empty() {
            return Err(KeywordError::NoRecords);
        }
        if districts.is_empty() {
            return Err(KeywordError::EmptyDistrictSet);
        }

        let tokenizer = NounTokenizer::new(&self.analyzer, &self.params);
        let counters = aggregate_by_district(records, districts, &tokenizer);
        info!(
            records = records.len(),
            districts = districts.len(),
            "aggregated district counters"
        );

        let mut rankings: BTreeMap<District, Vec<RankedKeyword>> = BTreeMap::new();
        for &district in districts {
            let counter = &counters[&district];
            let ranked = if district.is_etc() {
                rank_by_frequency(counter, self.params.top_n)
            } else {
                let mut rest = FrequencyCounter::new();
                for &other in districts {
                    if other != district && !other.is_etc() {
                        rest.merge(&counters[&other]);
                    }
                }
                rank_log_odds(counter, &rest, &self.params)
            };
            debug!(
                district = %district,
                tokens = counter.total(),
                keywords = ranked.len(),
                "ranked district"
            );
            rankings.insert(district, ranked);
        }

        let stats = districts
            .iter()
            .map(|&district| DistrictStats {
                district,
                record_count: records.iter().filter(|r| r.district == district).count(),
                token_count: counters[&district].total(),
                keyword_count: rankings[&district].len(),
            })
            .collect();

        let payload =
            KeywordPayload::from_rankings(rankings.iter().map(|(&d, r)| (d, r.as_slice())));

        Ok(KeywordRun {
            rankings,
            payload,
            stats,
        })
    }
}
