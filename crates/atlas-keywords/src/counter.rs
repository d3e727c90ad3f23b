//! Token frequency counters.
//!
//! A [`FrequencyCounter`] maps tokens to occurrence counts. One is built
//! per district on every run; counters are never persisted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A multiset of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyCounter {
    counts: HashMap<String, u32>,
}

impl FrequencyCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a counter from an iterator of tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counter = Self::new();
        counter.extend(tokens);
        counter
    }

    /// Adds one occurrence of a token.
    pub fn tally(&mut self, token: impl Into<String>) {
        *self.counts.entry(token.into()).or_insert(0) += 1;
    }

    /// Adds one occurrence of each token in the iterator.
    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for token in tokens {
            self.tally(token);
        }
    }

    /// Absorbs another counter's counts.
    pub fn merge(&mut self, other: &FrequencyCounter) {
        for (token, count) in &other.counts {
            *self.counts.entry(token.clone()).or_insert(0) += count;
        }
    }

    /// Occurrences of a token, zero when absent.
    #[must_use]
    pub fn get(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Total occurrences across all tokens.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn vocab_len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(token, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// The `n` most frequent tokens, ties broken by token order so the
    /// result is reproducible.
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(String, u32)> {
        let mut entries: Vec<(String, u32)> = self
            .counts
            .iter()
            .map(|(t, &c)| (t.clone(), c))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }
}
