//! Serializable keyword payload for the map page.
//!
//! The panel on the rendered map reads one JSON object keyed by district
//! name, each value an ordered list of `{kw, cnt, score}` rows. This module
//! is a pure structural transform from the ranker's output; it has no
//! failure modes.

use crate::ranker::RankedKeyword;
use atlas_core::District;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One keyword row as the panel consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    /// The keyword token.
    #[serde(rename = "kw")]
    pub token: String,

    /// Occurrences in the district.
    #[serde(rename = "cnt")]
    pub count: u32,

    /// Log-odds score; 0.0 in the 기타 bucket.
    pub score: f64,
}

impl From<&RankedKeyword> for KeywordEntry {
    fn from(ranked: &RankedKeyword) -> Self {
        Self {
            token: ranked.token.clone(),
            count: ranked.count_in_district,
            score: ranked.score,
        }
    }
}

/// District name → ordered keyword rows, ready for JSON embedding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordPayload {
    entries: BTreeMap<String, Vec<KeywordEntry>>,
}

impl KeywordPayload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the payload from per-district rankings, preserving each
    /// ranking's order.
    #[must_use]
    pub fn from_rankings<'a, I>(rankings: I) -> Self
    where
        I: IntoIterator<Item = (District, &'a [RankedKeyword])>,
    {
        let mut payload = Self::new();
        for (district, ranked) in rankings {
            payload.insert(district, ranked);
        }
        payload
    }

    /// Sets one district's keyword rows from its ranking.
    pub fn insert(&mut self, district: District, ranked: &[RankedKeyword]) {
        self.entries.insert(
            district.name().to_string(),
            ranked.iter().map(KeywordEntry::from).collect(),
        );
    }

    /// The rows for a district, empty when it has none.
    #[must_use]
    pub fn get(&self, district: District) -> &[KeywordEntry] {
        self.entries
            .get(district.name())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Districts that ended up with an empty keyword list.
    pub fn empty_districts(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, rows)| rows.is_empty())
            .map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
