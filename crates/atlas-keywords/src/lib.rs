//! District-differentiating keyword extraction.
//!
//! This crate is the algorithmic core of the atlas: it turns the free-text
//! descriptions of facility records into a per-district ranking of the
//! vocabulary that most distinguishes each district from the rest of the
//! city.
//!
//! ## Pipeline
//!
//! 1. [`normalize`] strips boilerplate (ordinals, years, numbers,
//!    punctuation) from a description.
//! 2. A [`MorphAnalyzer`] segments the normalized text into tagged
//!    morphemes; [`NounTokenizer`] keeps the nouns that survive the
//!    length and stopword filters.
//! 3. [`aggregate_by_district`] builds one [`FrequencyCounter`] per
//!    district.
//! 4. [`rank_log_odds`] scores each district's vocabulary against the
//!    pooled rest of the city (One-vs-Rest log-odds with Dirichlet
//!    smoothing); the 기타 bucket is ranked by plain frequency instead.
//! 5. [`KeywordPayload`] wraps the rankings for the map page.
//!
//! [`DistrictKeywordEngine`] runs the whole sequence over a record batch.

pub mod aggregate;
pub mod analyzer;
pub mod config;
pub mod counter;
pub mod engine;
pub mod normalize;
pub mod payload;
pub mod ranker;
pub mod tokenize;

pub use aggregate::aggregate_by_district;
pub use analyzer::{Analysis, MorphAnalyzer, Morpheme, ParticleStripAnalyzer, PosTag};
pub use config::KeywordParams;
pub use counter::FrequencyCounter;
pub use engine::{DistrictKeywordEngine, DistrictStats, KeywordError, KeywordRun};
pub use normalize::normalize;
pub use payload::{KeywordEntry, KeywordPayload};
pub use ranker::{rank_by_frequency, rank_log_odds, RankedKeyword};
pub use tokenize::NounTokenizer;
