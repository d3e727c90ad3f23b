//! Flat-file persistence for the Gwangju Tourism Atlas.
//!
//! Everything the atlas reads or writes on disk lives here: the facility
//! CSV (UTF-8 or legacy EUC-KR), the geocode cache that spares the
//! geocoding service on repeat runs, and the keyword ranking export.
//! There is no database; flat files are the whole persistence story.

pub mod cache;
pub mod dataset;
pub mod error;
pub mod export;

pub use cache::{load_cached, write_cache};
pub use dataset::{district_counts, load_records, LoadReport};
pub use error::{DataError, DataResult};
pub use export::write_keyword_rankings;
