//! Core domain types for the Gwangju Tourism Atlas.
//!
//! This crate defines the vocabulary shared by every other crate in the
//! workspace: administrative districts, geographic coordinates, and the
//! facility record that flows through the enrichment pipeline. It performs
//! no I/O and has no knowledge of CSV files, HTTP clients, or maps.

pub mod district;
pub mod types;

pub use district::District;
pub use types::{Coordinates, Record};
