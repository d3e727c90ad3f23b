//! Error types for the flat-file layer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for flat-file operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while reading or writing the atlas files.
#[derive(Debug, Error)]
pub enum DataError {
    /// File could not be read or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the input header.
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    /// The input parsed but contained no usable records.
    #[error("no usable records in {}", .0.display())]
    NoRecords(PathBuf),
}
