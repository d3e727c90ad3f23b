//! Error types for map rendering.

use thiserror::Error;

/// Result type alias for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering or writing the map page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The page could not be written to disk.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The data blob could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
