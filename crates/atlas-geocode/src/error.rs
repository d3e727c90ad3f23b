//! Error types for the geocoding layer.

use thiserror::Error;

/// Result type alias for geocoding operations.
pub type GeocodeResult<T> = Result<T, GeocodeError>;

/// Errors a single geocoding request can produce.
///
/// These never cross into the pipeline: the driver retries and then
/// degrades to an absent coordinate.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Request failed (connection, timeout, non-success status).
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a body that is not valid search JSON.
    #[error("unparsable geocoding response: {0}")]
    Parse(#[from] serde_json::Error),
}
