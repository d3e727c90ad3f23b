//! Nominatim search client.

use crate::driver::Geocoder;
use crate::error::GeocodeResult;
use atlas_core::Coordinates;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Public OpenStreetMap Nominatim instance.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Identifies the atlas to the service, as its usage policy requires.
const USER_AGENT: &str = "gwangju-tourism-atlas/0.1";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One hit of a Nominatim search response. The service returns
/// coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

/// HTTP client for a Nominatim-compatible search endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    /// Client against the public Nominatim instance.
    pub fn new() -> GeocodeResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against a custom endpoint (a self-hosted instance, or a stub
    /// in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> GeocodeResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl Geocoder for NominatimClient {
    /// Resolves an address to coordinates via the search endpoint.
    ///
    /// `Ok(None)` means the service answered but found nothing, or answered
    /// with coordinates it could not state as numbers; both are a plain
    /// "address unknown" to the caller.
    async fn geocode(&self, address: &str) -> GeocodeResult<Option<Coordinates>> {
        let url = format!("{}/search", self.base_url);
        let body = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("limit", "1"), ("q", address)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let hits: Vec<SearchHit> = serde_json::from_str(&body)?;
        let resolved = hits.first().and_then(|hit| {
            let lat = hit.lat.parse::<f64>().ok()?;
            let lon = hit.lon.parse::<f64>().ok()?;
            Some(Coordinates::new(lat, lon))
        });
        debug!(address, found = resolved.is_some(), "geocode lookup");
        Ok(resolved)
    }
}
