//! Serialized, rate-limited geocoding over a record batch.

use crate::error::GeocodeResult;
use atlas_core::{Coordinates, Record};
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

/// The geocoding collaborator: resolves an address, or reports absence.
pub trait Geocoder {
    /// `Ok(None)` is a definitive "not found"; `Err` is a transient
    /// failure the driver may retry.
    fn geocode(
        &self,
        address: &str,
    ) -> impl std::future::Future<Output = GeocodeResult<Option<Coordinates>>>;
}

/// What happened during one enrichment pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GeocodeSummary {
    /// Records that already had coordinates and were not queried.
    pub already_resolved: usize,
    /// Addresses actually sent to the service.
    pub attempted: usize,
    /// Addresses resolved to coordinates.
    pub geocoded: usize,
    /// Addresses that stayed unresolved after retries.
    pub failed: usize,
}

/// Drives a [`Geocoder`] one address at a time with a fixed delay between
/// requests and bounded retries; failures degrade to absent coordinates.
pub struct RateLimited<G: Geocoder> {
    inner: G,
    min_delay: Duration,
    max_retries: u32,
}

impl<G: Geocoder> RateLimited<G> {
    /// The defaults the original batch used: one second between requests,
    /// three retries.
    #[must_use]
    pub fn new(inner: G) -> Self {
        Self::with_policy(inner, Duration::from_secs(1), 3)
    }

    #[must_use]
    pub fn with_policy(inner: G, min_delay: Duration, max_retries: u32) -> Self {
        Self {
            inner,
            min_delay,
            max_retries,
        }
    }

    /// Resolves one address, swallowing every failure into `None`.
    ///
    /// A definitive "not found" is returned immediately; only transient
    /// errors are retried, with the inter-request delay applied before
    /// each retry.
    pub async fn resolve(&self, address: &str) -> Option<Coordinates> {
        for attempt in 0..=self.max_retries {
            match self.inner.geocode(address).await {
                Ok(found) => return found,
                Err(error) => {
                    warn!(address, attempt, %error, "geocode attempt failed");
                    if attempt < self.max_retries {
                        tokio::time::sleep(self.min_delay).await;
                    }
                }
            }
        }
        None
    }

    /// Fills in coordinates for every record that lacks them.
    ///
    /// Records are processed strictly in order, with the minimum delay
    /// between consecutive service calls. Already-resolved records are
    /// never re-queried.
    pub async fn enrich_records(&self, records: &mut [Record]) -> GeocodeSummary {
        let mut summary = GeocodeSummary::default();
        for record in records.iter_mut() {
            if record.coordinates.is_some() {
                summary.already_resolved += 1;
                continue;
            }
            if summary.attempted > 0 {
                tokio::time::sleep(self.min_delay).await;
            }
            summary.attempted += 1;
            match self.resolve(&record.address).await {
                Some(coordinates) => {
                    record.coordinates = Some(coordinates);
                    summary.geocoded += 1;
                }
                None => summary.failed += 1,
            }
        }
        info!(
            attempted = summary.attempted,
            geocoded = summary.geocoded,
            failed = summary.failed,
            cached = summary.already_resolved,
            "geocoding pass complete"
        );
        summary
    }
}
