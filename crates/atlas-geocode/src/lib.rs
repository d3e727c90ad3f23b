//! Address geocoding for the Gwangju Tourism Atlas.
//!
//! A thin, deliberately boring wrapper over an OpenStreetMap Nominatim
//! endpoint. The atlas core never sees an HTTP error: the [`RateLimited`]
//! driver retries transient failures a bounded number of times and reports
//! every unresolvable address as an absence. Requests are strictly
//! serialized with a fixed delay between calls; the public Nominatim
//! instance requires it, and a batch pipeline has no reason to hammer it.

pub mod client;
pub mod driver;
pub mod error;

pub use client::NominatimClient;
pub use driver::{Geocoder, GeocodeSummary, RateLimited};
pub use error::{GeocodeError, GeocodeResult};
