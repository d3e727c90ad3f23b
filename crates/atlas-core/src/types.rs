//! Facility records and geographic coordinates.
//!
//! A [`Record`] is one tourism/architecture facility as it flows through the
//! pipeline: loaded from CSV, labeled with a district, optionally enriched
//! with coordinates by the geocoding collaborator, and finally consumed by
//! the keyword engine and the map renderer.
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization.

use crate::district::District;
use serde::{Deserialize, Serialize};

/// A WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One facility entity with everything the pipeline knows about it.
///
/// The district label is always present; [`District::Etc`] stands in when
/// the address names no district. Coordinates are absent until geocoding
/// succeeds, and stay absent when it fails; downstream stages must tolerate
/// that rather than error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Facility name (the `PLACE_NM` column).
    pub name: String,

    /// Raw address text (the `ADDR` column). Rows without one are skipped
    /// at load time, so this is never empty.
    pub address: String,

    /// Free-text description (the `DC_CN` column), if present.
    pub description: Option<String>,

    /// Building purpose (the `BULD_PURPS_NM` column), if present.
    pub purpose: Option<String>,

    /// Era label (the `ERA_NM` column), if present.
    pub era: Option<String>,

    /// Administrative district derived from the address.
    pub district: District,

    /// Geocoded position, absent when geocoding failed or has not run.
    pub coordinates: Option<Coordinates>,
}

impl Record {
    /// Creates a record from the raw CSV fields, deriving the district from
    /// the address.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        description: Option<String>,
        purpose: Option<String>,
        era: Option<String>,
    ) -> Self {
        let address = address.into();
        let district = District::from_address(&address);
        Self {
            name: name.into(),
            address,
            description,
            purpose,
            era,
            district,
            coordinates: None,
        }
    }

    /// Returns the purpose, or the 미상 ("unknown") placeholder the map
    /// renderer shows for facilities without one.
    #[must_use]
    pub fn purpose_or_unknown(&self) -> &str {
        match self.purpose.as_deref() {
            Some(p) if !p.trim().is_empty() => p,
            _ => "미상",
        }
    }
}
