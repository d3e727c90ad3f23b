//! Geocode cache.
//!
//! Geocoding is the slow, rate-limited part of a run, so enriched records
//! are written back to a CSV that mirrors the source columns plus
//! `latitude`/`longitude`. The next run reuses that file wholesale when it
//! holds at least one coordinate pair; a cache with no coordinates at all
//! is treated as stale and ignored.

use crate::dataset::{
    load_records, LoadReport, COL_ADDRESS, COL_DESCRIPTION, COL_ERA, COL_LATITUDE, COL_LONGITUDE,
    COL_NAME, COL_PURPOSE,
};
use crate::error::DataResult;
use atlas_core::Record;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Column recording the derived district, so the cache is inspectable on
/// its own.
pub const COL_DISTRICT: &str = "district";

/// Loads the geocode cache if it exists and is usable.
///
/// Returns `None` when the file is absent or contains no coordinates.
/// The caller should fall back to the raw dataset and re-geocode.
pub fn load_cached(path: &Path) -> DataResult<Option<(Vec<Record>, LoadReport)>> {
    if !path.exists() {
        return Ok(None);
    }
    let (records, report) = load_records(path)?;
    if report.with_coordinates == 0 {
        info!(path = %path.display(), "cache has no coordinates, ignoring");
        return Ok(None);
    }
    info!(
        path = %path.display(),
        records = records.len(),
        with_coordinates = report.with_coordinates,
        "reusing geocode cache"
    );
    Ok(Some((records, report)))
}

/// Writes enriched records as the geocode cache.
///
/// The file is UTF-8 with a BOM so spreadsheet tools open the Korean text
/// correctly.
pub fn write_cache(path: &Path, records: &[Record]) -> DataResult<()> {
    let mut file = File::create(path)?;
    file.write_all("\u{feff}".as_bytes())?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record([
        COL_NAME,
        COL_ADDRESS,
        COL_DESCRIPTION,
        COL_PURPOSE,
        COL_ERA,
        COL_DISTRICT,
        COL_LATITUDE,
        COL_LONGITUDE,
    ])?;

    for record in records {
        let (lat, lon) = match record.coordinates {
            Some(c) => (c.lat.to_string(), c.lon.to_string()),
            None => (String::new(), String::new()),
        };
        writer.write_record([
            record.name.as_str(),
            record.address.as_str(),
            record.description.as_deref().unwrap_or(""),
            record.purpose.as_deref().unwrap_or(""),
            record.era.as_deref().unwrap_or(""),
            record.district.name(),
            lat.as_str(),
            lon.as_str(),
        ])?;
    }
    writer.flush()?;

    info!(path = %path.display(), records = records.len(), "wrote geocode cache");
    Ok(())
}
