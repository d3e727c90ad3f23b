//! Facility CSV loading.
//!
//! The source dataset ships with `PLACE_NM`/`ADDR`/`DC_CN`/`BULD_PURPS_NM`/
//! `ERA_NM` columns, in UTF-8 or legacy EUC-KR. Cache files written by this
//! crate additionally carry `latitude`/`longitude`. Loading validates the
//! required columns, skips (and counts) rows without an address, and leaves
//! every optional field as `None` when empty. A malformed row degrades;
//! it never aborts the batch.

use crate::error::{DataError, DataResult};
use atlas_core::{Coordinates, District, Record};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Required columns.
pub const COL_NAME: &str = "PLACE_NM";
pub const COL_ADDRESS: &str = "ADDR";
/// Optional columns.
pub const COL_DESCRIPTION: &str = "DC_CN";
pub const COL_PURPOSE: &str = "BULD_PURPS_NM";
pub const COL_ERA: &str = "ERA_NM";
/// Cache-only columns.
pub const COL_LATITUDE: &str = "latitude";
pub const COL_LONGITUDE: &str = "longitude";

/// What happened during one load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Data rows seen in the file.
    pub total_rows: usize,
    /// Rows dropped for having no address.
    pub skipped_missing_address: usize,
    /// Loaded records that already carry coordinates.
    pub with_coordinates: usize,
}

impl LoadReport {
    /// Records that made it into the batch.
    #[must_use]
    pub fn loaded(&self) -> usize {
        self.total_rows - self.skipped_missing_address
    }
}

/// Loads facility records from a CSV file.
///
/// Returns the records plus a [`LoadReport`]. Fails only structurally: an
/// unreadable file, a missing required column, or a file that yields zero
/// usable records.
pub fn load_records(path: &Path) -> DataResult<(Vec<Record>, LoadReport)> {
    let text = read_decoded(path)?;
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let col = |name: &'static str| -> DataResult<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DataError::MissingColumn(name))
    };
    let idx_name = col(COL_NAME)?;
    let idx_address = col(COL_ADDRESS)?;
    let idx_description = headers.iter().position(|h| h == COL_DESCRIPTION);
    let idx_purpose = headers.iter().position(|h| h == COL_PURPOSE);
    let idx_era = headers.iter().position(|h| h == COL_ERA);
    let idx_lat = headers.iter().position(|h| h == COL_LATITUDE);
    let idx_lon = headers.iter().position(|h| h == COL_LONGITUDE);

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for row in reader.records() {
        let row = row?;
        report.total_rows += 1;

        let address = row.get(idx_address).unwrap_or("").trim();
        if address.is_empty() {
            report.skipped_missing_address += 1;
            continue;
        }

        let field = |idx: Option<usize>| -> Option<String> {
            idx.and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let mut record = Record::new(
            row.get(idx_name).unwrap_or("").trim(),
            address,
            field(idx_description),
            field(idx_purpose),
            field(idx_era),
        );
        record.coordinates = parse_coordinates(&row, idx_lat, idx_lon);
        if record.coordinates.is_some() {
            report.with_coordinates += 1;
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(DataError::NoRecords(path.to_path_buf()));
    }

    info!(
        path = %path.display(),
        loaded = records.len(),
        skipped = report.skipped_missing_address,
        "loaded facility records"
    );
    Ok((records, report))
}

/// Per-district record counts in canonical district order.
#[must_use]
pub fn district_counts(records: &[Record]) -> Vec<(District, usize)> {
    District::WITH_ETC
        .iter()
        .map(|&d| (d, records.iter().filter(|r| r.district == d).count()))
        .collect()
}

fn parse_coordinates(
    row: &csv::StringRecord,
    idx_lat: Option<usize>,
    idx_lon: Option<usize>,
) -> Option<Coordinates> {
    let lat: f64 = row.get(idx_lat?)?.trim().parse().ok()?;
    let lon: f64 = row.get(idx_lon?)?.trim().parse().ok()?;
    Some(Coordinates::new(lat, lon))
}

/// Reads a file as text, trying UTF-8 first and falling back to EUC-KR.
fn read_decoded(path: &Path) -> DataResult<String> {
    let bytes = fs::read(path)?;
    // Strip a UTF-8 BOM if present (cache files carry one for Excel).
    let bytes = bytes
        .strip_prefix("\u{feff}".as_bytes())
        .unwrap_or(&bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => {
            debug!(path = %path.display(), "decoded as utf-8");
            Ok(text.to_string())
        }
        Err(_) => {
            let (text, _, had_errors) = encoding_rs::EUC_KR.decode(bytes);
            if had_errors {
                warn!(path = %path.display(), "euc-kr decode produced replacement characters");
            } else {
                debug!(path = %path.display(), "decoded as euc-kr");
            }
            Ok(text.into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_utf8_with_optional_fields() {
        let file = write_temp(
            "PLACE_NM,ADDR,DC_CN,BULD_PURPS_NM,ERA_NM\n\
             전일빌딩,광주광역시 동구 금남로 245,역사적 건물,업무시설,현대\n\
             무명가옥,광주 남구 양촌길,,,\n"
                .as_bytes(),
        );
        let (records, report) = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(report.loaded(), 2);
        assert_eq!(records[0].district, District::Dong);
        assert_eq!(records[0].description.as_deref(), Some("역사적 건물"));
        assert!(records[1].description.is_none());
        assert!(records[1].purpose.is_none());
    }

    #[test]
    fn skips_and_counts_rows_without_address() {
        let file = write_temp(
            "PLACE_NM,ADDR\n유령시설,\n전일빌딩,광주 동구 금남로\n".as_bytes(),
        );
        let (records, report) = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(report.total_rows, 2);
        assert_eq!(report.skipped_missing_address, 1);
    }

    #[test]
    fn missing_required_column_aborts() {
        let file = write_temp("PLACE_NM,DC_CN\n이름,설명\n".as_bytes());
        let err = load_records(file.path()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn(COL_ADDRESS)));
    }

    #[test]
    fn file_with_only_unusable_rows_aborts() {
        let file = write_temp("PLACE_NM,ADDR\n이름,\n".as_bytes());
        let err = load_records(file.path()).unwrap_err();
        assert!(matches!(err, DataError::NoRecords(_)));
    }

    #[test]
    fn decodes_euc_kr_input() {
        let header = "PLACE_NM,ADDR\n";
        let row = "전일빌딩,광주 동구 금남로\n";
        let mut bytes = Vec::new();
        let (encoded, _, _) = encoding_rs::EUC_KR.encode(header);
        bytes.extend_from_slice(&encoded);
        let (encoded, _, _) = encoding_rs::EUC_KR.encode(row);
        bytes.extend_from_slice(&encoded);

        let file = write_temp(&bytes);
        let (records, _) = load_records(file.path()).unwrap();
        assert_eq!(records[0].name, "전일빌딩");
        assert_eq!(records[0].district, District::Dong);
    }

    #[test]
    fn reads_coordinates_from_cache_columns() {
        let file = write_temp(
            "PLACE_NM,ADDR,latitude,longitude\n\
             전일빌딩,광주 동구 금남로,35.1476,126.9184\n\
             무명가옥,광주 남구 양촌길,,\n"
                .as_bytes(),
        );
        let (records, report) = load_records(file.path()).unwrap();
        assert_eq!(report.with_coordinates, 1);
        let coords = records[0].coordinates.unwrap();
        assert!((coords.lat - 35.1476).abs() < 1e-9);
        assert!(records[1].coordinates.is_none());
    }

    #[test]
    fn bom_prefixed_utf8_parses_cleanly() {
        let file = write_temp("\u{feff}PLACE_NM,ADDR\n전일빌딩,광주 동구\n".as_bytes());
        let (records, _) = load_records(file.path()).unwrap();
        assert_eq!(records[0].name, "전일빌딩");
    }

    #[test]
    fn district_counts_cover_all_buckets() {
        let file = write_temp(
            "PLACE_NM,ADDR\nA,광주 동구\nB,광주 동구\nC,담양군\n".as_bytes(),
        );
        let (records, _) = load_records(file.path()).unwrap();
        let counts = district_counts(&records);
        assert_eq!(counts.len(), 6);
        assert_eq!(counts[0], (District::Dong, 2));
        assert_eq!(counts[5], (District::Etc, 1));
    }
}
