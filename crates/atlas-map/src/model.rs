//! The data blob embedded in the rendered page.

use atlas_core::{District, Record};
use atlas_keywords::KeywordPayload;
use serde::Serialize;

/// Gwangju city hall area, the original map's center.
pub const GWANGJU_CENTER: (f64, f64) = (35.1595, 126.8526);

/// Default initial zoom.
pub const DEFAULT_ZOOM: u8 = 12;

/// How many building purposes get their own layer and legend entry.
pub const TOP_PURPOSES: usize = 10;

/// Rendering options.
#[derive(Debug, Clone, Serialize)]
pub struct MapOptions {
    /// Page title.
    pub title: String,
    /// Initial map center as `(lat, lon)`.
    pub center: (f64, f64),
    /// Initial zoom level.
    pub zoom: u8,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            title: "광주 건축 관광자원 지도".to_string(),
            center: GWANGJU_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// One legend row for a district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistrictLayer {
    pub name: String,
    pub color: String,
    pub count: usize,
}

/// One legend row for a building purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurposeLayer {
    pub name: String,
    pub count: usize,
}

/// One map marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    pub district: String,
    pub color: String,
    pub name: String,
    pub address: String,
    pub purpose: String,
    pub era: String,
}

/// Everything the page script needs, serialized as one JSON object.
#[derive(Debug, Clone, Serialize)]
pub struct MapData {
    pub title: String,
    pub center: (f64, f64),
    pub zoom: u8,
    /// Districts in canonical order, with marker counts.
    pub districts: Vec<DistrictLayer>,
    /// The top building purposes by record count, descending.
    pub purposes: Vec<PurposeLayer>,
    pub markers: Vec<MapMarker>,
    /// District name → ranked keyword rows for the panel.
    pub keywords: KeywordPayload,
    /// Human-readable render timestamp for the footer.
    pub generated_at: String,
}

impl MapData {
    /// Assembles the blob from enriched records and the keyword payload.
    ///
    /// Records without coordinates contribute to the legend counts but get
    /// no marker; the caller learns how many were skipped from
    /// [`crate::MapDocument`].
    #[must_use]
    pub fn assemble(
        records: &[Record],
        keywords: KeywordPayload,
        options: &MapOptions,
        generated_at: String,
    ) -> Self {
        let districts = District::WITH_ETC
            .iter()
            .map(|&d| DistrictLayer {
                name: d.name().to_string(),
                color: d.marker_color().to_string(),
                count: records.iter().filter(|r| r.district == d).count(),
            })
            .collect();

        let purposes = top_purposes(records, TOP_PURPOSES);

        let markers = records
            .iter()
            .filter_map(|record| {
                let coordinates = record.coordinates?;
                Some(MapMarker {
                    lat: coordinates.lat,
                    lon: coordinates.lon,
                    district: record.district.name().to_string(),
                    color: record.district.marker_color().to_string(),
                    name: record.name.clone(),
                    address: record.address.clone(),
                    purpose: record.purpose_or_unknown().to_string(),
                    era: record.era.clone().unwrap_or_default(),
                })
            })
            .collect();

        Self {
            title: options.title.clone(),
            center: options.center,
            zoom: options.zoom,
            districts,
            purposes,
            markers,
            keywords,
            generated_at,
        }
    }
}

/// The `n` most common purposes, descending by count, ties by name.
fn top_purposes(records: &[Record], n: usize) -> Vec<PurposeLayer> {
    let mut counts: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
    for record in records {
        *counts.entry(record.purpose_or_unknown()).or_insert(0) += 1;
    }
    let mut purposes: Vec<PurposeLayer> = counts
        .into_iter()
        .map(|(name, count)| PurposeLayer {
            name: name.to_string(),
            count,
        })
        .collect();
    purposes.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    purposes.truncate(n);
    purposes
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::Coordinates;

    fn record(address: &str, purpose: Option<&str>, coords: Option<(f64, f64)>) -> Record {
        let mut r = Record::new("시설", address, None, purpose.map(str::to_string), None);
        r.coordinates = coords.map(|(lat, lon)| Coordinates::new(lat, lon));
        r
    }

    #[test]
    fn markers_skip_records_without_coordinates() {
        let records = vec![
            record("광주 동구", None, Some((35.14, 126.92))),
            record("광주 서구", None, None),
        ];
        let data = MapData::assemble(
            &records,
            KeywordPayload::new(),
            &MapOptions::default(),
            "test".into(),
        );
        assert_eq!(data.markers.len(), 1);
        assert_eq!(data.markers[0].district, "동구");
        assert_eq!(data.markers[0].color, "blue");
    }

    #[test]
    fn legend_counts_include_unmapped_records() {
        let records = vec![
            record("광주 동구", None, Some((35.14, 126.92))),
            record("광주 동구", None, None),
        ];
        let data = MapData::assemble(
            &records,
            KeywordPayload::new(),
            &MapOptions::default(),
            "test".into(),
        );
        let dong = data.districts.iter().find(|d| d.name == "동구").unwrap();
        assert_eq!(dong.count, 2);
        assert_eq!(data.districts.len(), 6);
    }

    #[test]
    fn purposes_rank_by_count_with_unknown_placeholder() {
        let records = vec![
            record("광주 동구", Some("전시시설"), None),
            record("광주 서구", Some("전시시설"), None),
            record("광주 남구", None, None),
        ];
        let data = MapData::assemble(
            &records,
            KeywordPayload::new(),
            &MapOptions::default(),
            "test".into(),
        );
        assert_eq!(data.purposes[0].name, "전시시설");
        assert_eq!(data.purposes[0].count, 2);
        assert!(data.purposes.iter().any(|p| p.name == "미상"));
    }

    #[test]
    fn top_purposes_truncates() {
        let records: Vec<Record> = (0..15)
            .map(|i| record("광주 동구", Some(&format!("용도{i:02}")), None))
            .collect();
        assert_eq!(top_purposes(&records, TOP_PURPOSES).len(), 10);
    }
}
