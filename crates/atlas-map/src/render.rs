//! Page assembly and writing.

use crate::error::RenderResult;
use crate::model::{MapData, MapOptions};
use atlas_core::Record;
use atlas_keywords::KeywordPayload;
use chrono::Local;
use std::path::Path;
use tracing::info;

const TEMPLATE: &str = include_str!("template.html");
const DATA_PLACEHOLDER: &str = "__ATLAS_DATA__";

/// A rendered map page plus what went into it.
#[derive(Debug, Clone)]
pub struct MapDocument {
    pub html: String,
    /// Markers placed on the map.
    pub markers: usize,
    /// Records left off the map for lack of coordinates.
    pub skipped_without_coordinates: usize,
}

impl MapDocument {
    /// Renders the page from enriched records and the keyword payload.
    pub fn render(
        records: &[Record],
        keywords: KeywordPayload,
        options: &MapOptions,
    ) -> RenderResult<Self> {
        let generated_at = Local::now().format("%Y-%m-%d %H:%M").to_string();
        let data = MapData::assemble(records, keywords, options, generated_at);

        let markers = data.markers.len();
        let skipped = records.len() - markers;

        // `<` must not appear in the inline blob, or user text containing a
        // closing script tag would terminate the script element.
        let json = serde_json::to_string(&data)?.replace('<', "\\u003c");
        let html = TEMPLATE.replace(DATA_PLACEHOLDER, &json);

        info!(markers, skipped, "rendered map page");
        Ok(Self {
            html,
            markers,
            skipped_without_coordinates: skipped,
        })
    }

    /// Writes the page to disk.
    pub fn write_to(&self, path: &Path) -> RenderResult<()> {
        std::fs::write(path, &self.html)?;
        info!(path = %path.display(), "wrote map page");
        Ok(())
    }
}
