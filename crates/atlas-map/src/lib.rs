//! Interactive map rendering.
//!
//! Produces one self-contained HTML page: Leaflet from a CDN, a marker
//! layer per district (visible by default), a layer per top building
//! purpose (hidden until selected), a clickable legend, and the
//! per-district keyword panel fed by the keyword payload.
//!
//! All dynamic content reaches the page as a single embedded JSON blob;
//! the page's own script builds markers, legend, and panel from it. No
//! user-provided text is interpolated into markup on the Rust side.

pub mod error;
pub mod model;
pub mod render;

pub use error::{RenderError, RenderResult};
pub use model::{MapData, MapMarker, MapOptions};
pub use render::MapDocument;
