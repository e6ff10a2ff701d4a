use std::fmt::Write;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::marker::Marker;

/// Default map center when no view is configured
pub const DEFAULT_CENTER: (f64, f64) = (54.5, -4.5);

/// Default zoom level
pub const DEFAULT_ZOOM: u8 = 6;

/// Maximum popup width in pixels
pub const POPUP_MAX_WIDTH: u32 = 300;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Errors from rendering or writing a map document
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("formatting error: {0}")]
    Format(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for RenderError {
    fn from(e: std::fmt::Error) -> Self {
        Self::Format(e.to_string())
    }
}

/// Interactive device map serialized as one standalone HTML document.
///
/// Markers are rendered in insertion order. The document loads Leaflet and
/// the OpenStreetMap tile layer from their CDNs; everything else is inline.
#[derive(Debug, Clone)]
pub struct DeviceMap {
    center: (f64, f64),
    zoom: u8,
    markers: Vec<Marker>,
}

impl Default for DeviceMap {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceMap {
    /// Create a map with the default view
    #[must_use]
    pub fn new() -> Self {
        Self::with_view(DEFAULT_CENTER, DEFAULT_ZOOM)
    }

    /// Create a map centered on the given coordinates
    #[must_use]
    pub fn with_view(center: (f64, f64), zoom: u8) -> Self {
        Self {
            center,
            zoom,
            markers: Vec::new(),
        }
    }

    /// Attach a marker to the map
    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Markers currently on the map, in insertion order
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Render the complete HTML document
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::with_capacity(4096);
        self.write_document(&mut out)?;
        Ok(out)
    }

    /// Render the document and write it to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        let document = self.render()?;
        fs::write(path, document).map_err(|e| {
            RenderError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to write {}: {}", path.display(), e),
            ))
        })
    }

    fn write_document(&self, out: &mut String) -> Result<(), RenderError> {
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n");
        out.push_str("<title>IoT Device Map</title>\n");
        writeln!(out, "<link rel=\"stylesheet\" href=\"{LEAFLET_CSS}\">")?;
        out.push_str(
            "<style>\nhtml,body{margin:0;padding:0;height:100%}\n#map{height:100%;width:100%}\n</style>\n",
        );
        out.push_str("</head>\n<body>\n");
        out.push_str("<div id=\"map\"></div>\n");
        writeln!(out, "<script src=\"{LEAFLET_JS}\"></script>")?;

        out.push_str("<script>\n");
        writeln!(
            out,
            "const map = L.map('map').setView([{}, {}], {});",
            self.center.0, self.center.1, self.zoom,
        )?;
        writeln!(
            out,
            "L.tileLayer('{TILE_URL}', {{maxZoom: 19, attribution: '&copy; OpenStreetMap contributors'}}).addTo(map);",
        )?;

        writeln!(out, "const devices = {};", self.markers_json()?)?;
        out.push_str("for (const d of devices) {\n");
        out.push_str(
            "  L.circleMarker([d.lat, d.lon], {radius: 7, weight: 2, color: d.color, fillColor: d.color, fillOpacity: 0.85})\n",
        );
        writeln!(
            out,
            "    .addTo(map).bindPopup(d.popup, {{maxWidth: {POPUP_MAX_WIDTH}}});",
        )?;
        out.push_str("}\n");
        out.push_str("</script>\n");

        out.push_str("</body>\n</html>\n");
        Ok(())
    }

    /// Marker list as script-safe JSON.
    ///
    /// `</` is escaped so popup HTML can never terminate the surrounding
    /// `<script>` block.
    fn markers_json(&self) -> Result<String, RenderError> {
        #[derive(Serialize)]
        struct MarkerData<'a> {
            lat: f64,
            lon: f64,
            popup: &'a str,
            color: &'a str,
        }

        let data: Vec<MarkerData<'_>> = self
            .markers
            .iter()
            .map(|m| MarkerData {
                lat: m.lat,
                lon: m.lon,
                popup: &m.popup,
                color: m.style.color(),
            })
            .collect();

        let json = serde_json::to_string(&data).map_err(|e| RenderError::Format(e.to_string()))?;
        Ok(json.replace("</", "<\\/"))
    }
}

/// Escape text for inclusion in HTML
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
