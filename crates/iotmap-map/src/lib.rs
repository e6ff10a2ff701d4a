//! Interactive HTML map rendering for device-search results.
//!
//! [`Marker`] derives a map point from a search match; [`DeviceMap`] collects
//! markers and serializes the whole map to one standalone HTML document with
//! Leaflet doing the client-side rendering.
//!
//! # Example
//!
//! ```rust,ignore
//! use iotmap_map::{DeviceMap, Marker};
//!
//! let mut map = DeviceMap::new();
//! for m in &results.matches {
//!     if let Some(marker) = Marker::from_match(m) {
//!         map.add_marker(marker);
//!     }
//! }
//! map.save("iot_device_map.html")?;
//! ```

#![doc(html_root_url = "https://docs.rs/iotmap-map/0.3.0")]

mod html;
mod marker;

pub use html::{DeviceMap, RenderError, DEFAULT_CENTER, DEFAULT_ZOOM, POPUP_MAX_WIDTH};
pub use marker::{Marker, MarkerStyle, NO_VULNS_LABEL};
