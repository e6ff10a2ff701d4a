//! Query the device-search API and render matched device locations on an
//! interactive map.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use iotmap::{DeviceFilter, DeviceMap, IotmapClient, Marker};
//!
//! #[tokio::main]
//! async fn main() -> iotmap::Result<()> {
//!     let client = IotmapClient::new("your-api-key");
//!
//!     let filter = DeviceFilter::new("GB", "23")?;
//!     let results = client.search().query(filter.to_string()).send().await?;
//!
//!     let mut map = DeviceMap::new();
//!     for m in &results.matches {
//!         if let Some(marker) = Marker::from_match(m) {
//!             map.add_marker(marker);
//!         }
//!     }
//!
//!     map.save("iot_device_map.html").expect("write map");
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/iotmap/0.3.0")]

// Re-export core types
pub use iotmap_core::*;

// Re-export client
pub use iotmap_client::{IotmapClient, IotmapClientBuilder};

// Re-export map rendering
pub use iotmap_map::{DeviceMap, Marker, MarkerStyle, RenderError, NO_VULNS_LABEL};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
