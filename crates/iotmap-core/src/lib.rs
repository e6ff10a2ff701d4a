//! Core types for the iotmap device-search pipeline.
//!
//! This crate provides the foundational types used across the iotmap workspace:
//!
//! - **Types**: Strongly-typed representations of the device-search API responses
//! - **Query**: The [`DeviceFilter`] country/port filter expression
//! - **Errors**: Comprehensive error handling with [`IotmapError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use iotmap_core::{DeviceFilter, SearchMatch, Result};
//!
//! fn describe(m: &SearchMatch) -> Result<()> {
//!     println!("IP: {}", m.ip_display());
//!     println!("Vulnerable: {}", m.is_vulnerable());
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/iotmap-core/0.3.0")]

mod error;
mod query;
pub mod types;

pub use error::{IotmapError, Result};
pub use query::DeviceFilter;
pub use types::*;
