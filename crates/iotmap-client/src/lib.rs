//! HTTP client for the device-search API.
//!
//! This crate provides the main [`IotmapClient`] used by the map pipeline to
//! query the search API.

#![doc(html_root_url = "https://docs.rs/iotmap-client/0.3.0")]

mod client;
pub mod api;

pub use client::{IotmapClient, IotmapClientBuilder};
pub use iotmap_core::{IotmapError, Result};
