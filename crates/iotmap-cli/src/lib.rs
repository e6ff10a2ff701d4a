//! # iotmap-cli
//!
//! Command-line interface for the iotmap pipeline: search the device database
//! by country and port, then render every located match as a marker on a
//! standalone interactive HTML map.
//!
//! ## Features
//!
//! - **Map pipeline**: `iotmap map GB 23` fetches matches and writes
//!   `iot_device_map.html`
//! - **Interactive prompts**: country and port are prompted for when omitted
//! - **Count**: result totals without spending query credits
//! - **Config**: API key and defaults in a TOML config file

pub mod cli;
pub mod config;
pub mod output;
pub mod prompt;

pub use cli::run;
