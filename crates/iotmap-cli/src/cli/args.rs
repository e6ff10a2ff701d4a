//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

/// Map country/port device-search results onto an interactive HTML map.
///
/// Get your API key at: https://account.shodan.io
#[derive(Parser, Debug)]
#[command(name = "iotmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// API key (or set SHODAN_API_KEY env var)
    #[arg(short = 'k', long, env = "SHODAN_API_KEY", global = true)]
    pub api_key: Option<String>,

    /// Output format for reporting commands
    #[arg(long, global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search devices by country and port, render them to an HTML map
    Map(MapArgs),

    /// Count matching devices without using query credits
    Count(CountArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Map command
// ============================================================================

#[derive(Args, Debug)]
pub struct MapArgs {
    /// Country code to search (e.g. GB, US); prompted for when omitted
    pub country: Option<String>,

    /// Port number to search (e.g. 23, 80); prompted for when omitted
    pub port: Option<String>,

    /// Output HTML file
    #[arg(short = 'o', long, default_value = "iot_device_map.html")]
    pub output: String,

    /// Map center as "lat,lon" (default 54.5,-4.5)
    #[arg(long, value_parser = parse_center)]
    pub center: Option<(f64, f64)>,

    /// Initial zoom level
    #[arg(long, default_value_t = iotmap_map::DEFAULT_ZOOM)]
    pub zoom: u8,

    /// Open the generated map in a browser
    #[arg(long)]
    pub open: bool,
}

/// Parse a "lat,lon" pair
fn parse_center(s: &str) -> Result<(f64, f64), String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected lat,lon but got '{s}'"))?;

    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{lat}'"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{lon}'"))?;

    Ok((lat, lon))
}

// ============================================================================
// Count command
// ============================================================================

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Country code to count (e.g. GB, US); prompted for when omitted
    pub country: Option<String>,

    /// Port number to count (e.g. 23, 80); prompted for when omitted
    pub port: Option<String>,

    /// Add facets to aggregate results (e.g. org, city)
    #[arg(short, long)]
    pub facets: Vec<String>,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (api_key, output_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
