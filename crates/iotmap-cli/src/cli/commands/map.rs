//! `iotmap map` - Search devices and render them to an interactive HTML map.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::{settings::Style, Table, Tabled};

use iotmap::{DeviceFilter, DeviceMap, IotmapClient, Marker};
use iotmap_core::SearchResults;
use iotmap_map::DEFAULT_CENTER;

use super::Context;
use crate::cli::args::MapArgs;
use crate::prompt;

#[derive(Tabled)]
struct MappedRow {
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Port")]
    port: u16,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Vulns")]
    vulns: usize,
}

pub async fn execute(ctx: Context, args: MapArgs) -> Result<()> {
    let country = prompt::resolve(args.country, "Enter the country code (e.g. GB, US)")?;
    let port = prompt::resolve(args.port, "Enter the port number to search for (e.g. 23, 80)")?;
    let filter = DeviceFilter::new(&country, &port)?;

    let client = ctx.client()?;

    let spinner = fetch_spinner(&filter);
    let results = fetch_or_empty(&client, &filter).await;
    spinner.finish_and_clear();

    println!("Found {} devices.", results.matches.len());

    let center = args.center.unwrap_or(DEFAULT_CENTER);
    let mut map = DeviceMap::with_view(center, args.zoom);

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for m in &results.matches {
        match Marker::from_match(m) {
            Some(marker) => {
                rows.push(MappedRow {
                    ip: m.ip_display().to_string(),
                    port: m.port,
                    location: format!("{:.4}, {:.4}", marker.lat, marker.lon),
                    vulns: m.vulns.len(),
                });
                map.add_marker(marker);
            }
            None => skipped += 1,
        }
    }

    if results.matches.is_empty() {
        println!("No devices found or the query returned no results.");
    } else {
        print_summary(&rows, skipped);
    }

    let path = output_path(&args.output);
    map.save(&path)
        .with_context(|| format!("failed to save map to {}", path.display()))?;

    println!(
        "Interactive map saved as {}. Open it in your browser to view.",
        path.display().to_string().cyan(),
    );

    if args.open {
        open::that(&path).with_context(|| format!("failed to open {}", path.display()))?;
    }

    Ok(())
}

/// Run the search, substituting an empty result set on any failure.
///
/// The pipeline always proceeds to produce a map, possibly with zero
/// markers; search errors are reported on the console and swallowed.
pub async fn fetch_or_empty(client: &IotmapClient, filter: &DeviceFilter) -> SearchResults {
    match client.search().query(filter.to_string()).send().await {
        Ok(results) => results,
        Err(e) => {
            println!("{} {}", "Error:".red().bold(), e);
            SearchResults::default()
        }
    }
}

fn fetch_spinner(filter: &DeviceFilter) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("valid spinner template"),
    );
    spinner.set_message(format!(
        "Fetching data for country: {}, port: {}...",
        filter.country(),
        filter.port(),
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_summary(rows: &[MappedRow], skipped: usize) {
    if !rows.is_empty() {
        println!();
        println!("{}", "Mapped devices:".bold().underline());

        let shown = rows.len().min(15);
        let table = Table::new(&rows[..shown]).with(Style::rounded()).to_string();
        println!("{table}");

        if rows.len() > shown {
            println!("{}", format!("... and {} more markers", rows.len() - shown).dimmed());
        }
    }

    if skipped > 0 {
        println!(
            "{}",
            format!("Skipped {skipped} devices without coordinates.").dimmed()
        );
    }
    println!();
}

fn output_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}
