//! `iotmap count` - Count matching devices without using query credits.

use anyhow::Result;
use colored::Colorize;

use iotmap::DeviceFilter;

use super::Context;
use crate::cli::args::CountArgs;
use crate::output::OutputFormat;
use crate::prompt;

pub async fn execute(ctx: Context, args: CountArgs) -> Result<()> {
    let country = prompt::resolve(args.country, "Enter the country code (e.g. GB, US)")?;
    let port = prompt::resolve(args.port, "Enter the port number to count (e.g. 23, 80)")?;
    let filter = DeviceFilter::new(&country, &port)?;

    let client = ctx.client()?;

    let mut builder = client.search().count(filter.to_string());
    for facet in &args.facets {
        builder = builder.facet(facet);
    }

    let results = builder.send().await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Pretty => {
            println!("{} {}", "Total:".bold(), results.total.to_string().cyan().bold());
            println!("{} {}", "Query:".bold(), filter.to_string().dimmed());

            if !results.facets.is_empty() {
                println!();
                for (name, values) in &results.facets {
                    println!("{} {}:", "Facet:".bold(), name.yellow());
                    for fv in values.iter().take(10) {
                        let pct = if results.total > 0 {
                            (fv.count as f64 / results.total as f64 * 100.0) as u32
                        } else {
                            0
                        };
                        let bar = "█".repeat((pct / 5) as usize);
                        println!(
                            "  {:>8}  {:>3}% {} {}",
                            fv.count.to_string().cyan(),
                            pct,
                            bar.green(),
                            fv.value
                        );
                    }
                    println!();
                }
            }

            println!();
            println!("{}", "This query did not use any credits!".green());
            println!("{}", "Use 'map' to render the actual devices.".dimmed());
        }
    }

    Ok(())
}
