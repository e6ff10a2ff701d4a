//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        init_tracing();
    }

    // Load configuration
    let config = Config::load()?;

    // Determine output format
    let output_format = cli
        .output_format
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // Get API key from CLI, env, or config
    let api_key = cli.api_key.or_else(|| config.api_key.clone());

    // Create context for commands
    let ctx = commands::Context {
        api_key,
        output_format,
        verbose: cli.verbose,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Map(args) => commands::map::execute(ctx, args).await,
        Commands::Count(args) => commands::count::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(ctx, args).await,
    }
}

/// Install a tracing subscriber honoring RUST_LOG, defaulting to debug.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("iotmap=debug,iotmap_client=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
