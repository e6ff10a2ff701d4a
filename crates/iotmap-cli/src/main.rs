//! iotmap - Map device-search results onto an interactive HTML map.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    iotmap_cli::run().await
}
