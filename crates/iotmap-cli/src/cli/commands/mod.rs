//! Command implementations.

pub mod config;
pub mod count;
pub mod map;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Device-search API key
    pub api_key: Option<String>,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,
}

impl Context {
    /// Get the API key, returning an error if not set.
    pub fn require_api_key(&self) -> anyhow::Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "API key required.\n\n\
                 Set it with one of:\n  \
                 1. --api-key <KEY>\n  \
                 2. SHODAN_API_KEY environment variable\n  \
                 3. iotmap config set api_key <KEY>\n\n\
                 Get your key at: https://account.shodan.io"
            )
        })
    }

    /// Create an API client with the configured key.
    pub fn client(&self) -> anyhow::Result<iotmap::IotmapClient> {
        let key = self.require_api_key()?;
        Ok(iotmap::IotmapClient::new(key))
    }
}
