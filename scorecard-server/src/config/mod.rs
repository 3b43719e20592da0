//! Server configuration module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Maximum request body size in bytes
    pub max_request_size: usize,

    /// How long a single scoring request may take before it is abandoned
    pub request_timeout_secs: u64,

    /// Scorecard configuration file (rubric, weights, embeddings, logging)
    pub config_file_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            max_request_size: 2 * 1024 * 1024, // 2MB
            request_timeout_secs: 30,
            config_file_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from CLI arguments and environment variables
    /// CLI arguments take precedence over environment variables
    pub fn from_cli_and_env(cli_args: crate::cli::CliArgs) -> Result<Self> {
        let mut config = Self::default();

        if let Some(port) = cli_args.port {
            config.port = port;
        } else if let Ok(port) = env::var("SCORECARD_PORT") {
            config.port = port.parse()?;
        } else if let Ok(port) = env::var("PORT") {
            config.port = port.parse()?;
        }

        if let Some(max_size) = cli_args.max_request_size {
            config.max_request_size = max_size;
        } else if let Ok(max_size) = env::var("SCORECARD_MAX_REQUEST_SIZE") {
            config.max_request_size = max_size.parse()?;
        }

        if let Some(timeout) = cli_args.request_timeout_secs {
            config.request_timeout_secs = timeout;
        } else if let Ok(timeout) = env::var("SCORECARD_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = timeout.parse()?;
        }

        if let Some(config_path) = cli_args.config_file {
            config.config_file_path = Some(config_path);
        } else if let Ok(config_path) = env::var("SCORECARD_CONFIG_FILE") {
            config.config_file_path = Some(PathBuf::from(config_path));
        }

        config.validate()?;

        Ok(config)
    }

    /// Reject values the server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            anyhow::bail!("Request timeout must be greater than 0 seconds");
        }
        if self.max_request_size == 0 {
            anyhow::bail!("Maximum request size must be greater than 0 bytes");
        }
        Ok(())
    }

    /// Scoring request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
