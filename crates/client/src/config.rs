//! Client configuration.
//!
//! Supports programmatic construction and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `GYMDESK_BASE_URL` | http://localhost:4000/api | API base URL |
//! | `GYMDESK_LOG_LEVEL` | info | Log level (error, warn, info, debug, trace) |
//! | `GYMDESK_CONNECT_TIMEOUT` | 10 | Connection-establishment timeout (seconds) |
//!
//! Only connection establishment is bounded. An accepted request that hangs
//! is left to hang; the owning screen's loading flag stays engaged.

use clap::Parser;

/// Configuration for the Gymdesk API client.
///
/// Construct from environment variables with [`ClientConfig::from_env`],
/// from command line arguments with `ClientConfig::parse`, or
/// programmatically with struct update syntax.
#[derive(Debug, Clone, Parser)]
#[command(name = "gymdesk")]
#[command(about = "Gymdesk dashboard API client")]
pub struct ClientConfig {
    /// Base URL of the backend API.
    #[arg(long, env = "GYMDESK_BASE_URL", default_value = "http://localhost:4000/api")]
    pub base_url: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "GYMDESK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Connection-establishment timeout in seconds.
    #[arg(long, env = "GYMDESK_CONNECT_TIMEOUT", default_value = "10")]
    pub connect_timeout: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000/api".to_string(),
            log_level: "info".to_string(),
            connect_timeout: 10,
        }
    }
}

impl ClientConfig {
    /// Creates a config from environment variables, falling back to
    /// defaults.
    ///
    /// Reads the environment only, never the process argv: an embedding
    /// binary (or a test harness) may carry arguments of its own that this
    /// config must not interpret.
    pub fn from_env() -> Self {
        Self::try_parse_from(["gymdesk"]).unwrap_or_default()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if url::Url::parse(&self.base_url).is_err() {
            errors.push(format!("Base URL '{}' is not a valid URL", self.base_url));
        }

        if self.connect_timeout == 0 {
            errors.push("Connect timeout cannot be 0".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing against a local stub.
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            log_level: "debug".to_string(),
            connect_timeout: 2,
        }
    }
}
