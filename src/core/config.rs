//! Configuration management for the MCP server.
//!
//! Configuration starts from defaults, then `.env` (via dotenvy), then the
//! process environment. The Harmonica API key has no default: loading fails
//! when it is missing.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::{Error, Result};

/// Public Harmonica deployment used when `HARMONICA_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "https://app.harmonica.chat";

/// Request timeout used when `HARMONICA_TIMEOUT_SECS` is unset or invalid.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Harmonica API connection settings.
    pub api: ApiConfig,

    /// Problems found while loading, logged once logging is initialized.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported in logs.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Connection settings for the Harmonica REST API.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the deployment, without the `/api/v1` prefix.
    pub base_url: String,

    /// Bearer token sent with every request.
    pub api_key: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ApiConfig {
    /// Create API settings with the default timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Create a configuration for the given API settings, with defaults elsewhere.
    pub fn new(api: ApiConfig) -> Self {
        Self {
            server: ServerConfig {
                name: "harmonica".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            api,
            warnings: Vec::new(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `HARMONICA_API_KEY` (required), `HARMONICA_API_URL`,
    /// `HARMONICA_TIMEOUT_SECS`, `MCP_SERVER_NAME` and `MCP_LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("HARMONICA_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::config("HARMONICA_API_KEY environment variable is required."))?;

        let base_url = std::env::var("HARMONICA_API_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut config = Self::new(ApiConfig::new(base_url, api_key));

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(raw) = std::env::var("HARMONICA_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.api.timeout_secs = secs,
                _ => config.warnings.push(format!(
                    "Ignoring invalid HARMONICA_TIMEOUT_SECS={:?}, using {}s",
                    raw, DEFAULT_TIMEOUT_SECS
                )),
            }
        }

        Ok(config)
    }
}
