//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Joke generator configuration.
    pub jokes: JokesConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
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

/// Configuration for the dad joke generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JokesConfig {
    /// Fixed seed for the random source. Seeded from the clock when `None`.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mcp-demo".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            jokes: JokesConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `SERVER_MODE` and `PORT` select the transport; the remaining knobs
    /// are prefixed with `MCP_`, e.g. `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Some(seed) = std::env::var("MCP_JOKE_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            info!("Joke generator seeded from MCP_JOKE_SEED");
            config.jokes.seed = Some(seed);
        }

        config
    }
}

/// Mutex to ensure env var tests run serially across modules.
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "mcp-demo");
        assert_eq!(config.logging.level, "info");
        assert!(config.transport.is_stdio());
        assert!(config.jokes.seed.is_none());
    }

    #[test]
    fn test_joke_seed_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_JOKE_SEED", "1234");
        }
        let config = Config::from_env();
        assert_eq!(config.jokes.seed, Some(1234));
        unsafe {
            std::env::remove_var("MCP_JOKE_SEED");
        }
    }

    #[test]
    fn test_invalid_joke_seed_ignored() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_JOKE_SEED", "not-a-number");
        }
        let config = Config::from_env();
        assert!(config.jokes.seed.is_none());
        unsafe {
            std::env::remove_var("MCP_JOKE_SEED");
        }
    }
}
