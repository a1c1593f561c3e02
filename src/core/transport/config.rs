//! Transport configuration types.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Transport configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[default]
    Stdio,

    /// HTTP transport: streamable HTTP, SSE, JSON-RPC and REST endpoints.
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_cors() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: default_host(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Load transport config from environment variables.
    ///
    /// `SERVER_MODE=http` selects HTTP; any other value, or none, selects STDIO.
    pub fn from_env() -> Self {
        let mode = std::env::var("SERVER_MODE").unwrap_or_default();
        if mode != "http" {
            return Self::Stdio;
        }

        let mut http = HttpConfig::default();
        if let Ok(raw) = std::env::var("PORT") {
            http.port = raw.parse().unwrap_or_else(|_| {
                warn!("Invalid PORT {:?}, falling back to {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            });
        }
        if let Ok(host) = std::env::var("MCP_HTTP_HOST") {
            http.host = host;
        }
        if let Ok(cors) = std::env::var("MCP_HTTP_CORS") {
            http.enable_cors = cors.to_lowercase() != "false" && cors != "0";
        }

        Self::Http(http)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            Self::Http(cfg) => format!("HTTP on {}:{}", cfg.host, cfg.port),
        }
    }

    /// Check if this transport is the standard STDIO mode.
    pub fn is_stdio(&self) -> bool {
        matches!(self, Self::Stdio)
    }
}
