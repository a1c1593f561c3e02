//! MCP Demo Server Library
//!
//! A minimal Model Context Protocol (MCP) server exposing two tools, `add`
//! and `dad_joke`, over STDIO or a multiplexed HTTP server.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic
//!   - **tools**: the tool registry and tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use mcp_demo_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
