//! Transport layer for the MCP server.
//!
//! This module provides two transport modes, selected by `SERVER_MODE`:
//! - **STDIO**: Standard input/output (default for MCP)
//! - **HTTP**: one multiplexed server exposing streamable HTTP at `/`, the
//!   legacy SSE transport (`/sse` + `/message`), raw JSON-RPC at `/mcp`,
//!   REST convenience endpoints and liveness probes
//!
//! Each transport handles the connection lifecycle and delegates
//! message processing to the MCP server handler.

mod config;
mod error;
mod service;

pub mod http;
pub mod stdio;

pub use config::{DEFAULT_PORT, HttpConfig, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
