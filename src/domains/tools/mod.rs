//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `handlers.rs` - The `ToolHandler` trait every tool implements
//! - `registry.rs` - Central tool registry, shared by every transport
//! - `router.rs` - rmcp ToolRouter builder for the rmcp-driven transports
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with `to_tool()` and a `ToolHandler` impl
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `ToolRegistry::with_builtin_tools`
//!
//! The router and the `/mcp` endpoint pick it up from the registry.

pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use error::{INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND, ToolError};
pub use handlers::{ToolHandler, first_text};
pub use registry::{RegisteredTool, ToolRegistry};
pub use router::build_tool_router;
