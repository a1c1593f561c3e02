//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool metadata and dispatch come from the shared
//! [`ToolRegistry`]; the rmcp `ToolRouter` is derived from it, so every
//! transport sees the same tool table.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::tools::{ToolRegistry, build_tool_router, definitions::DadJokeTool};

/// The main MCP server handler.
///
/// Cheap to clone: every clone shares the same configuration, registry and
/// joke generator.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry of all tools.
    registry: Arc<ToolRegistry>,

    /// Joke generator, shared by the `dad_joke` tool and `/api/joke`.
    jokes: Arc<DadJokeTool>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> crate::Result<Self> {
        let jokes = Arc::new(match config.jokes.seed {
            Some(seed) => DadJokeTool::seeded(seed),
            None => DadJokeTool::from_clock(),
        });
        let registry = Arc::new(ToolRegistry::with_builtin_tools(jokes.clone())?);

        info!("Registered tools: {}", registry.tool_names().join(", "));

        Ok(Self {
            tool_router: build_tool_router::<Self>(&registry),
            config: Arc::new(config),
            registry,
            jokes,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Get the joke generator.
    pub fn jokes(&self) -> &DadJokeTool {
        &self.jokes
    }

    /// Instructions sent to clients during initialization.
    pub fn instructions(&self) -> &'static str {
        "Demo MCP server. Call `add` to sum two integers or `dad_joke` for a random joke."
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = self.name().to_string();
        server_info.version = self.version().to_string();

        ServerInfo {
            instructions: Some(self.instructions().to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_server() -> McpServer {
        let mut config = Config::default();
        config.jokes.seed = Some(11);
        McpServer::new(config).unwrap()
    }

    #[test]
    fn test_server_info() {
        let server = test_server();
        let info = server.get_info();
        assert_eq!(info.server_info.name, "mcp-demo");
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_router_matches_registry() {
        let server = test_server();
        let mut routed: Vec<_> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        routed.sort();
        assert_eq!(routed, server.registry().tool_names());
    }

    #[test]
    fn test_clones_share_joke_generator() {
        let server = test_server();
        let clone = server.clone();
        assert!(std::ptr::eq(server.jokes(), clone.jokes()));
    }
}
