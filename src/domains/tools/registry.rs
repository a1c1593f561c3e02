//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools, in registration order
//! - Dispatch of tool calls by name
//! - Tool metadata for listing
//!
//! The registry is built once at startup and only read afterwards, so it is
//! shared between transports behind an `Arc` without locking.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{debug, warn};

use super::definitions::{AddTool, DadJokeTool};
use super::{ToolError, ToolHandler};

/// A tool descriptor paired with its handler.
#[derive(Clone)]
pub struct RegisteredTool {
    /// Metadata advertised to clients.
    pub tool: Tool,

    /// The handler invoked for calls to this tool.
    pub handler: Arc<dyn ToolHandler>,
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the registry with the built-in `add` and `dad_joke` tools.
    ///
    /// `jokes` is shared so that other endpoints can draw from the same generator.
    pub fn with_builtin_tools(jokes: Arc<DadJokeTool>) -> Result<Self, ToolError> {
        let mut registry = Self::new();
        registry.register(AddTool::to_tool(), Arc::new(AddTool))?;
        registry.register(DadJokeTool::to_tool(), jokes)?;
        Ok(registry)
    }

    /// Register a tool. Fails if a tool with the same name already exists.
    pub fn register(&mut self, tool: Tool, handler: Arc<dyn ToolHandler>) -> Result<(), ToolError> {
        let name = tool.name.to_string();
        if self.index.contains_key(&name) {
            return Err(ToolError::Duplicate(name));
        }

        debug!("Registering tool: {}", name);
        self.index.insert(name, self.tools.len());
        self.tools.push(RegisteredTool { tool, handler });
        Ok(())
    }

    /// Look up the handler for a tool.
    pub fn lookup(&self, name: &str) -> Result<&Arc<dyn ToolHandler>, ToolError> {
        self.index
            .get(name)
            .map(|&i| &self.tools[i].handler)
            .ok_or_else(|| ToolError::not_found(name))
    }

    /// All tool descriptors, in registration order.
    ///
    /// This is the single source of truth for tool metadata. Both the rmcp
    /// router and the `/mcp` JSON-RPC endpoint list tools from here.
    pub fn list(&self) -> Vec<Tool> {
        self.tools.iter().map(|t| t.tool.clone()).collect()
    }

    /// Registered tools, in registration order.
    pub fn entries(&self) -> &[RegisteredTool] {
        &self.tools
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| &*t.tool.name).collect()
    }

    /// Dispatch a tool call to the appropriate handler.
    pub fn call(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let handler = self.lookup(name).inspect_err(|_| {
            warn!("Unknown tool requested: {}", name);
        })?;
        handler.call(arguments)
    }
}
