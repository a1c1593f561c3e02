//! Tool handler abstraction.
//!
//! Every tool registered in the [`ToolRegistry`](super::ToolRegistry) pairs a
//! [`Tool`](rmcp::model::Tool) descriptor with a [`ToolHandler`]. Handlers are
//! synchronous and shared read-only by all transports.

use rmcp::model::{CallToolResult, JsonObject, RawContent};

use super::ToolError;

/// Trait for implementing tool handlers.
///
/// `arguments` is the raw argument object sent by the client, if any.
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with the given arguments.
    fn call(&self, arguments: Option<&JsonObject>) -> Result<CallToolResult, ToolError>;
}

impl<F> ToolHandler for F
where
    F: Fn(Option<&JsonObject>) -> Result<CallToolResult, ToolError> + Send + Sync,
{
    fn call(&self, arguments: Option<&JsonObject>) -> Result<CallToolResult, ToolError> {
        self(arguments)
    }
}

/// Extract the text of the first content block of a result.
///
/// Every tool in this server answers with a single text block.
pub fn first_text(result: &CallToolResult) -> Option<&str> {
    result
        .content
        .first()
        .and_then(|content| match &content.raw {
            RawContent::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
}
