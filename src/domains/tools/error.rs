//! Tool-specific error types.

use rmcp::{ErrorData as McpError, model::ErrorCode};
use thiserror::Error;

/// JSON-RPC code for an unknown method (also used for unknown tools).
pub const METHOD_NOT_FOUND: i32 = -32601;

/// JSON-RPC code for invalid method parameters.
pub const INVALID_PARAMS: i32 = -32602;

/// JSON-RPC code for internal errors, such as a clashing registration.
pub const INTERNAL_ERROR: i32 = -32603;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid parameters: {0}")]
    InvalidArguments(String),

    /// A tool with the same name is already registered.
    #[error("Tool already registered: {0}")]
    Duplicate(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// The JSON-RPC error code this error is reported with.
    pub fn code(&self) -> i32 {
        match self {
            Self::NotFound(_) => METHOD_NOT_FOUND,
            Self::InvalidArguments(_) => INVALID_PARAMS,
            Self::Duplicate(_) => INTERNAL_ERROR,
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        let code = match err {
            ToolError::NotFound(_) => ErrorCode::METHOD_NOT_FOUND,
            ToolError::InvalidArguments(_) => ErrorCode::INVALID_PARAMS,
            ToolError::Duplicate(_) => ErrorCode::INTERNAL_ERROR,
        };
        McpError::new(code, err.to_string(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ToolError::not_found("x").code(), -32601);
        assert_eq!(ToolError::invalid_arguments("x").code(), -32602);
        assert_eq!(ToolError::Duplicate("x".to_string()).code(), -32603);
    }

    #[test]
    fn test_into_mcp_error() {
        let err: McpError = ToolError::invalid_arguments("a and b must be numbers").into();
        assert_eq!(err.code.0, -32602);
        assert_eq!(err.message, "Invalid parameters: a and b must be numbers");
    }
}
