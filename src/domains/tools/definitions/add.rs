//! Add tool definition.
//!
//! Adds two numbers after truncating each of them toward zero.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, warn};

use crate::domains::tools::{ToolError, ToolHandler};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the add tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddParams {
    /// First integer.
    #[schemars(description = "First integer")]
    pub a: f64,

    /// Second integer.
    #[schemars(description = "Second integer")]
    pub b: f64,
}

impl AddParams {
    /// Pull `a` and `b` out of a raw argument object.
    ///
    /// Both must be JSON numbers; strings, booleans and missing keys are rejected.
    pub fn from_arguments(arguments: Option<&JsonObject>) -> Result<Self, ToolError> {
        let number = |key: &str| {
            arguments
                .and_then(|args| args.get(key))
                .and_then(serde_json::Value::as_f64)
        };

        match (number("a"), number("b")) {
            (Some(a), Some(b)) => Ok(Self { a, b }),
            _ => Err(ToolError::invalid_arguments("a and b must be numbers")),
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Add tool - sums two integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddTool;

impl AddTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add two integers";

    /// Sum `a` and `b` after truncating each toward zero.
    ///
    /// Returns `None` when the sum does not fit in an `i64`.
    pub fn sum(a: f64, b: f64) -> Option<i64> {
        // `as` truncates toward zero and saturates at the i64 bounds.
        (a as i64).checked_add(b as i64)
    }

    /// Execute the tool logic.
    pub fn execute(params: &AddParams) -> Result<CallToolResult, ToolError> {
        let sum = Self::sum(params.a, params.b).ok_or_else(|| {
            warn!("Sum of {} and {} overflows", params.a, params.b);
            ToolError::invalid_arguments("sum of a and b is out of range")
        })?;

        info!("add({}, {}) = {}", params.a, params.b, sum);
        Ok(CallToolResult::success(vec![Content::text(sum.to_string())]))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AddParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

impl ToolHandler for AddTool {
    fn call(&self, arguments: Option<&JsonObject>) -> Result<CallToolResult, ToolError> {
        let params = AddParams::from_arguments(arguments).inspect_err(|e| {
            warn!("Rejected add call: {}", e);
        })?;
        Self::execute(&params)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::first_text;
    use serde_json::json;

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_sum_truncates_each_operand() {
        assert_eq!(AddTool::sum(2.9, 3.9), Some(5));
        assert_eq!(AddTool::sum(-2.9, 0.5), Some(-2));
        assert_eq!(AddTool::sum(0.5, 0.5), Some(0));
        assert_eq!(AddTool::sum(2.0, 3.0), Some(5));
    }

    #[test]
    fn test_sum_overflow() {
        assert_eq!(AddTool::sum(i64::MAX as f64, 1.0), None);
        assert_eq!(AddTool::sum(1e300, 0.0), Some(i64::MAX));
    }

    #[test]
    fn test_call_integers() {
        let arguments = args(json!({ "a": 2, "b": 3 }));
        let result = AddTool.call(Some(&arguments)).unwrap();
        assert_eq!(first_text(&result), Some("5"));
        assert!(!result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_call_floats() {
        let arguments = args(json!({ "a": 2.9, "b": 3.9 }));
        let result = AddTool.call(Some(&arguments)).unwrap();
        assert_eq!(first_text(&result), Some("5"));
    }

    #[test]
    fn test_call_rejects_strings() {
        let arguments = args(json!({ "a": "2", "b": 3 }));
        let err = AddTool.call(Some(&arguments)).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_call_missing_arguments() {
        assert!(AddTool.call(None).is_err());

        let arguments = args(json!({ "a": 1 }));
        assert!(AddTool.call(Some(&arguments)).is_err());
    }

    #[test]
    fn test_to_tool_schema() {
        let tool = AddTool::to_tool();
        assert_eq!(tool.name, "add");

        let required = tool.input_schema.get("required").unwrap();
        assert_eq!(required, &json!(["a", "b"]));
    }
}
