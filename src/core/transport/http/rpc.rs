//! Raw JSON-RPC over HTTP (`POST /mcp`).
//!
//! A stateless endpoint for plain HTTP clients (curl, load testers) that do
//! not speak the streaming transports. Tools are listed and dispatched
//! through the same [`ToolRegistry`](crate::domains::tools::ToolRegistry)
//! that backs the rmcp router.
//!
//! Only `tools/list` and `tools/call` are served; session setup such as
//! `initialize` belongs to the streaming transports and is answered 501.
//!
//! Unlike a strict JSON-RPC server, failures are also reflected in the HTTP
//! status: 404 for an unknown tool, 400 for bad arguments, 501 for an
//! unknown method.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use http::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, instrument, warn};

use super::AppState;
use crate::core::McpServer;
use crate::domains::tools::{METHOD_NOT_FOUND, ToolError};

/// JSON-RPC request structure.
///
/// Parsed leniently: a missing or non-string `method` is treated as empty
/// and a missing `id` is echoed back as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRpcRequest {
    pub id: Value,
    pub method: String,
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Parse a request body.
    ///
    /// Only JSON objects are accepted; a bare `null` reads as an empty
    /// request and so falls through to "method not found".
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut object = match serde_json::from_slice(body)? {
            Value::Object(object) => object,
            Value::Null => serde_json::Map::new(),
            _ => return Err(serde::de::Error::custom("request must be a JSON object")),
        };

        Ok(Self {
            id: object.remove("id").unwrap_or(Value::Null),
            method: object
                .get("method")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            params: object.remove("params"),
        })
    }
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Value, method: &str) -> Self {
        Self::error(id, METHOD_NOT_FOUND, format!("Method not found: {}", method))
    }
}

/// Plain (non JSON-RPC) error body, used before a request could be parsed.
fn plain_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Handle `/mcp` requests.
#[instrument(skip_all, fields(http_method = %method))]
pub async fn handle_rpc(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    if method != Method::POST {
        return plain_error(StatusCode::METHOD_NOT_ALLOWED, "Only POST method is allowed");
    }

    let request = match JsonRpcRequest::parse(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected malformed JSON-RPC body: {}", e);
            return plain_error(StatusCode::BAD_REQUEST, "Invalid JSON-RPC request");
        }
    };

    info!("Received JSON-RPC request: {}", request.method);
    let (status, response) = process_request(state.server(), request);
    (status, Json(response)).into_response()
}

/// Process a JSON-RPC request and return the HTTP status and response.
pub fn process_request(server: &McpServer, request: JsonRpcRequest) -> (StatusCode, JsonRpcResponse) {
    match request.method.as_str() {
        "tools/list" => handle_tools_list(server, request),
        "tools/call" => handle_tools_call(server, request),
        method => {
            warn!("Unknown method: {:?}", method);
            (
                StatusCode::NOT_IMPLEMENTED,
                JsonRpcResponse::method_not_found(request.id, method),
            )
        }
    }
}

/// Handle tools/list request.
fn handle_tools_list(server: &McpServer, request: JsonRpcRequest) -> (StatusCode, JsonRpcResponse) {
    let result = json!({ "tools": server.registry().list() });
    (StatusCode::OK, JsonRpcResponse::success(request.id, result))
}

/// Handle tools/call request.
fn handle_tools_call(server: &McpServer, request: JsonRpcRequest) -> (StatusCode, JsonRpcResponse) {
    let params = request.params.as_ref();
    let name = params
        .and_then(|p| p.get("name"))
        .and_then(Value::as_str)
        .unwrap_or_default();
    let arguments = params
        .and_then(|p| p.get("arguments"))
        .and_then(Value::as_object);

    info!("Calling tool: {}", name);

    match server.registry().call(name, arguments) {
        Ok(result) => (
            StatusCode::OK,
            JsonRpcResponse::success(request.id, json!({ "content": result.content })),
        ),
        Err(e) => {
            let status = match e {
                ToolError::NotFound(_) => StatusCode::NOT_FOUND,
                ToolError::InvalidArguments(_) => StatusCode::BAD_REQUEST,
                ToolError::Duplicate(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, JsonRpcResponse::error(request.id, e.code(), e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_fields() {
        let request = JsonRpcRequest::parse(br#"{"method": 5}"#).unwrap();
        assert_eq!(request.method, "");
        assert_eq!(request.id, Value::Null);
        assert!(request.params.is_none());
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(JsonRpcRequest::parse(b"[1, 2]").is_err());
        assert!(JsonRpcRequest::parse(b"\"tools/list\"").is_err());
        assert!(JsonRpcRequest::parse(b"{not json").is_err());
    }

    #[test]
    fn test_parse_null_is_empty_request() {
        let request = JsonRpcRequest::parse(b"null").unwrap();
        assert_eq!(request.method, "");
        assert_eq!(request.id, Value::Null);
    }

    #[test]
    fn test_parse_keeps_id_and_params() {
        let body = br#"{"jsonrpc":"2.0","id":"abc","method":"tools/call","params":{"name":"add"}}"#;
        let request = JsonRpcRequest::parse(body).unwrap();
        assert_eq!(request.id, json!("abc"));
        assert_eq!(request.method, "tools/call");
        assert_eq!(request.params, Some(json!({ "name": "add" })));
    }

    #[test]
    fn test_error_response_shape() {
        let response = JsonRpcResponse::method_not_found(json!(7), "nope");
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "id": 7,
                "error": { "code": -32601, "message": "Method not found: nope" }
            })
        );
    }
}
