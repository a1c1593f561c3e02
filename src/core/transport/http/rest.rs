//! REST convenience endpoints and liveness probes.
//!
//! These bypass the tool registry and answer with plain JSON. All of them
//! accept any HTTP method.

use axum::{
    Json,
    extract::{RawQuery, State},
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use http::StatusCode;
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::AppState;

/// Error body returned by `/api/add` on bad input.
pub const ADD_USAGE_ERROR: &str = "Invalid parameters. Use: /api/add?a=5&b=3";

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": state.server().name(),
        "version": state.server().version(),
        "time": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    }))
}

/// Readiness endpoint.
pub async fn ready() -> Json<Value> {
    Json(json!({ "status": "ready" }))
}

/// Random joke endpoint.
pub async fn joke(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "joke": state.server().jokes().joke() }))
}

/// Addition endpoint: `/api/add?a=5&b=3`.
pub async fn add(RawQuery(query): RawQuery) -> Response {
    match parse_add_query(query.as_deref().unwrap_or_default()) {
        Some((a, b, result)) => {
            debug!("/api/add {} + {} = {}", a, b, result);
            Json(json!({ "a": a, "b": b, "result": result })).into_response()
        }
        None => {
            warn!("/api/add rejected query: {:?}", query);
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": ADD_USAGE_ERROR })),
            )
                .into_response()
        }
    }
}

/// Parse `a` and `b` from a query string as base-10 integers and add them.
///
/// Only the first value of each key counts. Floats, missing keys and sums
/// outside the `i64` range are rejected.
pub fn parse_add_query(query: &str) -> Option<(i64, i64, i64)> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();
    let first = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.parse::<i64>().ok())
    };

    let a = first("a")?;
    let b = first("b")?;
    Some((a, b, a.checked_add(b)?))
}
