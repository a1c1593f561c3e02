//! HTTP transport implementation.
//!
//! One axum server multiplexes every HTTP surface:
//! - `/` (catch-all): MCP streamable HTTP, served by rmcp
//! - `/sse` + `/message`: legacy MCP SSE transport
//! - `/mcp`: raw JSON-RPC over POST for plain HTTP clients
//! - `/api/joke`, `/api/add`: REST convenience endpoints
//! - `/health`, `/ready`: liveness and readiness probes

pub mod rest;
pub mod routes;
pub mod rpc;
pub mod sse;

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{any, get, post},
};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use std::future::IntoFuture;
use tower::ServiceExt;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use sse::SseSessions;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP server instance.
    server: McpServer,

    /// Open legacy SSE sessions.
    sessions: SseSessions,

    /// rmcp streamable HTTP service mounted at the root.
    streamable: StreamableHttpService<McpServer, LocalSessionManager>,
}

impl AppState {
    /// Create the shared state around an MCP server.
    pub fn new(server: McpServer) -> Self {
        let factory_server = server.clone();
        let streamable = StreamableHttpService::new(
            move || Ok(factory_server.clone()),
            LocalSessionManager::default().into(),
            StreamableHttpServerConfig::default(),
        );

        Self {
            server,
            sessions: SseSessions::default(),
            streamable,
        }
    }

    /// Get the MCP server.
    pub fn server(&self) -> &McpServer {
        &self.server
    }

    /// Get the open SSE sessions.
    pub fn sessions(&self) -> &SseSessions {
        &self.sessions
    }
}

/// Build the axum router for all HTTP endpoints.
pub fn build_router(state: AppState, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .route(routes::SSE, get(sse::handle_sse))
        .route(routes::MESSAGE, post(sse::handle_message))
        .route(routes::MCP, any(rpc::handle_rpc))
        .route(routes::HEALTH, any(rest::health))
        .route(routes::READY, any(rest::ready))
        .route(routes::API_JOKE, any(rest::joke))
        .route(routes::API_ADD, any(rest::add))
        .fallback(handle_streamable)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    // Add CORS if enabled
    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Hand every unreserved path to the streamable HTTP service.
///
/// The router answers a reserved path with the wrong method itself (405), so
/// the guard below only trips when this handler is called directly or a
/// reserved path is added to the table without a route.
async fn handle_streamable(State(state): State<AppState>, request: Request) -> Response {
    if routes::is_reserved(request.uri().path()) {
        debug!("Reserved path {} reached the catch-all", request.uri().path());
        return StatusCode::NOT_FOUND.into_response();
    }

    match state.streamable.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport until it fails or Ctrl-C is received.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(AppState::new(server), self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → {:<5} {:<10} {}", "ANY", "/", "MCP streamable HTTP");
        for route in routes::RESERVED {
            info!("  → {:<5} {:<10} {}", route.methods, route.path, route.description);
        }

        tokio::select! {
            served = axum::serve(listener, app).into_future() => {
                served.map_err(|e| TransportError::http(e.to_string()))?;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl-C, stopping HTTP server");
            }
        }

        Ok(())
    }
}
