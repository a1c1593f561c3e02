//! HTTP route table.
//!
//! Every path the HTTP transport serves itself is declared here once. The
//! router is built from these constants, and the streamable HTTP catch-all
//! at `/` refuses any of them.

/// Legacy SSE event stream.
pub const SSE: &str = "/sse";

/// Legacy SSE message endpoint.
pub const MESSAGE: &str = "/message";

/// Raw JSON-RPC over HTTP.
pub const MCP: &str = "/mcp";

/// Liveness probe.
pub const HEALTH: &str = "/health";

/// Readiness probe.
pub const READY: &str = "/ready";

/// REST: random joke.
pub const API_JOKE: &str = "/api/joke";

/// REST: integer addition.
pub const API_ADD: &str = "/api/add";

/// A reserved route, as advertised in the startup log.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub methods: &'static str,
    pub description: &'static str,
}

/// All reserved routes. Anything else falls through to streamable HTTP.
pub const RESERVED: [Route; 7] = [
    Route {
        path: SSE,
        methods: "GET",
        description: "SSE endpoint",
    },
    Route {
        path: MESSAGE,
        methods: "POST",
        description: "SSE message endpoint",
    },
    Route {
        path: MCP,
        methods: "POST",
        description: "MCP JSON-RPC",
    },
    Route {
        path: HEALTH,
        methods: "ANY",
        description: "Health check",
    },
    Route {
        path: READY,
        methods: "ANY",
        description: "Readiness check",
    },
    Route {
        path: API_JOKE,
        methods: "ANY",
        description: "Random dad joke",
    },
    Route {
        path: API_ADD,
        methods: "ANY",
        description: "Addition, e.g. /api/add?a=5&b=3",
    },
];

/// Whether `path` belongs to one of the reserved routes.
pub fn is_reserved(path: &str) -> bool {
    RESERVED.iter().any(|route| route.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_paths() {
        for path in ["/sse", "/message", "/mcp", "/health", "/ready", "/api/joke", "/api/add"] {
            assert!(is_reserved(path), "{} should be reserved", path);
        }
    }

    #[test]
    fn test_unreserved_paths() {
        for path in ["/", "/api", "/mcp/", "/healthz", "/api/add/1"] {
            assert!(!is_reserved(path), "{} should not be reserved", path);
        }
    }
}
