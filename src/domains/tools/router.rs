//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! The router serves every rmcp-driven transport (STDIO, SSE, streamable
//! HTTP). Each registered tool becomes one dynamic route that forwards the
//! call arguments to the tool's handler.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .entries()
        .iter()
        .fold(ToolRouter::new(), |router, entry| {
            let handler = entry.handler.clone();
            let route = ToolRoute::new_dyn(entry.tool.clone(), move |ctx: ToolCallContext<'_, S>| {
                let args = ctx.arguments.clone();
                let handler = handler.clone();
                async move { handler.call(args.as_ref()).map_err(McpError::from) }.boxed()
            });
            router.with_route(route)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::DadJokeTool;
    use std::sync::Arc;

    struct TestServer {}

    fn test_registry() -> ToolRegistry {
        ToolRegistry::with_builtin_tools(Arc::new(DadJokeTool::seeded(9))).unwrap()
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(&test_registry());
        let tools = router.list_all();
        assert_eq!(tools.len(), 2);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"add"));
        assert!(names.contains(&"dad_joke"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let registry = test_registry();
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(&registry);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
