//! Tool Registry - composition and dispatch for all tool groups.
//!
//! Tool groups are authored independently, each with unqualified tool names.
//! The registry prefixes every name with its group (`stops` + `next_trips`
//! becomes `stops_next_trips`) and merges the groups into one dispatch
//! table, refusing to start if two tools end up with the same name.
//!
//! The same table serves every transport: HTTP dispatches through
//! [`ToolRegistry::call_tool`], STDIO/TCP through the rmcp router built by
//! [`ToolRegistry::router`].

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::ToolError;

/// Separator between a group prefix and a tool name.
pub const PREFIX_SEPARATOR: &str = "_";

type ToolFuture = BoxFuture<'static, Result<CallToolResult, ToolError>>;
type ToolFn = Arc<dyn Fn(JsonObject) -> ToolFuture + Send + Sync>;

// ============================================================================
// Tool Entry
// ============================================================================

/// A single tool: its metadata plus a type-erased handler.
#[derive(Clone)]
pub struct ToolEntry {
    tool: Tool,
    handler: ToolFn,
}

impl ToolEntry {
    /// Create an entry whose arguments deserialize into `P`.
    ///
    /// The input schema is derived from `P`. Arguments that do not match it
    /// are rejected with [`ToolError::InvalidArguments`] before `handler` runs.
    pub fn new<P, F, Fut>(name: &'static str, description: &'static str, handler: F) -> Self
    where
        P: DeserializeOwned + JsonSchema + 'static,
        F: Fn(P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<CallToolResult, ToolError>> + Send + 'static,
    {
        let tool = Tool {
            name: name.into(),
            description: Some(description.into()),
            input_schema: cached_schema_for_type::<P>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        };

        let handler: ToolFn = Arc::new(move |arguments: JsonObject| {
            match serde_json::from_value::<P>(serde_json::Value::Object(arguments)) {
                Ok(params) => handler(params).boxed(),
                Err(e) => future::ready(Err(ToolError::invalid_arguments(e.to_string()))).boxed(),
            }
        });

        Self { tool, handler }
    }

    /// The tool name (qualified once the entry is in a registry).
    pub fn name(&self) -> &str {
        &self.tool.name
    }
}

// ============================================================================
// Tool Group
// ============================================================================

/// A set of tools published under a common prefix.
pub struct ToolGroup {
    prefix: &'static str,
    entries: Vec<ToolEntry>,
}

impl ToolGroup {
    /// Create an empty group.
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            entries: Vec::new(),
        }
    }

    /// Add a tool to the group.
    pub fn with_tool(mut self, entry: ToolEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// The group prefix.
    pub fn prefix(&self) -> &str {
        self.prefix
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Registry of all tools, keyed by qualified name.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, ToolEntry>,
}

impl ToolRegistry {
    /// Merge tool groups into one registry.
    ///
    /// Fails on the first qualified name that is already taken.
    pub fn compose(groups: impl IntoIterator<Item = ToolGroup>) -> Result<Self, ToolError> {
        let mut tools = BTreeMap::new();

        for ToolGroup { prefix, entries } in groups {
            for mut entry in entries {
                let qualified = format!("{}{}{}", prefix, PREFIX_SEPARATOR, entry.name());
                if tools.contains_key(&qualified) {
                    return Err(ToolError::duplicate(qualified));
                }

                debug!("Registering tool {}", qualified);
                entry.tool.name = qualified.clone().into();
                tools.insert(qualified, entry);
            }
        }

        Ok(Self { tools })
    }

    /// Get all qualified tool names, sorted.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.tools.values().map(|e| e.tool.clone()).collect()
    }

    /// Dispatch a tool call by qualified name.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let Some(entry) = self.tools.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        (entry.handler)(arguments).await
    }

    /// Build the rmcp router for STDIO/TCP transport.
    pub fn router<S>(&self) -> ToolRouter<S>
    where
        S: Send + Sync + 'static,
    {
        self.tools.values().fold(ToolRouter::new(), |router, entry| {
            let handler = entry.handler.clone();
            router.with_route(ToolRoute::new_dyn(
                entry.tool.clone(),
                move |ctx: ToolCallContext<'_, S>| {
                    let args = ctx.arguments.clone().unwrap_or_default();
                    handler(args)
                        .map(|result| result.map_err(McpError::from))
                        .boxed()
                },
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::{Content, RawContent};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct EchoParams {
        text: String,
    }

    fn echo_entry(name: &'static str) -> ToolEntry {
        ToolEntry::new(name, "Echo the input", |params: EchoParams| async move {
            Ok(CallToolResult::success(vec![Content::text(params.text)]))
        })
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_compose_prefixes_names() {
        let registry = ToolRegistry::compose([
            ToolGroup::new("stops").with_tool(echo_entry("info")),
            ToolGroup::new("routes").with_tool(echo_entry("info")),
        ])
        .unwrap();

        assert_eq!(registry.tool_names(), vec!["routes_info", "stops_info"]);
        let names: Vec<_> = registry
            .get_all_tools()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(names, vec!["routes_info", "stops_info"]);
    }

    #[test]
    fn test_compose_rejects_duplicates() {
        let result = ToolRegistry::compose([
            ToolGroup::new("stops").with_tool(echo_entry("info")),
            ToolGroup::new("stops").with_tool(echo_entry("info")),
        ]);

        match result {
            Err(ToolError::DuplicateTool(name)) => assert_eq!(name, "stops_info"),
            _ => panic!("expected duplicate tool error"),
        }
    }

    #[test]
    fn test_compose_rejects_collisions_across_prefixes() {
        // "a" + "b_c" and "a_b" + "c" both qualify to "a_b_c".
        let result = ToolRegistry::compose([
            ToolGroup::new("a").with_tool(echo_entry("b_c")),
            ToolGroup::new("a_b").with_tool(echo_entry("c")),
        ]);
        assert!(matches!(result, Err(ToolError::DuplicateTool(_))));
    }

    #[tokio::test]
    async fn test_call_tool_dispatches() {
        let registry =
            ToolRegistry::compose([ToolGroup::new("demo").with_tool(echo_entry("echo"))]).unwrap();

        let result = registry
            .call_tool("demo_echo", args(serde_json::json!({"text": "hola"})))
            .await
            .unwrap();
        assert_eq!(text_of(&result), "hola");
    }

    #[tokio::test]
    async fn test_call_tool_unknown() {
        let registry = ToolRegistry::default();
        let result = registry.call_tool("unknown", JsonObject::new()).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_call_tool_invalid_arguments() {
        let registry =
            ToolRegistry::compose([ToolGroup::new("demo").with_tool(echo_entry("echo"))]).unwrap();

        let result = registry
            .call_tool("demo_echo", args(serde_json::json!({"wrong": 1})))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_router_matches_registry() {
        struct TestServer {}

        let registry = ToolRegistry::compose([
            ToolGroup::new("demo")
                .with_tool(echo_entry("one"))
                .with_tool(echo_entry("two")),
        ])
        .unwrap();
        let router: ToolRouter<TestServer> = registry.router();

        let mut router_names: Vec<_> = router
            .list_all()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        router_names.sort();
        assert_eq!(router_names, registry.tool_names());
    }
}
