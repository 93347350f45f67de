//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol on top of the composed tool registry.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/`, grouped by topic.
//! The groups are composed under their prefixes in `domains/tools/router.rs`
//! and the resulting registry backs both the rmcp `ToolRouter` (STDIO/TCP)
//! and [`McpServer::call_tool`] (HTTP).
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::*,
    tool_handler,
};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_registry, build_tool_router};
use crate::infobus::InfobusClient;

/// Instructions advertised to clients on initialization.
pub const SERVER_INSTRUCTIONS: &str = "Transit information server. Use the agencies, routes \
     and stops tools to look up transit data; stops_next_trips returns the next arrivals \
     at a bus stop for a given ISO 8601 timestamp.";

/// The main MCP server handler.
///
/// Cloning is cheap: the configuration and registry are shared.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Composed tool registry (HTTP dispatch).
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls over rmcp.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the Infobús client cannot be built or two tools share a
    /// qualified name.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let config = Arc::new(config);

        let client = Arc::new(InfobusClient::new(&config.infobus)?);
        info!("Infobús API base: {}", client.base_url());

        let registry = build_tool_registry(client)?;
        info!("Registered tools: {}", registry.tool_names().join(", "));

        Ok(Self {
            tool_router: build_tool_router::<Self>(&registry),
            registry: Arc::new(registry),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.registry
            .get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<CallToolResult, ToolError> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => JsonObject::new(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "arguments must be an object, got {other}"
                )));
            }
        };

        self.registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
