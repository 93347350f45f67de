//! Route info tool definition.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::{ToolEntry, ToolError};

/// Parameters for the route info tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RoutesInfoParams {
    /// GTFS route ID.
    #[schemars(description = "GTFS route ID")]
    pub route_id: String,
}

/// Route info tool - general information about a bus route.
pub struct RoutesInfoTool;

impl RoutesInfoTool {
    /// Tool name within the `routes` group.
    pub const NAME: &'static str = "info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get information about a specific bus route.";

    /// Execute the tool logic.
    pub async fn execute(params: RoutesInfoParams) -> Result<CallToolResult, ToolError> {
        info!("Route info tool called for route: {}", params.route_id);

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Information for route ID {} is: it serves multiple stops.",
            params.route_id
        ))]))
    }

    /// Create the registry entry for this tool.
    pub fn entry() -> ToolEntry {
        ToolEntry::new(Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}
