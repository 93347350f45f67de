//! Stop info tool definition.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::{ToolEntry, ToolError};

/// Parameters for the stop info tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StopsInfoParams {
    /// GTFS stop ID.
    #[schemars(description = "GTFS stop ID")]
    pub stop_id: String,
}

/// Stop info tool - general information about a bus stop.
pub struct StopsInfoTool;

impl StopsInfoTool {
    /// Tool name within the `stops` group.
    pub const NAME: &'static str = "info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get information about a specific bus stop.";

    /// Execute the tool logic.
    pub async fn execute(params: StopsInfoParams) -> Result<CallToolResult, ToolError> {
        info!("Stop info tool called for stop: {}", params.stop_id);

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Information for stop ID {} is: it is wheelchair accessible.",
            params.stop_id
        ))]))
    }

    /// Create the registry entry for this tool.
    pub fn entry() -> ToolEntry {
        ToolEntry::new(Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}
