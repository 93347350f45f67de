//! Next trips tool definition.
//!
//! Looks up the upcoming arrivals at a stop through the Infobús API and
//! renders them as text. Upstream failures are reported inside the text
//! result, never as a tool error.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::tools::{ToolEntry, ToolError};
use crate::infobus::{InfobusClient, render};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the next trips tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StopsNextTripsParams {
    /// GTFS stop ID.
    #[schemars(description = "GTFS stop ID")]
    pub stop_id: String,

    /// Timestamp, forwarded to the API unchanged.
    #[schemars(description = "Timestamp in ISO 8601 format (YYYY-MM-DDTHH:MM:SS)")]
    pub timestamp: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Next trips tool - upcoming arrivals at a bus stop.
pub struct StopsNextTripsTool;

impl StopsNextTripsTool {
    /// Tool name within the `stops` group.
    pub const NAME: &'static str = "next_trips";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get next trips for a given bus stop in a given day and time.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(stop_id = %params.stop_id, timestamp = %params.timestamp))]
    pub async fn execute(
        client: Arc<InfobusClient>,
        params: StopsNextTripsParams,
    ) -> Result<CallToolResult, ToolError> {
        info!("Next trips tool called for stop: {}", params.stop_id);

        let result = client.next_trips(&params.stop_id, &params.timestamp).await;

        Ok(CallToolResult::success(vec![Content::text(render(&result))]))
    }

    /// Create the registry entry for this tool.
    pub fn entry(client: Arc<InfobusClient>) -> ToolEntry {
        ToolEntry::new(
            Self::NAME,
            Self::DESCRIPTION,
            move |params: StopsNextTripsParams| Self::execute(client.clone(), params),
        )
    }
}
