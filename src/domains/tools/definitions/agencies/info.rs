//! Agencies info tool definition.
//!
//! Returns the list of transit agencies as JSON content.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domains::tools::{ToolEntry, ToolError};

/// The agencies tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct AgenciesInfoParams {}

/// A transit agency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct AgencyInfo {
    pub id: String,
    pub name: String,
}

impl AgencyInfo {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// Agencies info tool - lists known transit agencies.
pub struct AgenciesInfoTool;

impl AgenciesInfoTool {
    /// Tool name within the `agencies` group.
    pub const NAME: &'static str = "info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a list of transit agencies.";

    /// The known agencies.
    pub fn agencies() -> Vec<AgencyInfo> {
        vec![
            AgencyInfo::new("agency_1", "Transit Agency 1"),
            AgencyInfo::new("agency_2", "Transit Agency 2"),
        ]
    }

    /// Execute the tool logic.
    pub async fn execute(_params: AgenciesInfoParams) -> Result<CallToolResult, ToolError> {
        info!("Agencies info tool called");

        let content = Content::json(Self::agencies())
            .map_err(|e| ToolError::execution_failed(e.message.to_string()))?;

        Ok(CallToolResult::success(vec![content]))
    }

    /// Create the registry entry for this tool.
    pub fn entry() -> ToolEntry {
        ToolEntry::new(Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}
