//! Agencies tool group.

pub mod info;

use crate::domains::tools::ToolGroup;

pub use info::{AgenciesInfoParams, AgenciesInfoTool, AgencyInfo};

/// Prefix for tools in this group.
pub const PREFIX: &str = "agencies";

/// Build the agencies tool group.
pub fn group() -> ToolGroup {
    ToolGroup::new(PREFIX).with_tool(AgenciesInfoTool::entry())
}
