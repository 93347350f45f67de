//! Routes tool group.

pub mod info;

use crate::domains::tools::ToolGroup;

pub use info::{RoutesInfoParams, RoutesInfoTool};

/// Prefix for tools in this group.
pub const PREFIX: &str = "routes";

/// Build the routes tool group.
pub fn group() -> ToolGroup {
    ToolGroup::new(PREFIX).with_tool(RoutesInfoTool::entry())
}
