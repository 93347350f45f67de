//! Tool Router - composes the tool groups and builds the rmcp ToolRouter.
//!
//! This is the one place that decides which groups the server exposes.
//! Adding a tool to an existing group only touches that group's `mod.rs`.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::infobus::InfobusClient;

use super::definitions::{agencies, routes, stops};
use super::{ToolError, ToolRegistry};

/// Compose every tool group into a registry.
pub fn build_tool_registry(client: Arc<InfobusClient>) -> Result<ToolRegistry, ToolError> {
    ToolRegistry::compose([agencies::group(), routes::group(), stops::group(client)])
}

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry.router()
}
