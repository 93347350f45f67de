//! Stops tool group.
//!
//! - `info`: general information about a stop
//! - `next_trips`: upcoming arrivals at a stop, from the Infobús API

pub mod info;
pub mod next_trips;

use std::sync::Arc;

use crate::domains::tools::ToolGroup;
use crate::infobus::InfobusClient;

pub use info::{StopsInfoParams, StopsInfoTool};
pub use next_trips::{StopsNextTripsParams, StopsNextTripsTool};

/// Prefix for tools in this group.
pub const PREFIX: &str = "stops";

/// Build the stops tool group.
pub fn group(client: Arc<InfobusClient>) -> ToolGroup {
    ToolGroup::new(PREFIX)
        .with_tool(StopsInfoTool::entry())
        .with_tool(StopsNextTripsTool::entry(client))
}
