//! Tool definitions module.
//!
//! Tools are organized in groups, one directory per group, one file per
//! tool. Each group exposes a `PREFIX` and a `group()` builder; the registry
//! qualifies tool names with the prefix when the groups are composed.

pub mod agencies;
pub mod routes;
pub mod stops;

pub use agencies::{AgenciesInfoParams, AgenciesInfoTool, AgencyInfo};
pub use routes::{RoutesInfoParams, RoutesInfoTool};
pub use stops::{StopsInfoParams, StopsInfoTool, StopsNextTripsParams, StopsNextTripsTool};
