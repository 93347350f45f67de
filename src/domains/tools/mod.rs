//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool groups (`agencies`, `routes`, `stops`), one file per tool
//! - `registry.rs` - Prefix composition of groups and dispatch
//! - `router.rs` - Which groups the server exposes, rmcp ToolRouter builder
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in the group's directory (e.g., `stops/my_tool.rs`)
//! 2. Define params, `execute()` and `entry()`
//! 3. Add the entry to the group's `group()` builder
//!
//! **No need to modify `server.rs`!** The router is built from the registry.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::{PREFIX_SEPARATOR, ToolEntry, ToolGroup, ToolRegistry};
pub use router::{build_tool_registry, build_tool_router};
