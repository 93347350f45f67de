//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for start-up and server
//! operation. Per-request upstream failures are not errors at this level;
//! they are rendered into tool output (see `infobus::FetchError`).

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// The Infobús client could not be constructed.
    #[error("Infobús client error: {0}")]
    Infobus(#[from] crate::infobus::InfobusError),
}
