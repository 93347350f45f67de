//! Transit MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing transit information tools
//! (agencies, routes, stops, next arrivals) backed by the Infobús API.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server and its transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool groups composed under prefixes into one registry
//! - **infobus**: Upstream API client and response rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use transit_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod infobus;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
