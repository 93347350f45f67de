//! STDIO transport implementation.
//!
//! The default MCP mode: one client, JSON-RPC over stdin/stdout. Logs go to
//! stderr so they never interleave with protocol messages.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single client over stdin/stdout until it disconnects.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("{} ready on stdin/stdout", server.name());

        let running = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(TransportError::session)?;

        let reason = running
            .waiting()
            .await
            .map_err(TransportError::session)?;

        info!("STDIO session ended: {:?}", reason);
        Ok(())
    }
}
