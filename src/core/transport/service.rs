//! Dispatch from the configured transport to its runner.

use tracing::info;

use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "tcp")]
use super::tcp::TcpTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;

/// Runs an [`McpServer`] on whichever transport the configuration selects.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Serve until the transport ends: the STDIO client disconnects, or a
    /// network listener fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("Transport: {}", self.config.description());

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await,
            #[cfg(feature = "tcp")]
            TransportConfig::Tcp(tcp) => TcpTransport::new(tcp).run(server).await,
            #[cfg(feature = "http")]
            TransportConfig::Http(http) => HttpTransport::new(http).run(server).await,
        }
    }
}
