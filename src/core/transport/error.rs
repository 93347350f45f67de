//! Errors raised while bringing a transport up or running it.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Failures of the STDIO, TCP and HTTP transports.
#[derive(Debug, Error)]
pub enum TransportError {
    /// A TCP or HTTP listener could not bind its address.
    #[error("cannot listen on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP session failed during the handshake or while running.
    #[error("MCP session failed: {0}")]
    Session(String),

    /// The HTTP server stopped with an I/O error.
    #[error("HTTP server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

impl TransportError {
    /// Wrap a bind failure for `address`.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    /// Wrap an rmcp session failure.
    pub fn session(err: impl std::fmt::Display) -> Self {
        Self::Session(err.to_string())
    }
}
