//! Infobús client error types.
//!
//! Two layers of failure exist here. [`InfobusError`] covers building the
//! client at start-up and is propagated normally. [`FetchError`] describes a
//! failed request and is handed back to callers as a value, never raised.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while constructing an [`InfobusClient`](super::InfobusClient).
#[derive(Debug, Error)]
pub enum InfobusError {
    /// The underlying HTTP client could not be built (bad user agent, TLS backend, ...).
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Stable category tag for a failed upstream request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request did not complete within the timeout.
    Timeout,
    /// The connection could not be established.
    Connect,
    /// The upstream answered with a non-2xx status.
    HttpStatus,
    /// The redirect limit was exceeded.
    TooManyRedirects,
    /// The response body was not valid JSON.
    Decode,
    /// Any other request failure.
    Request,
}

impl FailureKind {
    /// Name of the kind as shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timeout => "TimeoutError",
            Self::Connect => "ConnectError",
            Self::HttpStatus => "HTTPStatusError",
            Self::TooManyRedirects => "TooManyRedirects",
            Self::Decode => "JSONDecodeError",
            Self::Request => "RequestError",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed upstream request, rendered as `"<kind>: <message>"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    /// Failure category.
    pub kind: FailureKind,

    /// Human-readable detail.
    pub message: String,
}

impl FetchError {
    /// Create a new fetch error.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // Order matters: a timed-out connect attempt reports both flags.
        let kind = if err.is_timeout() {
            FailureKind::Timeout
        } else if err.is_connect() {
            FailureKind::Connect
        } else if err.is_status() {
            FailureKind::HttpStatus
        } else if err.is_redirect() {
            FailureKind::TooManyRedirects
        } else if err.is_decode() {
            FailureKind::Decode
        } else {
            FailureKind::Request
        };

        Self::new(kind, err.to_string())
    }
}
