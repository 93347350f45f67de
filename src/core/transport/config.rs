//! Transport selection and listener settings.
//!
//! Which transports exist depends on the enabled cargo features. With
//! `stdio` compiled in it is always the fallback; otherwise the first
//! compiled network transport is.

use serde::{Deserialize, Serialize};

#[cfg(any(feature = "tcp", feature = "http"))]
const LOCALHOST: &str = "127.0.0.1";

#[cfg(feature = "tcp")]
const TCP_PORT: u16 = 3000;

#[cfg(feature = "http")]
const HTTP_PORT: u16 = 8080;

#[cfg(feature = "http")]
const RPC_PATH: &str = "/mcp";

/// The transport the server runs on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// One client over stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// Line-delimited MCP sessions over raw TCP.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// Stateless JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// Listener settings for the TCP transport.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    pub host: String,
    pub port: u16,
}

/// Listener settings for the HTTP transport.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,

    /// Route that accepts JSON-RPC POSTs.
    pub rpc_path: String,

    /// Answer CORS preflights from any origin.
    pub enable_cors: bool,
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            host: LOCALHOST.to_string(),
            port: TCP_PORT,
        }
    }
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    /// Read `MCP_TCP_HOST` and `MCP_TCP_PORT`.
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("MCP_TCP_HOST", defaults.host),
            port: env_port("MCP_TCP_PORT", defaults.port),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: LOCALHOST.to_string(),
            port: HTTP_PORT,
            rpc_path: RPC_PATH.to_string(),
            enable_cors: true,
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Read `MCP_HTTP_HOST`, `MCP_HTTP_PORT`, `MCP_HTTP_PATH` and `MCP_HTTP_CORS`.
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("MCP_HTTP_HOST", defaults.host),
            port: env_port("MCP_HTTP_PORT", defaults.port),
            rpc_path: env_or("MCP_HTTP_PATH", defaults.rpc_path),
            enable_cors: std::env::var("MCP_HTTP_CORS")
                .map(|v| flag_enabled(&v))
                .unwrap_or(defaults.enable_cors),
        }
    }
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn env_or(var: &str, fallback: String) -> String {
    std::env::var(var).unwrap_or(fallback)
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn env_port(var: &str, fallback: u16) -> u16 {
    std::env::var(var)
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(fallback)
}

/// Anything but `false`/`0` (case-insensitive) turns a flag on.
#[cfg(feature = "http")]
fn flag_enabled(value: &str) -> bool {
    !(value.eq_ignore_ascii_case("false") || value == "0")
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            Self::Stdio
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            Self::Tcp(TcpConfig::default())
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            Self::Http(HttpConfig::default())
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("enable at least one transport feature: stdio, tcp or http");
        }
    }
}

impl TransportConfig {
    /// Pick the transport named by `MCP_TRANSPORT`.
    ///
    /// Names of transports that were not compiled in, and unknown names,
    /// select the default.
    pub fn from_env() -> Self {
        let name = std::env::var("MCP_TRANSPORT").unwrap_or_default();

        match name.to_ascii_lowercase().as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig::from_env()),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_env()),
            _ => Self::default(),
        }
    }

    /// Short human-readable form for the start-up log line.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}
