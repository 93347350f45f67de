//! Configuration management for the MCP server.
//!
//! Configuration is assembled once at start-up from defaults, an optional
//! `.env` file and environment variables, then handed to constructors.
//! Request-handling code never reads the environment itself.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Default Infobús API base URL (local development instance).
pub const DEFAULT_INFOBUS_API_BASE: &str = "http://localhost:8000/api";

/// Default `User-Agent` sent to the Infobús API.
pub const DEFAULT_USER_AGENT: &str = "transit-app/1.0";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream Infobús API configuration.
    pub infobus: InfobusConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for the upstream Infobús API.
///
/// The production deployment lives at `https://infobus.bucr.digital/api`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfobusConfig {
    /// Base URL that endpoint paths are appended to.
    pub base_url: String,

    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for InfobusConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INFOBUS_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "transit-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            infobus: InfobusConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, ...). The upstream API is configured with
    /// `INFOBUS_API_BASE` and `USER_AGENT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("INFOBUS_API_BASE") {
            config.infobus.base_url = base_url;
        }

        if let Ok(user_agent) = std::env::var("USER_AGENT") {
            config.infobus.user_agent = user_agent;
        }

        config
    }
}
