//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Redis connection URL; when unset the in-memory backend is used
    pub redis_url: Option<String>,
    /// Prefix applied to every store key
    pub key_prefix: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `REDIS_URL` - Redis URL for the mapping store (default: unset,
    ///   selects the process-local in-memory backend)
    /// - `STORE_KEY_PREFIX` - Store key prefix (default: "urlmapping:")
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.is_empty()),
            key_prefix: env::var("STORE_KEY_PREFIX")
                .ok()
                .unwrap_or_else(|| "urlmapping:".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            redis_url: None,
            key_prefix: "urlmapping:".to_string(),
        }
    }
}
