//! Network-related configuration

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::constants::{DEFAULT_HTTP_BIND_ADDR, DEFAULT_HTTP_PORT};

/// Network-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// HTTP server port for the JSON API
    pub http_port: u16,
    /// HTTP server bind address
    pub http_bind_addr: String,
    /// Allow any origin to call the API (the dashboard is served from another port)
    pub cors_permissive: bool,
}

impl NetworkConfig {
    /// Apply environment variable overrides to existing configuration
    ///
    /// `PORT` is honored for compatibility with hosting platforms; `HTTP_PORT`
    /// wins when both are set.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        for key in ["PORT", "HTTP_PORT"] {
            if let Ok(val) = std::env::var(key) {
                self.http_port = parse_port(key, &val)?;
            }
        }
        if let Ok(val) = std::env::var("HTTP_BIND_ADDR") {
            self.http_bind_addr = val;
        }
        if let Ok(val) = std::env::var("CORS_PERMISSIVE") {
            self.cors_permissive = parse_bool("CORS_PERMISSIVE", &val)?;
        }
        Ok(())
    }

    /// `host:port` string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_bind_addr, self.http_port)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            http_bind_addr: DEFAULT_HTTP_BIND_ADDR.to_string(),
            cors_permissive: true,
        }
    }
}

fn parse_port(key: &str, val: &str) -> Result<u16, ConfigError> {
    val.trim().parse::<u16>().map_err(|e| ConfigError::InvalidEnv {
        key: key.to_string(),
        value: val.to_string(),
        reason: format!("must be a valid port number (0-65535): {e}"),
    })
}

fn parse_bool(key: &str, val: &str) -> Result<bool, ConfigError> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            key: key.to_string(),
            value: val.to_string(),
            reason: "expected true/false".to_string(),
        }),
    }
}
