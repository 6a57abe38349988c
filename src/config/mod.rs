//! Centralized application configuration
//!
//! Configuration is layered: hard-coded defaults, then a TOML file, then
//! environment variables. Binaries apply their CLI flags on top.

pub mod error;
pub mod network;
pub mod storage;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;
pub use network::NetworkConfig;
pub use storage::StorageConfig;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration with layered approach:
    /// 1. Start with defaults
    /// 2. Load from TOML file if it exists
    /// 3. Override with environment variables
    ///
    /// Configuration precedence (highest to lowest):
    /// - Environment variables (always win)
    /// - Config file specified by CONFIG_FILE env var
    /// - ./config.toml
    /// - ./config/default.toml
    /// - Hardcoded defaults
    pub fn load_with_layers() -> Result<Self, ConfigError> {
        let mut config = Self::load_toml_with_fallbacks()?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Tries in order: CONFIG_FILE env var -> ./config.toml -> ./config/default.toml -> defaults
    fn load_toml_with_fallbacks() -> Result<Self, ConfigError> {
        if let Ok(config_path) = std::env::var("CONFIG_FILE") {
            let path = Path::new(&config_path);
            if path.exists() {
                tracing::info!(path = %config_path, "loading configuration from CONFIG_FILE");
                return Self::from_toml_file(path);
            }
            return Err(ConfigError::MissingFile { path: path.to_path_buf() });
        }

        for candidate in ["./config.toml", "./config/default.toml"] {
            let path = Path::new(candidate);
            if path.exists() {
                tracing::info!(path = candidate, "loading configuration");
                return Self::from_toml_file(path);
            }
        }

        tracing::debug!("no configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Apply environment variable overrides on top of file values
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.network.apply_env_overrides()?;
        self.storage.apply_env_overrides()?;
        Ok(())
    }
}
