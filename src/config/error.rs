//! Errors raised while loading configuration.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: std::io::Error },

    #[error("config file {} is not valid TOML: {source}", path.display())]
    ParseFile { path: PathBuf, source: toml::de::Error },

    #[error("invalid TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// `CONFIG_FILE` names a file that does not exist.
    #[error("CONFIG_FILE points at {}, which does not exist", path.display())]
    MissingFile { path: PathBuf },

    /// An environment override could not be applied.
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidEnv { key: String, value: String, reason: String },
}
