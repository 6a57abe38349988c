//! Storage-related configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::constants::{DB_FILE_NAME, DB_SEARCH_DIRS};

/// Storage-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Explicit path to the venue database. When unset the well-known
    /// `data/` locations are searched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
}

impl StorageConfig {
    /// Apply environment variable overrides to existing configuration
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("BIGBOX_DB_PATH") {
            if val.trim().is_empty() {
                return Err(ConfigError::InvalidEnv {
                    key: "BIGBOX_DB_PATH".to_string(),
                    value: val,
                    reason: "path must not be empty".to_string(),
                });
            }
            self.db_path = Some(val.into());
        }
        Ok(())
    }

    /// Paths to try, in order, when opening the database.
    ///
    /// An explicit `db_path` is the only candidate; otherwise each search
    /// directory is tried relative to the working directory.
    pub fn candidate_paths(&self) -> Vec<PathBuf> {
        match &self.db_path {
            Some(path) => vec![path.clone()],
            None => DB_SEARCH_DIRS.iter().map(|dir| PathBuf::from(dir).join(DB_FILE_NAME)).collect(),
        }
    }
}
