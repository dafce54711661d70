//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Where the post collection lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Single JSON document on disk.
    File { path: PathBuf },
    /// Process memory only; everything is gone on restart.
    Memory,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown STORAGE_BACKEND '{0}' (expected 'file' or 'memory')")]
    UnknownBackend(String),

    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        let storage = match var("STORAGE_BACKEND").as_deref().unwrap_or("file") {
            "file" => StorageConfig::File {
                path: var("STORAGE_PATH")
                    .unwrap_or_else(|| "storage.json".to_string())
                    .into(),
            },
            "memory" => StorageConfig::Memory,
            other => return Err(ConfigError::UnknownBackend(other.to_string())),
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            storage,
        })
    }
}
