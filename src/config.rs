//! Configuration handling for the form

use crate::persistence::FailurePattern;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the storage file location
pub const STORAGE_ENV_VAR: &str = "PRODUCT_REQUEST_STORAGE";

const DEFAULT_LOAD_DELAY_MS: u64 = 2000;
const DEFAULT_SAVE_DELAY_MS: u64 = 1000;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Path of the item storage file
    pub storage_path: Option<PathBuf>,
    /// Simulated load latency in milliseconds
    pub load_delay_ms: Option<u64>,
    /// Simulated save latency in milliseconds
    pub save_delay_ms: Option<u64>,
    /// Which save attempts the backend rejects
    pub save_failures: Option<FailurePattern>,
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "product-request", "product-request")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the storage file and logs
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Storage file location: environment, then config, then the data dir
    pub fn resolve_storage_path(&self) -> PathBuf {
        self.storage_path_with_override(std::env::var(STORAGE_ENV_VAR).ok())
    }

    fn storage_path_with_override(&self, env_override: Option<String>) -> PathBuf {
        if let Some(path) = env_override.filter(|path| !path.is_empty()) {
            return PathBuf::from(path);
        }
        self.storage_path
            .clone()
            .or_else(|| Self::data_dir().map(|dir| dir.join("storage.json")))
            .unwrap_or_else(|| PathBuf::from("storage.json"))
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms.unwrap_or(DEFAULT_LOAD_DELAY_MS))
    }

    pub fn save_delay(&self) -> Duration {
        Duration::from_millis(self.save_delay_ms.unwrap_or(DEFAULT_SAVE_DELAY_MS))
    }

    pub fn failure_pattern(&self) -> FailurePattern {
        self.save_failures.unwrap_or_default()
    }
}
