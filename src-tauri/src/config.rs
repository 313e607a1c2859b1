//! Packaging Configuration
//!
//! Typed mirror of the native packaging config (app id, web assets,
//! dev server) plus the starter tasks the task board is seeded with.
//! A copy is compiled in; a file with the same name in the app config
//! directory replaces it.

use std::path::{Path, PathBuf};

use chichi_domain::{ensure_unique_ids, DomainError, Task};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "chichi.config.json";

const EMBEDDED_CONFIG: &str = include_str!("../chichi.config.json");

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingConfig {
    /// Reverse-DNS application identifier
    pub app_id: String,
    /// Display name
    pub app_name: String,
    /// Directory holding the built web assets
    pub web_dir: String,
    pub android: AndroidConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub starter_tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AndroidConfig {
    /// Native project path
    pub path: String,
    /// Scheme the webview serves assets under
    pub scheme: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Development server URL
    pub url: String,
    /// Allow plain-http traffic
    #[serde(default)]
    pub cleartext: bool,
}

impl PackagingConfig {
    /// The config compiled into the binary
    pub fn embedded() -> ConfigResult<Self> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the override from `config_dir`, falling back to the embedded copy.
    pub fn load(config_dir: &Path) -> ConfigResult<Self> {
        let path = config_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Self::embedded();
        }
        let json = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io { path, source })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !is_reverse_dns(&self.app_id) {
            return Err(ConfigError::Invalid(format!(
                "appId '{}' must be a reverse-DNS identifier",
                self.app_id
            )));
        }
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::Invalid("appName must not be empty".to_string()));
        }
        if self.web_dir.trim().is_empty() {
            return Err(ConfigError::Invalid("webDir must not be empty".to_string()));
        }
        self.server.validate()?;
        ensure_unique_ids(&self.starter_tasks)?;
        Ok(())
    }
}

impl ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.url.starts_with("https://") {
            return Ok(());
        }
        if self.url.starts_with("http://") {
            if !self.cleartext {
                return Err(ConfigError::Invalid(format!(
                    "server url '{}' is plain http but cleartext is disabled",
                    self.url
                )));
            }
            return Ok(());
        }
        Err(ConfigError::Invalid(format!(
            "server url '{}' must use http or https",
            self.url
        )))
    }
}

fn is_reverse_dns(id: &str) -> bool {
    let segments: Vec<&str> = id.split('.').collect();
    segments.len() >= 2
        && segments
            .iter()
            .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
}
