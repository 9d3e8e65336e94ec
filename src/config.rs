use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::AlignError;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub instance_url: Option<String>,
    #[serde(default = "default_true")]
    pub verify_tls: bool,
    /// When false, each matching item is confirmed before it is changed.
    #[serde(default = "default_true")]
    pub batch: bool,
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    #[serde(default)]
    pub credentials: Credentials,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            instance_url: None,
            verify_tls: true,
            batch: true,
            max_items: default_max_items(),
            credentials: Credentials::default(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Credentials {
    #[serde(default)]
    pub token: String,
    pub username: Option<String>,
    pub v1_token: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_max_items() -> usize {
    1000
}

/// URLs derived once from the instance URL and passed to every reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    /// `{instance}/rest/align/api/2`
    pub api: String,
    /// `{instance}/About`
    pub about: String,
    /// `{scheme}://{host}/api`
    pub api_v1: String,
}

impl ApiEndpoints {
    pub fn from_instance(instance_url: &str) -> Result<Self, AlignError> {
        let instance = instance_url.trim().trim_end_matches('/');
        let parsed = reqwest::Url::parse(instance).map_err(|e| AlignError::InvalidUrl {
            url: instance_url.to_string(),
            reason: e.to_string(),
        })?;
        let host = parsed.host_str().ok_or_else(|| AlignError::InvalidUrl {
            url: instance_url.to_string(),
            reason: "missing host".into(),
        })?;
        let netloc = match parsed.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        Ok(Self {
            api: format!("{instance}/rest/align/api/2"),
            about: format!("{instance}/About"),
            api_v1: format!("{}://{netloc}/api", parsed.scheme()),
        })
    }
}

pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".align-fix")
}

fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config.toml")?;
    Ok(config)
}
