//! Configuration types for plugin repositories
//!
//! The runtime mode decides which optional repositories get registered,
//! e.g. `repositories.add_if(dev_repo, || config.is_development())`.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable consulted by [`RuntimeMode::from_env`]
pub const RUNTIME_MODE_ENV: &str = "PLUGIN_RUNTIME_MODE";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown runtime mode '{0}'. Expected 'development' or 'deployment'")]
    InvalidMode(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Whether plugins are run from a development tree or from deployed artifacts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Development,
    #[default]
    Deployment,
}

impl RuntimeMode {
    /// Read the mode from `PLUGIN_RUNTIME_MODE`, defaulting to deployment
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var(RUNTIME_MODE_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Result<Self> {
        match value {
            None => Ok(Self::default()),
            Some(value) if value.trim().is_empty() => Ok(Self::default()),
            Some(value) => value.parse(),
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, RuntimeMode::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeMode::Development => "development",
            RuntimeMode::Deployment => "deployment",
        }
    }
}

impl FromStr for RuntimeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(RuntimeMode::Development),
            "deployment" | "deploy" => Ok(RuntimeMode::Deployment),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

impl core::fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registry configuration file (`plugins.yaml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistryConfig {
    /// Runtime mode
    pub mode: RuntimeMode,
}

impl RegistryConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn is_development(&self) -> bool {
        self.mode.is_development()
    }
}
