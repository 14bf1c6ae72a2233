#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{ConsoleError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use std::path::PathBuf;
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const BASE_URL_ENV: &str = "FUELEU_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "FUELEU_API_TIMEOUT_SECS";

/// Transport parameters for the backend API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Values given explicitly on the command line; they win over every other source.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub config_file: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Precedence: overrides, then environment, then the TOML file, then defaults.
    pub fn resolve_with<F>(overrides: &ConfigOverrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match &overrides.config_file {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let env_timeout = match env(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                ConsoleError::InvalidConfigValue {
                    field: TIMEOUT_ENV.to_string(),
                    value: raw.clone(),
                    reason: format!("Not a whole number of seconds: {}", e),
                }
            })?),
            None => None,
        };

        let base_url = overrides
            .base_url
            .clone()
            .or_else(|| env(BASE_URL_ENV).filter(|v| !v.trim().is_empty()))
            .or(file.api.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = overrides
            .timeout_secs
            .or(env_timeout)
            .or(file.api.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let config = Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        };
        config.validate()?;

        tracing::debug!(
            "Resolved API config: base_url={}, timeout={}s",
            config.base_url,
            config.timeout_secs
        );
        Ok(config)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.base_url)?;
        validate_positive_number("api.timeout_seconds", self.timeout_secs, 1)?;
        Ok(())
    }
}
