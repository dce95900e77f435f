use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "BULLION_API_URL";
/// Environment variable overriding `api.website_url`.
pub const WEBSITE_URL_ENV: &str = "BULLION_WEBSITE_URL";

const APP_DIR: &str = "bullion-admin";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Directory holding the config file, session and default log file.
    ///
    /// `~/.config/bullion-admin` on Linux, the platform equivalent elsewhere.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - A missing file yields `Config::default()`.
    /// - An existing file is parsed as TOML and validated.
    ///
    /// Environment overrides are not applied here; see [`Config::apply_env`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies `BULLION_API_URL` / `BULLION_WEBSITE_URL` from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Applies environment overrides read through `lookup`.
    ///
    /// Empty values count as unset.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = non_empty(API_URL_ENV) {
            self.api.base_url = url;
        }
        if let Some(url) = non_empty(WEBSITE_URL_ENV) {
            self.api.website_url = url;
        }
        self.validate()
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - URLs use http or https
    /// - Page size is at least 1
    /// - Fetch limits are within 1..=100
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, url) in [
            ("api.base_url", &self.api.base_url),
            ("api.website_url", &self.api.website_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError {
                    message: format!("{field} must start with http:// or https://, got '{url}'"),
                });
            }
        }

        if self.ui.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.page_size must be at least 1".to_string(),
            });
        }

        for (field, limit) in [
            ("ui.load_more_limit", self.ui.load_more_limit),
            ("ui.list_fetch_limit", self.ui.list_fetch_limit),
        ] {
            if !(1..=100).contains(&limit) {
                return Err(ConfigError::ValidationError {
                    message: format!("{field} must be between 1 and 100, got {limit}"),
                });
            }
        }

        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}
