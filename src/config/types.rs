use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the admin API (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Public website URL, used for links shown to the operator.
    #[serde(default = "default_website_url")]
    pub website_url: String,
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Read cache behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Seconds a cached read stays fresh before it is fetched again.
    #[serde(default = "default_stale_seconds")]
    pub stale_seconds: u64,
}

/// Console presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Rows per page for page-indexed lists.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Page size for Load-More lists.
    #[serde(default = "default_load_more_limit")]
    pub load_more_limit: u32,
    /// Fetch size for lists filtered on the client.
    #[serde(default = "default_list_fetch_limit")]
    pub list_fetch_limit: u32,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long a notification stays on screen.
    #[serde(default = "default_notification_seconds")]
    pub notification_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for console mode. Defaults to the config directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_website_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_stale_seconds() -> u64 {
    30
}

fn default_page_size() -> usize {
    10
}

fn default_load_more_limit() -> u32 {
    50
}

fn default_list_fetch_limit() -> u32 {
    100
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notification_seconds() -> u64 {
    4
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            website_url: default_website_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            stale_seconds: default_stale_seconds(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            load_more_limit: default_load_more_limit(),
            list_fetch_limit: default_list_fetch_limit(),
            tick_rate_ms: default_tick_rate_ms(),
            notification_seconds: default_notification_seconds(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
