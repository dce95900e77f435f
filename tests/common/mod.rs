//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use bullion_admin::api::ApiClient;
use bullion_admin::config::{ApiConfig, Config, ConfigStore, SecureString};
use bullion_admin::ui::app::App;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` as a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    }
}

/// Client carrying the token `test-token`.
pub fn signed_in_client(base_url: &str) -> ApiClient {
    ApiClient::new(
        &api_config(base_url),
        Some(SecureString::new("test-token".to_string())),
    )
    .expect("Failed to build client")
}

pub fn make_app() -> App {
    let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml"));
    App::new(config, Some("admin@example.com".to_string()))
}
