mod common;

use bullion_admin::config::{
    Config, ConfigError, ConfigStore, SecureString, Session, SessionStore, API_URL_ENV,
};
use chrono::Utc;
use common::temp_config;
use std::collections::HashMap;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://localhost:8000");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.query.stale_seconds, 30);
    assert_eq!(config.ui.page_size, 10);
    assert_eq!(config.ui.load_more_limit, 50);
    assert_eq!(config.ui.list_fetch_limit, 100);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("bullion-admin/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "https://admin.example.com"

[ui]
page_size = 25
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://admin.example.com");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.ui.page_size, 25);
    assert_eq!(config.ui.load_more_limit, 50);
}

#[test]
fn test_parse_error_names_the_file() {
    let (_dir, path) = temp_config("[api\nbase_url = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_non_http_url() {
    let mut config = Config::default();
    config.api.base_url = "ftp://example.com".to_string();

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("api.base_url"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_fetch_limit_over_hundred() {
    let (_dir, path) = temp_config("[ui]\nlist_fetch_limit = 500\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_env_override_replaces_base_url() {
    let env: HashMap<&str, &str> = HashMap::from([(API_URL_ENV, "https://api.example.com")]);
    let mut config = Config::default();
    config
        .apply_env_with(|key| env.get(key).map(|value| value.to_string()))
        .unwrap();
    assert_eq!(config.api.base_url, "https://api.example.com");
}

#[test]
fn test_empty_env_value_is_ignored() {
    let mut config = Config::default();
    config.apply_env_with(|_| Some("  ".to_string())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_store_reload_keeps_old_config_on_error() {
    let (_dir, path) = temp_config("[ui]\npage_size = 20\n");
    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());
    assert_eq!(store.get().ui.page_size, 20);

    std::fs::write(&path, "[ui]\npage_size = 0\n").unwrap();
    assert!(store.reload().is_err());
    assert_eq!(store.get().ui.page_size, 20);
}

#[test]
fn test_session_round_trips_through_store() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = SessionStore::new(dir.path().join("nested").join("session.toml"));
    assert!(store.load().unwrap().is_none());

    let session = Session {
        email: "ops@example.com".to_string(),
        access_token: SecureString::new("tok-123".to_string()),
        signed_in_at: Utc::now(),
    };
    store.save(&session).unwrap();

    let loaded = store.load().unwrap().expect("session saved");
    assert_eq!(loaded.email, "ops@example.com");
    assert_eq!(loaded.access_token.expose(), "tok-123");

    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
    store.clear().unwrap();
}

#[cfg(unix)]
#[test]
fn test_session_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::TempDir::new().unwrap();
    let store = SessionStore::new(dir.path().join("session.toml"));
    store
        .save(&Session {
            email: "ops@example.com".to_string(),
            access_token: SecureString::new("tok".to_string()),
            signed_in_at: Utc::now(),
        })
        .unwrap();
    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
