use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, LoggingConfig};

const LOG_FILE: &str = "bullion-admin.log";

/// `RUST_LOG` wins; otherwise `-v` raises the configured level.
fn filter(level: &str, verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbosity {
            0 => level,
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::new(level)
    })
}

/// Logging for one-shot commands: stderr, so stdout stays pure JSON.
pub fn init_cli(config: &LoggingConfig, verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(&config.level, verbosity))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339())
        .init();
}

pub fn log_file_path(config: &LoggingConfig) -> PathBuf {
    config
        .file
        .clone()
        .unwrap_or_else(|| Config::config_dir().join(LOG_FILE))
}

/// Logging for the console. The terminal belongs to ratatui, so records
/// are appended to a file instead.
pub fn init_console(config: &LoggingConfig, verbosity: u8) {
    let path = log_file_path(config);
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: failed to open log file {}: {err}", path.display());
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter(&config.level, verbosity))
        .with(file_layer)
        .init();
}
