mod credentials;
mod loader;
mod store;
mod types;

pub use credentials::{SecureString, Session, SessionError, SessionStore};
pub use loader::{ConfigError, API_URL_ENV, WEBSITE_URL_ENV};
pub use store::ConfigStore;
pub use types::{ApiConfig, Config, LoggingConfig, QueryConfig, UiConfig};
