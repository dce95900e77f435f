//! Admin session persistence.
//!
//! The auth provider hands back an access token on sign-in. It is kept in
//! `session.toml` next to the config file and attached to every API call.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::Config;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building requests.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to access session file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session file '{path}' is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },
}

/// An authenticated admin session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub email: String,
    pub access_token: SecureString,
    pub signed_in_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
struct SessionFile {
    email: String,
    access_token: String,
    signed_in_at: DateTime<Utc>,
}

/// Reads and writes the session file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store located in the default config directory.
    pub fn default_location() -> Self {
        Self::new(Config::config_dir().join("session.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored session, or `None` when nobody is signed in.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|source| SessionError::Io {
            path: self.path.clone(),
            source,
        })?;
        let file: SessionFile = toml::from_str(&content).map_err(|e| SessionError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        if file.access_token.is_empty() {
            return Ok(None);
        }
        Ok(Some(Session {
            email: file.email,
            access_token: SecureString::new(file.access_token),
            signed_in_at: file.signed_in_at,
        }))
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        let io_err = |source| SessionError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let file = SessionFile {
            email: session.email.clone(),
            access_token: session.access_token.expose().to_string(),
            signed_in_at: session.signed_in_at,
        };
        let content = toml::to_string(&file).map_err(|e| SessionError::Corrupt {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        fs::write(&self.path, content).map_err(io_err)?;
        restrict_permissions(&self.path).map_err(io_err)
    }

    /// Removes the session file. Missing files are not an error.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("session-token".to_string());

        assert!(!format!("{:?}", secret).contains("session-token"));
        assert!(!format!("{}", secret).contains("session-token"));
        assert_eq!(secret.expose(), "session-token");
    }

    #[test]
    fn test_session_round_trip_and_clear() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.toml"));

        assert!(store.load().unwrap().is_none());

        let session = Session {
            email: "admin@example.com".to_string(),
            access_token: SecureString::new("tok".to_string()),
            signed_in_at: Utc::now(),
        };
        store.save(&session).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.email, "admin@example.com");
        assert_eq!(loaded.access_token.expose(), "tok");

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_session_file_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("session.toml");
        fs::write(&path, "not = [valid").unwrap();

        let err = SessionStore::new(path).load().unwrap_err();
        assert!(matches!(err, SessionError::Corrupt { .. }));
    }
}
