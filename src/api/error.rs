//! Error types for admin API calls.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while talking to the admin API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Could not reach the server.
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout.
    #[error("Request to '{path}' timed out")]
    Timeout { path: String },

    /// No session, or the session was rejected.
    #[error("Authentication required")]
    Unauthorized,

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx status.
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// 2xx response whose envelope reports a failure.
    #[error("Request rejected: {message}")]
    Rejected { message: String },

    /// Body could not be decoded into the expected shape.
    #[error("Invalid response from '{path}': {message}")]
    InvalidResponse { path: String, message: String },

    /// Envelope had no `data` where a record was required.
    #[error("Response from '{path}' carried no data")]
    MissingData { path: String },

    /// Upload file could not be read.
    #[error("Failed to read upload '{path}': {source}")]
    Upload {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// HTTP status associated with the error, if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Short text for notifications and inline error panels.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Client(_) | ApiError::Connection { .. } => {
                "Cannot reach the API server".to_string()
            }
            ApiError::Timeout { .. } => "The server took too long to respond".to_string(),
            ApiError::Unauthorized => {
                "Session expired. Run `bullion-admin login` to sign in again".to_string()
            }
            ApiError::Forbidden(message)
            | ApiError::NotFound(message)
            | ApiError::Status { message, .. }
            | ApiError::Rejected { message } => message.clone(),
            ApiError::InvalidResponse { .. } | ApiError::MissingData { .. } => {
                "Unexpected response from the server".to_string()
            }
            ApiError::Upload { path, .. } => format!("Cannot read {}", path.display()),
        }
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
