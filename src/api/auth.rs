//! Email/password sign-in against the auth provider mounted at `/auth`.
//!
//! Sessions run in header mode: the access token comes back in the
//! `st-access-token` response header and is later sent as a bearer token.

use chrono::Utc;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::client::ApiClient;
use crate::api::envelope::error_message;
use crate::api::error::ApiError;
use crate::config::{SecureString, Session};

const SIGN_IN_PATH: &str = "/auth/signin";
const SIGN_OUT_PATH: &str = "/auth/signout";
const ACCESS_TOKEN_HEADER: &str = "st-access-token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SignInError {
    #[error("{}", describe_fields(.0))]
    FieldErrors(Vec<FieldError>),

    #[error("Invalid email or password")]
    WrongCredentials,

    #[error("{0}")]
    NotAllowed(String),

    #[error("Sign-in succeeded but no access token was returned")]
    MissingToken,

    #[error(transparent)]
    Api(#[from] ApiError),
}

fn describe_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| format!("{}: {}", error.field, error.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInBody<'a> {
    form_fields: [FormField<'a>; 2],
}

#[derive(Serialize)]
struct FormField<'a> {
    id: &'a str,
    value: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    status: String,
    #[serde(default)]
    form_fields: Vec<ResponseField>,
    #[serde(default)]
    reason: Option<String>,
}

#[derive(Deserialize)]
struct ResponseField {
    id: String,
    error: String,
}

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

impl AuthApi<'_> {
    /// Whether requests carry a session token.
    pub fn session_exists(&self) -> bool {
        self.client.has_session()
    }

    /// Signs in and returns a session ready to be persisted.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SignInError> {
        let body = SignInBody {
            form_fields: [
                FormField {
                    id: "email",
                    value: email,
                },
                FormField {
                    id: "password",
                    value: password,
                },
            ],
        };
        let response = self
            .client
            .request(Method::POST, SIGN_IN_PATH)
            .header("rid", "emailpassword")
            .header("st-auth-mode", "header")
            .json(&body)
            .send()
            .await
            .map_err(|source| ApiError::Connection {
                url: self.client.url(SIGN_IN_PATH),
                source,
            })?;

        let status = response.status();
        let token = response
            .headers()
            .get(ACCESS_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await.map_err(|source| ApiError::Connection {
            url: self.client.url(SIGN_IN_PATH),
            source,
        })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&bytes).unwrap_or_else(|| "Sign-in failed".to_string()),
            }
            .into());
        }

        let parsed: SignInResponse =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidResponse {
                path: SIGN_IN_PATH.to_string(),
                message: e.to_string(),
            })?;

        match parsed.status.as_str() {
            "OK" => {
                let token = token.filter(|t| !t.is_empty()).ok_or(SignInError::MissingToken)?;
                tracing::info!(email, "signed in");
                Ok(Session {
                    email: email.to_string(),
                    access_token: SecureString::new(token),
                    signed_in_at: Utc::now(),
                })
            }
            "FIELD_ERROR" => Err(SignInError::FieldErrors(
                parsed
                    .form_fields
                    .into_iter()
                    .map(|field| FieldError {
                        field: field.id,
                        message: field.error,
                    })
                    .collect(),
            )),
            "WRONG_CREDENTIALS_ERROR" => Err(SignInError::WrongCredentials),
            "SIGN_IN_NOT_ALLOWED" => Err(SignInError::NotAllowed(
                parsed
                    .reason
                    .unwrap_or_else(|| "Sign-in is not allowed for this account".to_string()),
            )),
            other => Err(ApiError::InvalidResponse {
                path: SIGN_IN_PATH.to_string(),
                message: format!("unexpected sign-in status '{other}'"),
            }
            .into()),
        }
    }

    /// Revokes the current session on the provider.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .request(Method::POST, SIGN_OUT_PATH)
            .header("st-auth-mode", "header")
            .send()
            .await
            .map_err(|source| ApiError::Connection {
                url: self.client.url(SIGN_OUT_PATH),
                source,
            })?;
        match response.status().as_u16() {
            200..=299 | 401 => Ok(()),
            status => Err(ApiError::Status {
                status,
                message: "Sign-out failed".to_string(),
            }),
        }
    }
}
