//! HTTP client for the admin API.
//!
//! Every call goes through [`ApiClient::execute`], which attaches the
//! session token and a request id, maps HTTP failures to [`ApiError`] and
//! unwraps the response envelope.

use std::time::{Duration, Instant};

use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::api::envelope::{error_message, Envelope};
use crate::api::error::{ApiError, ApiResult};
use crate::config::{ApiConfig, SecureString};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Option<SecureString>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Option<SecureString>) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(
                config.connect_timeout_seconds,
            )))
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Request builder with auth and request id attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, self.url(path))
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string());
        if let Some(token) = &self.session {
            builder = builder.bearer_auth(token.expose());
        }
        builder
    }

    pub(crate) async fn get<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).query(query);
        self.execute(Method::GET, path, builder).await?.require(path)
    }

    /// GET without query parameters.
    pub(crate) async fn get_path<T>(&self, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let builder = self.request(Method::GET, path);
        self.execute(Method::GET, path, builder).await?.require(path)
    }

    pub(crate) async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(method.clone(), path).json(body);
        self.execute(method, path, builder).await?.require(path)
    }

    /// Like [`ApiClient::send_json`] for endpoints that only acknowledge.
    pub(crate) async fn send_json_discard<B>(&self, method: Method, path: &str, body: &B) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(method.clone(), path).json(body);
        self.execute::<serde_json::Value>(method, path, builder)
            .await
            .map(|_| ())
    }

    /// POST whose parameters travel in the query string, with no body.
    pub(crate) async fn post_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path).query(query);
        self.execute(Method::POST, path, builder).await?.require(path)
    }

    pub(crate) async fn send_multipart<T>(&self, method: Method, path: &str, form: Form) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let builder = self.request(method.clone(), path).multipart(form);
        self.execute(method, path, builder).await?.require(path)
    }

    /// DELETE; the envelope's data is ignored.
    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let builder = self.request(Method::DELETE, path);
        self.execute::<serde_json::Value>(Method::DELETE, path, builder)
            .await
            .map(|_| ())
    }

    /// Sends the request and unwraps the envelope.
    pub(crate) async fn execute<T>(
        &self,
        method: Method,
        path: &str,
        builder: RequestBuilder,
    ) -> ApiResult<Data<T>>
    where
        T: DeserializeOwned,
    {
        let started = Instant::now();
        let (http, request) = builder.build_split();
        let request = request.map_err(|e| ApiError::Client(e.to_string()))?;
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let response = http.execute(request).await.map_err(|source| {
            if source.is_timeout() {
                ApiError::Timeout {
                    path: path.to_string(),
                }
            } else {
                ApiError::Connection {
                    url: self.url(path),
                    source,
                }
            }
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|source| ApiError::Connection {
            url: self.url(path),
            source,
        })?;

        tracing::debug!(
            method = %method,
            path = %path,
            request_id = %request_id,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "api call"
        );

        if !status.is_success() {
            let message = error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
            tracing::warn!(
                method = %method,
                path = %path,
                request_id = %request_id,
                status = status.as_u16(),
                %message,
                "api call failed"
            );
            return Err(match status {
                StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
                StatusCode::FORBIDDEN => ApiError::Forbidden(message),
                StatusCode::NOT_FOUND => ApiError::NotFound(message),
                _ => ApiError::Status {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        if body.is_empty() {
            return Ok(Data(None));
        }

        let envelope: Envelope<T> =
            serde_json::from_slice(&body).map_err(|e| ApiError::InvalidResponse {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        if envelope.is_failure() {
            let message = envelope
                .message
                .unwrap_or_else(|| "Request failed".to_string());
            tracing::warn!(method = %method, path = %path, %message, "api call rejected");
            return Err(ApiError::Rejected { message });
        }

        Ok(Data(envelope.data))
    }
}

/// Envelope payload that may legitimately be absent.
pub(crate) struct Data<T>(pub(crate) Option<T>);

impl<T> Data<T> {
    pub(crate) fn require(self, path: &str) -> ApiResult<T> {
        self.0.ok_or_else(|| ApiError::MissingData {
            path: path.to_string(),
        })
    }
}
