//! The authenticated request helper every service goes through.
//!
//! One attempt per call: no retry, no timeout, no backoff.

use std::sync::Arc;

use cp_config::ApiConfig;
use cp_core::entities::User;
use cp_session::SessionStore;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Per-call options: method, JSON body, extra headers.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    /// Applied after `Content-Type` and before `Authorization`.
    pub headers: Vec<(String, String)>,
    /// Skip the bearer token even when a session exists.
    pub anonymous: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
            anonymous: false,
        }
    }
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    /// POST with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if `body` cannot be encoded as JSON.
    pub fn post<B: Serialize>(body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode {
            path: String::from("<request body>"),
            reason: e.to_string(),
        })?;
        Ok(Self {
            method: Method::POST,
            body: Some(body),
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub const fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }
}

/// HTTP client bound to a base URL and a session store.
///
/// The token is read from the store on every call, so a login performed
/// through this client applies to the next request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Arc<SessionStore>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            session,
        }
    }

    #[must_use]
    pub fn from_config(config: &ApiConfig, session: Arc<SessionStore>) -> Self {
        Self::new(config.base_url(), session)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The logged-in user, or `ApiError::NotLoggedIn`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotLoggedIn` when no user is cached.
    pub fn require_user(&self) -> Result<User, ApiError> {
        self.session.user().ok_or(ApiError::NotLoggedIn)
    }

    /// Perform one call against `base_url + path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// - `ApiError::Transport` if no response was received
    /// - `ApiError::Http` for non-2xx statuses (body text, or status text when empty)
    /// - `ApiError::Decode` if a 2xx body is not valid JSON
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let headers = self.build_headers(&options)?;

        let mut builder = self
            .http
            .request(options.method.clone(), &url)
            .headers(headers);
        if let Some(body) = &options.body {
            builder = builder.body(body.to_string());
        }

        let resp = builder.send().await.map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;

        let status = resp.status();
        tracing::debug!(method = %options.method, path, status = status.as_u16(), "api call");

        let text = resp.text().await.map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;

        if !status.is_success() {
            let message = if text.trim().is_empty() {
                status
                    .canonical_reason()
                    .map_or_else(|| status.as_u16().to_string(), str::to_string)
            } else {
                text
            };
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Perform a call and unwrap one named field of the response envelope.
    ///
    /// # Errors
    ///
    /// Everything [`Self::request`] returns, plus `ApiError::MissingField`
    /// when the envelope lacks `field` and `ApiError::Decode` when it has the
    /// wrong shape.
    pub async fn request_field<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
        field: &'static str,
    ) -> Result<T, ApiError> {
        let body = self.request(path, options).await?;
        take_field(path, body, field)
    }

    pub(crate) async fn get_field<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &'static str,
    ) -> Result<T, ApiError> {
        self.request_field(path, RequestOptions::get(), field).await
    }

    pub(crate) async fn post_field<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        field: &'static str,
    ) -> Result<T, ApiError> {
        self.request_field(path, RequestOptions::post(body)?, field)
            .await
    }

    fn build_headers(&self, options: &RequestOptions) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ApiError::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| ApiError::InvalidHeader(name.as_str().to_string()))?;
            headers.insert(name, value);
        }

        if !options.anonymous
            && let Some(token) = self.session.token()
        {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::InvalidHeader(AUTHORIZATION.as_str().to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

/// Pull `field` out of a response envelope and decode it.
///
/// # Errors
///
/// Returns `ApiError::MissingField` or `ApiError::Decode`.
pub fn take_field<T: DeserializeOwned>(
    path: &str,
    mut body: Value,
    field: &'static str,
) -> Result<T, ApiError> {
    let value = body
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| ApiError::MissingField {
            path: path.to_string(),
            field,
        })?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode {
        path: path.to_string(),
        reason: format!("field '{field}': {e}"),
    })
}

/// Percent-encode an id for use as a path segment.
#[must_use]
pub fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
