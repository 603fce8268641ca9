//! REST client for the kanban backend.
//!
//! [`ApiClient::request`] is the single entry point: it attaches the JSON
//! content type and the stored bearer token, sends through a [`Transport`],
//! and turns any non-2xx status into [`ApiError::Status`] carrying the
//! server's `detail` message. The endpoint namespaces in [`endpoints`] and
//! [`admin`] only build paths and bodies.
//!
//! There are no retries or timeouts; failures go straight to the caller.

pub mod admin;
pub mod endpoints;
mod fetch;

pub use fetch::FetchTransport;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{API_BASE, DEFAULT_ERROR_MESSAGE, TOKEN_KEY};
use crate::core::error::ApiError;
use crate::core::storage::{KeyValueStore, LocalStore};

// =============================================================================
// Request / Response
// =============================================================================

/// HTTP method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Caller-side request options: method, extra headers and a JSON body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body =
            Some(serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?);
        Ok(self)
    }

    /// Add a header. Caller headers override the defaults.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Fully resolved request handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Raw response: status code and body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a request and waits for the response.
///
/// Only network-level failures are errors here; HTTP error statuses come
/// back as ordinary responses.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

// =============================================================================
// Client
// =============================================================================

/// Kanban API client.
///
/// Generic over the transport and the token store so it can be driven by
/// in-memory fakes; [`ApiClient::browser`] builds the real one.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    transport: T,
    store: S,
    base: String,
}

impl ApiClient<FetchTransport, LocalStore> {
    /// Same-origin client using `fetch` and `localStorage`.
    pub fn browser() -> Self {
        Self::new(FetchTransport, LocalStore, API_BASE)
    }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(transport: T, store: S, base: impl Into<String>) -> Self {
        Self {
            transport,
            store,
            base: base.into(),
        }
    }

    /// Stored bearer token. An empty string counts as no token.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Send a request to `endpoint` (e.g. `/api/boards`) and decode the JSON
    /// response.
    pub async fn request<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let request = HttpRequest {
            method: options.method,
            url: format!("{}{}", self.base, endpoint),
            headers: build_headers(self.token().as_deref(), options.headers),
            body: options.body,
        };
        let response = self.transport.send(request).await?;
        decode_response(response)
    }

    pub(crate) async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.request(endpoint, RequestOptions::new(Method::Get)).await
    }

    pub(crate) async fn delete<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.request(endpoint, RequestOptions::new(Method::Delete))
            .await
    }

    /// POST without a body.
    pub(crate) async fn post_empty<R: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<R, ApiError> {
        self.request(endpoint, RequestOptions::new(Method::Post))
            .await
    }

    pub(crate) async fn send_json<B, R>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(endpoint, RequestOptions::new(method).json(body)?)
            .await
    }
}

/// Default headers, then the bearer token, then caller headers. A caller
/// header replaces a default with the same (case-insensitive) name.
fn build_headers(token: Option<&str>, extra: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
    if let Some(token) = token {
        headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
    }
    for (name, value) in extra {
        headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        headers.push((name, value));
    }
    headers
}

/// Turn a raw response into a value or an error.
///
/// Anything outside 200..300 is an error whose message is the body's
/// `detail` field, or [`DEFAULT_ERROR_MESSAGE`]. An empty success body reads
/// as JSON `null`.
fn decode_response<R: DeserializeOwned>(response: HttpResponse) -> Result<R, ApiError> {
    if !(200..300).contains(&response.status) {
        return Err(ApiError::Status {
            status: response.status,
            message: error_detail(&response.body),
        });
    }

    let body = response.body.trim();
    let body = if body.is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn error_detail(body: &str) -> String {
    use serde_json::Value;

    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").cloned());

    match detail {
        Some(Value::String(s)) if !s.is_empty() => s,
        Some(Value::String(_) | Value::Null) | None => DEFAULT_ERROR_MESSAGE.to_string(),
        Some(other) => other.to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================
