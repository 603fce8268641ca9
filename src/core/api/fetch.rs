//! Browser transport built on the Fetch API.

use gloo_net::http::{Method as HttpMethod, RequestBuilder};

use super::{HttpRequest, HttpResponse, Method, Transport};
use crate::core::error::ApiError;

/// Sends requests with `window.fetch` via `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl From<Method> for HttpMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
            Method::Delete => HttpMethod::DELETE,
        }
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = RequestBuilder::new(&request.url).method(request.method.into());
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
