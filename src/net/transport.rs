//! HTTP seam between the auth service and a concrete client stack.
//!
//! Browser builds use `gloo-net` (`fetch`), native builds use `reqwest`, and
//! tests script responses. The service only ever sees [`ApiRequest`] and
//! [`ApiResponse`].

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Outbound JSON request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: HttpMethod::Get, url: url.into(), body: None }
    }

    #[must_use]
    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self { method: HttpMethod::Post, url: url.into(), body: Some(body) }
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serde error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Failure before any response was obtained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request could not be sent: {0}")]
    Network(String),
    #[error("request body could not be encoded: {0}")]
    Encode(String),
}

/// Sends one request and returns whatever status came back. Non-2xx is not an
/// error at this layer.
#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Pick the transport for the current build: `fetch` in the browser,
/// `reqwest` on native, [`OfflineTransport`] everywhere else.
#[must_use]
pub fn default_transport() -> Arc<dyn HttpTransport> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(GlooTransport)
    }
    #[cfg(all(feature = "native", not(feature = "hydrate")))]
    {
        Arc::new(ReqwestTransport::new())
    }
    #[cfg(not(any(feature = "hydrate", feature = "native")))]
    {
        Arc::new(OfflineTransport)
    }
}

/// Transport for server-side render, where auth calls never run.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTransport;

#[async_trait(?Send)]
impl HttpTransport for OfflineTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        Err(TransportError::Network(format!("no network transport for {}", request.url)))
    }
}

/// `fetch` via `gloo-net`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        use gloo_net::http::Request;

        let builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
        }
        .header("Content-Type", "application/json");

        let resp = match request.body {
            Some(body) => {
                builder
                    .json(&body)
                    .map_err(|e| TransportError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

/// Native transport over a shared `reqwest::Client`.
#[cfg(feature = "native")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "native")]
impl ReqwestTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "native")]
#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };
        let builder = match request.body {
            Some(body) => builder.json(&body),
            None => builder.header(reqwest::header::CONTENT_TYPE, "application/json"),
        };

        let resp = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
