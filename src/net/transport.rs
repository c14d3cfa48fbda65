//! HTTP transport seam.
//!
//! Client-side (hydrate): `fetch` via `gloo-net`.
//! Native: `reqwest`.
//! Tests substitute a stub so calls never touch the network.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::types::Method;

/// Content type for POST bodies. `text/plain` keeps the request "simple" so
/// the browser skips the CORS preflight.
pub const POST_CONTENT_TYPE: &str = "text/plain";

/// One outgoing HTTP request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub content_type: Option<&'static str>,
    pub body: Option<String>,
}

impl HttpRequest {
    #[must_use]
    pub fn get(url: String) -> Self {
        Self { method: Method::Get, url, content_type: None, body: None }
    }

    #[must_use]
    pub fn post_text(url: String, body: String) -> Self {
        Self { method: Method::Post, url, content_type: Some(POST_CONTENT_TYPE), body: Some(body) }
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request produced no HTTP response (DNS, TLS, connection reset, ...).
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TransportFailure(pub String);

/// Assemble a response once the status line has arrived. A body that cannot
/// be read is a transport failure on 2xx; on any other status the status
/// alone decides the outcome, so the body is left empty.
#[cfg_attr(not(any(feature = "native", feature = "hydrate")), allow(dead_code))]
fn completed_response(status: u16, body: Result<String, String>) -> Result<HttpResponse, TransportFailure> {
    match body {
        Ok(body) => Ok(HttpResponse { status, body }),
        Err(_) if !(200..300).contains(&status) => Ok(HttpResponse { status, body: String::new() }),
        Err(reason) => Err(TransportFailure(reason)),
    }
}

/// Sends one request and returns the raw response. Non-2xx statuses are
/// responses, not failures.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure>;
}

// =============================================================================
// REQWEST
// =============================================================================

/// Native transport backed by a shared `reqwest::Client`.
#[cfg(feature = "native")]
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

#[cfg(feature = "native")]
impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new() -> Result<Self, TransportFailure> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| TransportFailure(format!("HTTP client build failed: {e}")))?;
        Ok(Self { http })
    }

    #[must_use]
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[cfg(feature = "native")]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let mut builder = match request.method {
            Method::Get => self.http.get(&request.url),
            Method::Post => self.http.post(&request.url),
        };
        if let Some(content_type) = request.content_type {
            builder = builder.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportFailure(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| e.to_string());
        completed_response(status, body)
    }
}

// =============================================================================
// GLOO (browser fetch)
// =============================================================================

/// Browser transport over `fetch`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        use gloo_net::http::Request as GlooRequest;

        let mut builder = match request.method {
            Method::Get => GlooRequest::get(&request.url),
            Method::Post => GlooRequest::post(&request.url),
        };
        if let Some(content_type) = request.content_type {
            builder = builder.header("Content-Type", content_type);
        }
        let sent = match request.body {
            Some(body) => {
                builder
                    .body(body)
                    .map_err(|e| TransportFailure(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };

        let response = sent.map_err(|e| TransportFailure(e.to_string()))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string());
        completed_response(status, body)
    }
}
