//! Transports carrying abstract requests to a content store.
//!
//! The trait is the seam that makes client code testable: everything above
//! it is identical whether requests cross a network or land in the fake.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

use cs_core::config::ClientConfig;
use cs_core::error::{CsError, CsResult};
use cs_core::http::{Method, Request, Response};
use cs_fake::FakeContentStoreApi;

/// Delivers one request and produces one response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> CsResult<Response>;
}

/// Real HTTP transport over reqwest. `Request.path` must be a full URL.
pub struct HttpTransport {
    inner: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the configured timeout.
    pub fn new(config: &ClientConfig) -> CsResult<Self> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.api_timeout_ms))
            .build()
            .map_err(|e| CsError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> CsResult<Response> {
        debug!(method = %request.method, url = %request.path, "sending request");

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.inner.request(method, &request.path);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| CsError::Http(e.to_string()))?;
        let code = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| CsError::Http(e.to_string()))?;
        let data = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body).unwrap_or(Value::Null)
        };

        Ok(Response {
            code,
            headers,
            data,
            body,
        })
    }
}

/// In-memory transport wrapping the verified fake.
///
/// The single mutex serializes whole requests, so the fake's
/// check-then-act validation always sees a consistent snapshot even under
/// concurrent callers.
pub struct FakeTransport {
    api: Mutex<FakeContentStoreApi>,
}

impl FakeTransport {
    /// Wrap a fake instance.
    pub fn new(api: FakeContentStoreApi) -> Self {
        Self {
            api: Mutex::new(api),
        }
    }

    /// Direct access to the fake, for seeding and state inspection.
    pub async fn api(&self) -> MutexGuard<'_, FakeContentStoreApi> {
        self.api.lock().await
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: Request) -> CsResult<Response> {
        Ok(self.api.lock().await.handle_request(&request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_transport_answers_requests() {
        let transport = FakeTransport::new(FakeContentStoreApi::with_token("t"));
        let response = transport
            .send(Request::new(Method::Get, "/contentstore/schedule/").with_token("t"))
            .await
            .unwrap();
        assert_eq!(response.code, 200);
    }

    #[tokio::test]
    async fn test_fake_transport_strips_full_urls() {
        let transport = FakeTransport::new(FakeContentStoreApi::with_token("t"));
        let response = transport
            .send(
                Request::new(Method::Get, "http://testserver/contentstore/schedule/")
                    .with_token("t"),
            )
            .await
            .unwrap();
        assert_eq!(response.code, 200);
    }
}
