//! Reqwest HTTP Sender Adapter
//!
//! Implements the `HttpSender` port on top of an async `reqwest::Client`
//! with rustls. The `reqwest::Response` is returned as-is; a non-2xx status
//! is not treated as an error here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::DEFAULT_REQUEST_TIMEOUT;
use crate::domain::OutgoingRequest;
use crate::error::TransportError;
use crate::ports::HttpSender;

/// Default connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default sender used by `Client::new`.
#[derive(Debug, Clone)]
pub struct ReqwestSender {
    client: Client,
}

impl ReqwestSender {
    /// Create a sender with the default timeout.
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a sender with a total request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .build()?;

        Ok(Self { client })
    }

    /// Wrap a caller-configured `reqwest::Client`.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    fn header_map(headers: &[(&'static str, String)]) -> Result<HeaderMap, TransportError> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::InvalidRequest(format!("header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| TransportError::InvalidRequest(format!("header {name}: {e}")))?;
            map.insert(name, value);
        }
        Ok(map)
    }
}

#[async_trait]
impl HttpSender for ReqwestSender {
    type Response = reqwest::Response;

    async fn send(&self, request: OutgoingRequest) -> Result<Self::Response, TransportError> {
        let (url, headers, body) = request.into_parts();
        let headers = Self::header_map(&headers)?;

        debug!(url = %url, body_len = body.len(), "POSTing analytics request");

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "Analytics request failed");
                TransportError::Http(e)
            })?;

        debug!(url = %url, status = response.status().as_u16(), "Analytics response received");
        Ok(response)
    }
}
