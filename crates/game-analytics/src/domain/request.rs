//! Outgoing request assembly
//!
//! Pipeline: payload -> compact JSON -> gzip -> HMAC-SHA256 over the gzip
//! bytes -> POST with `Content-Type`, `Content-Encoding` and `Authorization`.

use tracing::trace;

use super::payload::Payload;
use super::signing;
use crate::error::GaError;

pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_CONTENT_ENCODING: &str = "Content-Encoding";
pub const HEADER_AUTHORIZATION: &str = "Authorization";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_ENCODING_GZIP: &str = "gzip";

/// A fully built, signed request ready for an [`HttpSender`](crate::ports::HttpSender).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    url: String,
    headers: Vec<(&'static str, String)>,
    body: Vec<u8>,
}

impl OutgoingRequest {
    /// Build the signed request for `payload` addressed to `url`.
    pub fn build(url: &str, payload: &Payload, secret: &str) -> Result<Self, GaError> {
        let json = payload.to_json_bytes()?;
        let body = signing::gzip(&json)?;
        let authorization = signing::authorization(&body, secret);

        trace!(
            url = url,
            json_len = json.len(),
            body_len = body.len(),
            "Built signed request body"
        );

        Ok(Self {
            url: url.to_string(),
            headers: vec![
                (HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON.to_string()),
                (HEADER_CONTENT_ENCODING, CONTENT_ENCODING_GZIP.to_string()),
                (HEADER_AUTHORIZATION, authorization),
            ],
            body,
        })
    }

    /// HTTP method; submissions are always POSTed.
    pub fn method(&self) -> &'static str {
        "POST"
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Headers in the order they are sent.
    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Gzip-compressed JSON body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Split into url, headers and body, for senders that need ownership.
    pub fn into_parts(self) -> (String, Vec<(&'static str, String)>, Vec<u8>) {
        (self.url, self.headers, self.body)
    }
}
