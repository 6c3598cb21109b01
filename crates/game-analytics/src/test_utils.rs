//! In-memory senders for tests.
//!
//! Available under `cfg(test)` or with the `test-utils` feature.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::OutgoingRequest;
use crate::error::TransportError;
use crate::ports::HttpSender;

/// Canned response returned by [`RecordingSender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Default for CannedResponse {
    fn default() -> Self {
        Self {
            status: 200,
            body: b"Everything OK".to_vec(),
        }
    }
}

/// Sender that records every request and answers with a canned response.
#[derive(Debug, Default)]
pub struct RecordingSender {
    requests: Mutex<Vec<OutgoingRequest>>,
    response: CannedResponse,
}

impl RecordingSender {
    /// Recorder answering `200 Everything OK`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder answering with the given status and body.
    pub fn with_response(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: CannedResponse {
                status,
                body: body.into(),
            },
        }
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<OutgoingRequest> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<OutgoingRequest>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl HttpSender for RecordingSender {
    type Response = CannedResponse;

    async fn send(&self, request: OutgoingRequest) -> Result<Self::Response, TransportError> {
        self.lock().push(request);
        Ok(self.response.clone())
    }
}

/// Sender that fails every request with the same message.
#[derive(Debug, Clone)]
pub struct FailingSender {
    message: String,
}

impl FailingSender {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl HttpSender for FailingSender {
    type Response = CannedResponse;

    async fn send(&self, _request: OutgoingRequest) -> Result<Self::Response, TransportError> {
        Err(TransportError::other(self.message.clone()))
    }
}
