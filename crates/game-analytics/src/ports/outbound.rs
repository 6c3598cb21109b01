//! Outbound Ports (Driven Ports)
//!
//! The HTTP transport is an external collaborator. Messages hand it a fully
//! signed [`OutgoingRequest`] and return whatever it yields, unaltered.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::OutgoingRequest;
use crate::error::TransportError;

/// HTTP sender (Driven Port)
///
/// Implementations own retries, redirects, timeouts and cancellation if they
/// want any; the message pipeline adds none. Status codes are not
/// interpreted: a sender decides for itself whether a non-2xx response is an
/// error.
#[async_trait]
pub trait HttpSender: Send + Sync {
    /// Response handed back to the caller of `Message::send`.
    type Response: Send;

    /// Dispatch the request and return the response or fail.
    async fn send(&self, request: OutgoingRequest) -> Result<Self::Response, TransportError>;
}

#[async_trait]
impl<S> HttpSender for Arc<S>
where
    S: HttpSender + ?Sized,
{
    type Response = S::Response;

    async fn send(&self, request: OutgoingRequest) -> Result<Self::Response, TransportError> {
        (**self).send(request).await
    }
}
