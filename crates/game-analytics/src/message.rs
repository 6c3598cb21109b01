//! # Message
//!
//! One outgoing submission: an endpoint fixed at creation time, a borrowed
//! reference to the owning [`Client`] (for the secret and the sender), and an
//! ordered payload that stays mutable until it is sent.
//!
//! `send()` re-serializes the payload on every call, so a message can be
//! tweaked and sent again. The payload cannot change while a send is in
//! flight because `send` borrows the message.

use serde::Serialize;
use tracing::{debug, warn};

use crate::client::Client;
use crate::domain::{FieldValue, OutgoingRequest, Payload};
use crate::error::GaError;
use crate::ports::HttpSender;

/// A single message to be sent to GameAnalytics.
pub struct Message<'c, S> {
    endpoint: String,
    client: &'c Client<S>,
    payload: Payload,
}

impl<'c, S> Message<'c, S> {
    /// Create an empty message for `endpoint`, signed with `client`'s secret.
    pub fn new(endpoint: impl Into<String>, client: &'c Client<S>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
            payload: Payload::new(),
        }
    }

    /// URL this message will be posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Client this message belongs to.
    pub fn client(&self) -> &'c Client<S> {
        self.client
    }

    /// Fields set so far.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Set a single field. Last write wins.
    pub fn set_field(&mut self, key: impl Into<String>, value: impl FieldValue) -> &mut Self {
        self.payload.set_field(key, value);
        self
    }

    /// Set a field from any serializable value, failing fast if it has no
    /// JSON representation (NaN, infinity, non-string map keys).
    pub fn try_set_field<T>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<&mut Self, GaError>
    where
        T: Serialize + ?Sized,
    {
        self.payload.try_set_field(key, value)?;
        Ok(self)
    }

    /// Shallow-merge a mapping of fields into the payload.
    pub fn merge_fields<I, K, V>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: FieldValue,
    {
        self.payload.merge_fields(fields);
        self
    }

    /// By-value form of [`set_field`](Self::set_field) for chaining off a
    /// client factory call.
    pub fn with_field(mut self, key: impl Into<String>, value: impl FieldValue) -> Self {
        self.payload.set_field(key, value);
        self
    }

    /// By-value form of [`merge_fields`](Self::merge_fields).
    pub fn with_fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: FieldValue,
    {
        self.payload.merge_fields(fields);
        self
    }

    /// Serialize, compress and sign the current payload.
    pub fn build_request(&self) -> Result<OutgoingRequest, GaError> {
        OutgoingRequest::build(&self.endpoint, &self.payload, self.client.secret())
    }
}

impl<S: HttpSender> Message<'_, S> {
    /// Send this message through the client's sender.
    ///
    /// The sender's response is returned unaltered; its failures surface as
    /// [`GaError::Transport`].
    pub async fn send(&self) -> Result<S::Response, GaError> {
        let request = self.build_request()?;

        debug!(
            endpoint = %self.endpoint,
            fields = self.payload.len(),
            body_len = request.body().len(),
            "Sending analytics message"
        );

        self.client.sender().send(request).await.map_err(|e| {
            warn!(endpoint = %self.endpoint, error = %e, "Analytics message not delivered");
            GaError::Transport(e)
        })
    }
}

impl<S> std::fmt::Debug for Message<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Message")
            .field("endpoint", &self.endpoint)
            .field("payload", &self.payload)
            .finish_non_exhaustive()
    }
}
