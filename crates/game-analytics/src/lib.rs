//! # Game Analytics
//!
//! Client for the GameAnalytics v2 collection API.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `Payload`: ordered field accumulation
//!   - `OutgoingRequest`: JSON -> gzip -> HMAC-SHA256 signed request
//!   - `Environment`: production / sandbox endpoint selection
//!   - `EventCategory`: categories for the `events` endpoint
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `HttpSender`: Driven port delivering a signed request
//!
//! - **Adapters Layer** (`adapters/`): External connections
//!   - `ReqwestSender`: default HTTPS sender (feature `default-sender`)
//!
//! - **Client / Message**: the public surface
//!   - `Client`: game identity, sandbox flag, message factory
//!   - `Message`: payload accumulation, signing and dispatch
//!
//! ## Wire Format
//!
//! Every submission is a `POST` to `{base}v2/{game_key}/{init|events}` with
//! a gzip-compressed JSON body and three headers:
//!
//! - `Content-Type: application/json`
//! - `Content-Encoding: gzip`
//! - `Authorization: base64(HMAC-SHA256(secret_key, gzip_body))`
//!
//! ## Usage Example
//!
//! ```ignore
//! use game_analytics::Client;
//!
//! let client = Client::new("5c6bcb5402204249437fb5a7a80a4959", "16813a12f718bc5c620f56944e1abc3ea13ccbac")?;
//! client.set_sandbox(true);
//!
//! let response = client
//!     .design()
//!     .with_field("event_id", "Kill:Sword:Robot")
//!     .with_field("value", 1)
//!     .send()
//!     .await?;
//! println!("collector answered {}", response.status());
//! ```
//!
//! ## Non-goals
//!
//! No retries, batching, response parsing or local persistence. Responses
//! are returned exactly as the sender produced them.

pub mod adapters;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod message;
pub mod ports;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-exports for convenience
pub use client::{Client, CATEGORY_FIELD};
pub use config::ClientConfig;
pub use domain::{ApiSegment, Environment, EventCategory, FieldValue, OutgoingRequest, Payload};
pub use error::{ConfigError, GaError, TransportError};
pub use message::Message;
pub use ports::HttpSender;

#[cfg(feature = "default-sender")]
pub use adapters::ReqwestSender;

/// Client using the reqwest-backed default sender.
#[cfg(feature = "default-sender")]
pub type DefaultClient = Client<ReqwestSender>;
