//! Domain Layer
//!
//! Pure message-building logic with no I/O:
//!
//! - `endpoint`: production/sandbox URL templating
//! - `category`: event categories for the `events` endpoint
//! - `payload`: ordered field accumulation
//! - `finite`: NaN/infinity rejection for serializable values
//! - `signing`: gzip + HMAC-SHA256 + base64
//! - `request`: signed `OutgoingRequest` assembly

pub mod category;
pub mod endpoint;
pub mod finite;
pub mod payload;
pub mod request;
pub mod signing;

pub use category::EventCategory;
pub use endpoint::{
    build_endpoint, ApiSegment, Environment, API_ENDPOINT, API_ENDPOINT_SANDBOX, API_VERSION,
};
pub use payload::{FieldValue, Payload};
pub use request::OutgoingRequest;
