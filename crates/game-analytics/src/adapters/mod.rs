//! Adapters Layer
//!
//! Concrete implementations of the outbound ports.
//!
//! - `ReqwestSender`: default HTTPS sender (feature `default-sender`)

#[cfg(feature = "default-sender")]
pub mod reqwest_sender;

#[cfg(feature = "default-sender")]
pub use reqwest_sender::ReqwestSender;
