//! Ports Layer
//!
//! Driven ports (outbound) the client depends on. The only one is the HTTP
//! sender that delivers a signed request.

pub mod outbound;

pub use outbound::HttpSender;
