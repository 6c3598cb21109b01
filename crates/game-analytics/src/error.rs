//! # Error Types
//!
//! Every fallible operation in the crate returns [`GaError`]. Nothing is
//! logged and swallowed: configuration, serialization, compression and
//! transport failures all reach the caller unchanged.

use thiserror::Error;

/// Top-level error for client construction and message dispatch.
#[derive(Debug, Error)]
pub enum GaError {
    /// Invalid game identity or environment configuration.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// A payload value could not be represented as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Gzip encoding of the request body failed.
    #[error("Compression error: {0}")]
    Compression(#[from] std::io::Error),

    /// The HTTP sender failed to deliver the request.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Errors raised while validating client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Game key is empty or whitespace.
    #[error("Game key must not be empty")]
    EmptyGameKey,

    /// Secret key is empty.
    #[error("Secret key must not be empty")]
    EmptySecretKey,

    /// Game key contains characters that cannot appear in a URL path segment.
    #[error("Invalid game key: {0:?} (allowed: ASCII letters, digits, '-' and '_')")]
    InvalidGameKey(String),

    /// Request timeout is zero.
    #[error("Request timeout must be greater than zero")]
    ZeroRequestTimeout,

    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv {
        /// Variable name
        var: &'static str,
        /// Raw value found in the environment
        value: String,
    },
}

/// Failures produced by an [`HttpSender`](crate::ports::HttpSender).
#[derive(Debug, Error)]
pub enum TransportError {
    /// Error reported by the reqwest-backed default sender.
    #[cfg(feature = "default-sender")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The request could not be turned into a wire request by the sender.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Failure from a custom sender implementation.
    #[error("Transport failure: {0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wrap an arbitrary sender error.
    pub fn other<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        TransportError::Other(err.into())
    }
}
