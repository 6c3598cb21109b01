//! # Client Configuration
//!
//! Game identity plus transport settings, loadable from the environment.
//!
//! ## Security Requirements
//!
//! - `secret_key` is never logged; `Debug` output redacts it
//! - `game_key` is interpolated into URL paths, so it is restricted to
//!   ASCII letters, digits, `-` and `_`

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the game key.
pub const ENV_GAME_KEY: &str = "GA_GAME_KEY";
/// Environment variable holding the secret key.
pub const ENV_SECRET_KEY: &str = "GA_SECRET_KEY";
/// Environment variable enabling the sandbox endpoint.
pub const ENV_SANDBOX: &str = "GA_SANDBOX";
/// Environment variable overriding the request timeout (seconds).
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "GA_REQUEST_TIMEOUT_SECS";

/// Default total request timeout for the default sender.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for building a `Client`.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Public game key issued by GameAnalytics.
    pub game_key: String,
    /// Private key used only for signing.
    pub secret_key: String,
    /// Send to the sandbox host instead of production.
    pub sandbox: bool,
    /// Total request timeout applied by the default sender.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            game_key: String::new(),
            secret_key: String::new(),
            sandbox: false,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("game_key", &self.game_key)
            .field("secret_key", &"<redacted>")
            .field("sandbox", &self.sandbox)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Create a validated configuration for the given identity.
    pub fn new(
        game_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            game_key: game_key.into(),
            secret_key: secret_key.into(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GA_GAME_KEY`: Game key (required)
    /// - `GA_SECRET_KEY`: Secret key (required)
    /// - `GA_SANDBOX`: `true`/`false`/`1`/`0`/`yes`/`no` (default: false)
    /// - `GA_REQUEST_TIMEOUT_SECS`: Request timeout in seconds (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let game_key = lookup(ENV_GAME_KEY).ok_or(ConfigError::MissingEnv(ENV_GAME_KEY))?;
        let secret_key = lookup(ENV_SECRET_KEY).ok_or(ConfigError::MissingEnv(ENV_SECRET_KEY))?;

        let sandbox = match lookup(ENV_SANDBOX) {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidEnv {
                var: ENV_SANDBOX,
                value: raw,
            })?,
            None => false,
        };

        let request_timeout = match lookup(ENV_REQUEST_TIMEOUT_SECS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        var: ENV_REQUEST_TIMEOUT_SECS,
                        value: raw,
                    })
                }
            },
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        let config = Self {
            game_key,
            secret_key,
            sandbox,
            request_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the game identity and the request timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_identity(&self.game_key, &self.secret_key)?;

        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroRequestTimeout);
        }

        Ok(())
    }

    /// Builder-style method to select the sandbox host
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Builder-style method to set the request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Check a game key / secret key pair.
pub(crate) fn validate_identity(game_key: &str, secret_key: &str) -> Result<(), ConfigError> {
    if game_key.trim().is_empty() {
        return Err(ConfigError::EmptyGameKey);
    }

    if !game_key
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err(ConfigError::InvalidGameKey(game_key.to_string()));
    }

    if secret_key.is_empty() {
        return Err(ConfigError::EmptySecretKey);
    }

    Ok(())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
