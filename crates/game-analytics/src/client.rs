//! # Client
//!
//! Holds the game identity and the HTTP sender, and hands out pre-populated
//! [`Message`]s for the `init` and `events` endpoints.
//!
//! ## Concurrency
//!
//! `game_key`, `secret_key` and the sender are read-only after construction,
//! so a `&Client` can be shared across tasks sending messages in parallel.
//! The sandbox flag is an atomic: a `set_sandbox` racing with `init()` or
//! `event()` is well-defined but the message may get either host. Callers
//! that care must order those calls themselves.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::config::{validate_identity, ClientConfig};
use crate::domain::{build_endpoint, ApiSegment, Environment, EventCategory};
use crate::error::GaError;
use crate::message::Message;
use crate::ports::HttpSender;

#[cfg(feature = "default-sender")]
use crate::adapters::ReqwestSender;

/// Field every event payload carries.
pub const CATEGORY_FIELD: &str = "category";

/// GameAnalytics client for one game.
pub struct Client<S> {
    game_key: String,
    secret_key: String,
    sandbox: AtomicBool,
    sender: S,
}

#[cfg(feature = "default-sender")]
impl Client<ReqwestSender> {
    /// Create a client using the default reqwest sender.
    pub fn new(
        game_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, GaError> {
        let sender = ReqwestSender::new()?;
        Self::with_sender(game_key, secret_key, sender)
    }

    /// Create a client from configuration using the default reqwest sender.
    pub fn from_config(config: &ClientConfig) -> Result<Self, GaError> {
        config.validate()?;
        let sender = ReqwestSender::with_timeout(config.request_timeout)?;
        Self::from_config_with_sender(config, sender)
    }
}

impl<S: HttpSender> Client<S> {
    /// Create a client with an explicitly injected sender.
    pub fn with_sender(
        game_key: impl Into<String>,
        secret_key: impl Into<String>,
        sender: S,
    ) -> Result<Self, GaError> {
        let game_key = game_key.into();
        let secret_key = secret_key.into();
        validate_identity(&game_key, &secret_key)?;

        Ok(Self {
            game_key,
            secret_key,
            sandbox: AtomicBool::new(false),
            sender,
        })
    }

    /// Create a client from configuration with an injected sender.
    ///
    /// The whole config is validated, but `request_timeout` is not applied;
    /// timeouts belong to the sender.
    pub fn from_config_with_sender(config: &ClientConfig, sender: S) -> Result<Self, GaError> {
        config.validate()?;
        let client = Self::with_sender(config.game_key.clone(), config.secret_key.clone(), sender)?;
        client.set_sandbox(config.sandbox);
        Ok(client)
    }

    /// Route messages created from now on to the sandbox host.
    ///
    /// Messages already created keep the endpoint they were built with.
    pub fn set_sandbox(&self, enabled: bool) {
        self.sandbox.store(enabled, Ordering::Relaxed);
        debug!(game_key = %self.game_key, sandbox = enabled, "Sandbox mode updated");
    }

    pub fn is_sandbox(&self) -> bool {
        self.sandbox.load(Ordering::Relaxed)
    }

    /// Environment selected by the current sandbox flag.
    pub fn environment(&self) -> Environment {
        Environment::from_sandbox(self.is_sandbox())
    }

    /// `{base}v2/{game_key}/{api_segment}` for the current environment.
    pub fn build_endpoint(&self, api_segment: &str) -> String {
        build_endpoint(self.environment(), &self.game_key, api_segment)
    }

    /// New message for the `init` endpoint.
    pub fn init(&self) -> Message<'_, S> {
        Message::new(self.build_endpoint(ApiSegment::Init.as_str()), self)
    }

    /// New message for the `events` endpoint with `category` pre-set.
    pub fn event(&self, category: impl Into<String>) -> Message<'_, S> {
        let category: String = category.into();
        Message::new(self.build_endpoint(ApiSegment::Events.as_str()), self)
            .with_field(CATEGORY_FIELD, category)
    }

    /// Typed form of [`event`](Self::event).
    pub fn event_category(&self, category: EventCategory) -> Message<'_, S> {
        self.event(category.as_str())
    }

    pub fn user(&self) -> Message<'_, S> {
        self.event_category(EventCategory::User)
    }

    /// Event with category `session_end`.
    pub fn session_end(&self) -> Message<'_, S> {
        self.event_category(EventCategory::SessionEnd)
    }

    pub fn business(&self) -> Message<'_, S> {
        self.event_category(EventCategory::Business)
    }

    pub fn resource(&self) -> Message<'_, S> {
        self.event_category(EventCategory::Resource)
    }

    pub fn progression(&self) -> Message<'_, S> {
        self.event_category(EventCategory::Progression)
    }

    pub fn design(&self) -> Message<'_, S> {
        self.event_category(EventCategory::Design)
    }

    pub fn error(&self) -> Message<'_, S> {
        self.event_category(EventCategory::Error)
    }
}

impl<S> Client<S> {
    pub fn game_key(&self) -> &str {
        &self.game_key
    }

    /// Secret used to sign request bodies.
    pub fn secret(&self) -> &str {
        &self.secret_key
    }

    /// Configured HTTP sender.
    pub fn sender(&self) -> &S {
        &self.sender
    }
}

impl<S> fmt::Debug for Client<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("game_key", &self.game_key)
            .field("secret_key", &"<redacted>")
            .field("sandbox", &self.sandbox.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{API_ENDPOINT, API_ENDPOINT_SANDBOX, API_VERSION};
    use crate::error::ConfigError;
    use crate::test_utils::RecordingSender;
    use serde_json::json;

    fn make_client() -> Client<RecordingSender> {
        Client::with_sender("aaaaa", "bbbbb", RecordingSender::new()).unwrap()
    }

    #[test]
    fn test_construction() {
        let client = make_client();
        assert_eq!(client.secret(), "bbbbb");
        assert_eq!(client.game_key(), "aaaaa");
        assert!(!client.is_sandbox());
        assert!(client.sender().requests().is_empty());
    }

    #[test]
    fn test_construction_rejects_empty_identity() {
        let err = Client::with_sender("", "bbbbb", RecordingSender::new()).unwrap_err();
        assert!(matches!(err, GaError::Configuration(ConfigError::EmptyGameKey)));

        let err = Client::with_sender("aaaaa", "", RecordingSender::new()).unwrap_err();
        assert!(matches!(err, GaError::Configuration(ConfigError::EmptySecretKey)));
    }

    #[test]
    fn test_build_endpoint() {
        let client = make_client();
        assert_eq!(
            client.build_endpoint("foo"),
            format!("{API_ENDPOINT}{API_VERSION}/aaaaa/foo")
        );
    }

    #[test]
    fn test_sandbox_toggle() {
        let client = make_client();

        client.set_sandbox(true);
        assert_eq!(
            client.build_endpoint("bar"),
            format!("{API_ENDPOINT_SANDBOX}{API_VERSION}/aaaaa/bar")
        );

        client.set_sandbox(false);
        assert_eq!(
            client.build_endpoint("baz"),
            format!("{API_ENDPOINT}{API_VERSION}/aaaaa/baz")
        );
    }

    #[test]
    fn test_sandbox_toggle_does_not_move_existing_messages() {
        let client = make_client();
        let init = client.init();

        client.set_sandbox(true);
        let sandboxed = client.init();

        assert_eq!(init.endpoint(), "https://api.gameanalytics.com/v2/aaaaa/init");
        assert_eq!(
            sandboxed.endpoint(),
            "https://sandbox-api.gameanalytics.com/v2/aaaaa/init"
        );
    }

    #[test]
    fn test_init() {
        let client = make_client();
        let init = client.init();

        assert!(std::ptr::eq(init.client(), &client));
        assert!(init.endpoint().ends_with("aaaaa/init"));
        assert!(init.payload().is_empty());
    }

    #[test]
    fn test_event() {
        let client = make_client();
        let event = client.event("foo");

        assert!(std::ptr::eq(event.client(), &client));
        assert!(event.endpoint().ends_with("aaaaa/events"));
        assert_eq!(*event.payload(), json!({"category": "foo"}));
    }

    #[test]
    fn test_shortcuts() {
        let client = make_client();
        let shortcuts: [(&str, fn(&Client<RecordingSender>) -> Message<'_, RecordingSender>); 6] = [
            ("user", Client::user),
            ("business", Client::business),
            ("resource", Client::resource),
            ("progression", Client::progression),
            ("design", Client::design),
            ("error", Client::error),
        ];

        for (category, shortcut) in shortcuts {
            let event = shortcut(&client);
            assert!(std::ptr::eq(event.client(), &client));
            assert!(event.endpoint().ends_with("aaaaa/events"));
            assert_eq!(*event.payload(), json!({ "category": category }));
        }

        // The only one whose wire name differs from the method name.
        let event = client.session_end();
        assert!(event.endpoint().ends_with("aaaaa/events"));
        assert_eq!(*event.payload(), json!({"category": "session_end"}));
    }

    #[test]
    fn test_from_config_with_sender_applies_sandbox() {
        let config = ClientConfig::new("aaaaa", "bbbbb").unwrap().with_sandbox(true);
        let client = Client::from_config_with_sender(&config, RecordingSender::new()).unwrap();
        assert!(client.is_sandbox());
        assert!(client.init().endpoint().starts_with(API_ENDPOINT_SANDBOX));
    }

    #[test]
    fn test_from_config_with_sender_rejects_zero_timeout() {
        let config = ClientConfig::new("aaaaa", "bbbbb")
            .unwrap()
            .with_request_timeout(std::time::Duration::ZERO);
        let result = Client::from_config_with_sender(&config, RecordingSender::new());
        assert!(matches!(
            result,
            Err(GaError::Configuration(ConfigError::ZeroRequestTimeout))
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let client = Client::with_sender("aaaaa", "hunter2", RecordingSender::new()).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("aaaaa"));
        assert!(!debug.contains("hunter2"));
    }

    #[cfg(feature = "default-sender")]
    #[test]
    fn test_default_sender_construction() {
        let client = Client::new("ccccc", "ddddd").unwrap();
        assert_eq!(client.secret(), "ddddd");

        let config = ClientConfig::new("ccccc", "ddddd").unwrap();
        assert!(Client::from_config(&config).is_ok());
    }
}
