//! Endpoint URL templating
//!
//! URLs have the shape `{base}{version}/{game_key}/{segment}` where `base`
//! is the production or sandbox root, selected by the client's sandbox flag
//! at the moment a message is created.

/// Production API root.
pub const API_ENDPOINT: &str = "https://api.gameanalytics.com/";

/// Sandbox API root.
pub const API_ENDPOINT_SANDBOX: &str = "https://sandbox-api.gameanalytics.com/";

/// REST API version segment.
pub const API_VERSION: &str = "v2";

/// Which collection host requests are addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live collection servers.
    #[default]
    Production,
    /// Test servers; data is not merged into production dashboards.
    Sandbox,
}

impl Environment {
    /// Select the environment from a sandbox flag.
    pub fn from_sandbox(sandbox: bool) -> Self {
        if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    /// Base URL (with trailing slash) for this environment.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => API_ENDPOINT,
            Environment::Sandbox => API_ENDPOINT_SANDBOX,
        }
    }
}

/// API segments the collector exposes under a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiSegment {
    /// Session initialisation.
    Init,
    /// Event submission.
    Events,
}

impl ApiSegment {
    pub fn as_str(self) -> &'static str {
        match self {
            ApiSegment::Init => "init",
            ApiSegment::Events => "events",
        }
    }
}

/// Build the full endpoint URL for `game_key` and `segment`.
pub fn build_endpoint(environment: Environment, game_key: &str, segment: &str) -> String {
    let base = environment.base_url();
    let mut url =
        String::with_capacity(base.len() + API_VERSION.len() + game_key.len() + segment.len() + 2);
    url.push_str(base);
    url.push_str(API_VERSION);
    url.push('/');
    url.push_str(game_key);
    url.push('/');
    url.push_str(segment);
    url
}
