//! Fetcher settings.

use std::time::Duration;

/// Leaderboard page the fetcher targets unless told otherwise.
pub const DEFAULT_URL: &str = "https://rmi-gideon.gtarena.ph/leaderboard";

/// `id` of the element that carries the page payload.
pub const DEFAULT_CONTAINER_ID: &str = "app";

/// Attribute on the container holding the JSON payload.
pub const DEFAULT_PAYLOAD_ATTRIBUTE: &str = "data-page";

/// Upper bound on the whole request, connect through body read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub url: String,
    pub container_id: String,
    pub payload_attribute: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Also accept a bare JSON body (`draws`, `data`, or the document
    /// itself) in place of the rendered page. Off by default.
    pub accept_json_body: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            payload_attribute: DEFAULT_PAYLOAD_ATTRIBUTE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
            accept_json_body: false,
        }
    }
}

impl FetcherConfig {
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_json_body(mut self, accept: bool) -> Self {
        self.accept_json_body = accept;
        self
    }
}

fn default_user_agent() -> String {
    format!("draw-leaderboard/{}", env!("CARGO_PKG_VERSION"))
}
