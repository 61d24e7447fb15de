//! HTTP client for the substitution monitor API.

pub mod substitution;

/// Default public monitor endpoint.
const DEFAULT_BASE_URL: &str = "https://hepta.webuntis.com/WebUntis";

/// HTTP client for a school's public monitor board.
#[derive(Debug, Clone)]
pub struct MonitorClient {
    client: reqwest::Client,
    base_url: String,
}

impl MonitorClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create from environment (SUBBOARD_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("SUBBOARD_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
