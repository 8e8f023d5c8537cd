//! Client configuration options.

use std::time::Duration;

/// Default gateway for business API calls.
pub const DEFAULT_GATEWAY_URL: &str = "https://api-sg.aliexpress.com/sync";

/// Configuration for the AliExpress client.
///
/// # Example
///
/// ```
/// use aliexpress_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Gateway URL all calls are posted to
    pub gateway_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("aliexpress-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Point the client at a different gateway.
    pub fn with_gateway_url(mut self, gateway_url: impl Into<String>) -> Self {
        self.gateway_url = gateway_url.into();
        self
    }
}
