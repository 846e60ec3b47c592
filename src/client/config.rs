//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::Result;

/// Default API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.revenuecat.com/";

/// Default request timeout. Some subscriber calls reach the app stores
/// before answering, so this is generous.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the RevenueCat client.
///
/// # Example
///
/// ```
/// use revenuecat_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(30))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin; the version segment and resource path are appended to it
    pub base_url: String,
    /// Request timeout, applied to the default transport only
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("revenuecat-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different origin.
    ///
    /// A trailing slash is added if missing.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
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

    /// Check that the configured origin is an absolute URL.
    pub(crate) fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.base_url, "https://api.revenuecat.com/");
        assert!(config.user_agent.starts_with("revenuecat-rs/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url_gains_trailing_slash() {
        let config = ClientConfig::new().with_base_url("http://127.0.0.1:8080");
        assert_eq!(config.base_url, "http://127.0.0.1:8080/");

        let config = ClientConfig::new().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = ClientConfig::new().with_base_url("not a url");
        assert!(matches!(config.validate(), Err(crate::Error::UrlParse(_))));
    }
}
