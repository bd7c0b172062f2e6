// @awa-component: SHOP-ClientConfig
//
//! Client configuration.

use std::env;
use std::time::Duration;

use url::Url;

use crate::client::ApiError;

/// Base URL of the product chat service when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the chat endpoint, relative to the base URL.
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Path of the product listing endpoint, relative to the base URL.
pub const PRODUCTS_ENDPOINT: &str = "/api/products";

/// Path of the service's interactive (Swagger UI) documentation.
pub const SWAGGER_PATH: &str = "/docs";

/// Resolved configuration for talking to the product chat service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash (e.g. "http://localhost:8000").
    pub base_url: String,
    /// Per-request timeout. `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Build a config for the given base URL with no timeout.
    ///
    /// The URL must be an absolute `http` or `https` URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "unsupported URL scheme '{}' in '{base_url}'",
                parsed.scheme()
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        })
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable               | Default                 |
    /// |------------------------|-------------------------|
    /// | `SHOPBOT_BASE_URL`     | `http://localhost:8000` |
    /// | `SHOPBOT_TIMEOUT_SECS` | none                    |
    ///
    /// Unusable values are logged and replaced by the default.
    pub fn from_env() -> Self {
        let base_url = env::var("SHOPBOT_BASE_URL").ok();
        let timeout = env::var("SHOPBOT_TIMEOUT_SECS").ok();
        Self::from_values(base_url.as_deref(), timeout.as_deref())
    }

    fn from_values(base_url: Option<&str>, timeout_secs: Option<&str>) -> Self {
        let config = match base_url.map(Self::new) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("{e}; falling back to {DEFAULT_BASE_URL}");
                Self::default()
            }
            None => Self::default(),
        };

        let timeout = timeout_secs.and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(0) => None,
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(e) => {
                log::warn!("ignoring SHOPBOT_TIMEOUT_SECS='{raw}': {e}");
                None
            }
        });

        config.with_timeout(timeout)
    }

    /// Absolute URL of an endpoint path such as [`CHAT_ENDPOINT`].
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}
