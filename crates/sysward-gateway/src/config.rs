//! Gateway configuration
//!
//! The API key comes from the environment; everything else has defaults
//! matching the production deployment and builder-style overrides.

use crate::error::GatewayError;
use std::time::Duration;

/// Environment variable holding the backend API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_TRANSPORT_RETRIES: u32 = 2;
const DEFAULT_USER_AGENT: &str = concat!("sysward/", env!("CARGO_PKG_VERSION"));

/// Analysis backend configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Backend API key
    pub api_key: String,
    /// Backend base URL (no trailing slash)
    pub base_url: String,
    /// Model requested for analysis
    pub model: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Transport-level retries on connection failure; HTTP errors are never retried
    pub max_transport_retries: u32,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl GatewayConfig {
    /// Create a configuration with production defaults
    #[inline]
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_transport_retries: DEFAULT_TRANSPORT_RETRIES,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Read the API key from the environment
    ///
    /// # Errors
    /// `GatewayError::Config` if the key is unset or empty.
    pub fn from_env() -> Result<Self, GatewayError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| GatewayError::Config(format!("{API_KEY_ENV} not set")))?;
        if api_key.trim().is_empty() {
            return Err(GatewayError::Config(format!("{API_KEY_ENV} is empty")));
        }
        Ok(Self::new(api_key))
    }

    /// With a different base URL
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// With a different model
    #[inline]
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// With a different request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// With a different transport retry budget
    #[inline]
    #[must_use]
    pub fn with_max_transport_retries(mut self, retries: u32) -> Self {
        self.max_transport_retries = retries;
        self
    }
}
