//! Error types for the analysis gateway
//!
//! Distinguishes the failure kinds the caller must handle differently:
//! rate limiting (back off and retry later), upstream failures (carry the
//! backend's status classification, not retryable), transport failures, and
//! responses that do not match the analysis contract.

/// Gateway error type
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Backend asked the caller to back off; may be retried later
    #[error("analysis backend rate limited: {0}")]
    RateLimited(String),

    /// Non-retryable backend failure with its status classification
    #[error("analysis backend error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// Connection-level failure reaching the backend
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response did not match the analysis contract
    #[error("malformed analysis response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// Completion arrived without any content to parse
    #[error("analysis response contained no content")]
    MissingContent,

    /// Gateway misconfiguration (e.g. missing API key)
    #[error("gateway configuration error: {0}")]
    Config(String),
}

impl GatewayError {
    /// Whether the caller may usefully retry after backing off
    #[inline]
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GatewayError::Upstream {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert!(err.to_string().contains("502"));

        let err = GatewayError::RateLimited("slow down".to_string());
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn rate_limited_classification() {
        assert!(GatewayError::RateLimited(String::new()).is_rate_limited());
        assert!(!GatewayError::MissingContent.is_rate_limited());
    }
}
