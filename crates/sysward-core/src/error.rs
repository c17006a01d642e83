//! Error types for the triage core
//!
//! One taxonomy covering the four failure kinds a caller must tell apart:
//! caller mistakes, gateway rate limiting, other gateway failures, and
//! store failures. Nothing is swallowed or retried here.

use sysward_gateway::GatewayError;
use sysward_store::StoreError;

/// Main triage error type
#[derive(Debug, thiserror::Error)]
pub enum MonitoringError {
    /// Caller error; reported before any side effect occurs
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Analysis gateway failure
    #[error("analysis gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Task store failure
    #[error("task store error: {0}")]
    Store(#[from] StoreError),
}

impl MonitoringError {
    /// Whether the caller may usefully retry after backing off
    ///
    /// Only gateway rate limiting qualifies; everything else is either a
    /// caller mistake or a failure retrying will not fix.
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Gateway(gateway) if gateway.is_rate_limited())
    }

    /// Whether the failure is attributable to the caller's input
    #[inline]
    #[must_use]
    pub fn is_caller_fault(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
