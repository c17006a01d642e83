//! Analysis gateway boundary
//!
//! Turns raw monitoring telemetry into a structured [`AnalysisResult`] by
//! calling a text-generation backend. The backend is modeled as a capability
//! trait so any implementation can be substituted without touching the
//! synthesis logic downstream.
//!
//! # Example
//!
//! ```rust,ignore
//! use sysward_gateway::{AnalysisGateway, OpenAiGateway};
//! use sysward_model::MonitoringDocument;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = OpenAiGateway::from_env()?;
//! let document = MonitoringDocument::new(serde_json::json!({
//!     "nodejs_version": "14.21.3",
//! }));
//! let analysis = gateway.submit(&document).await?;
//! println!("{} findings", analysis.finding_count());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod openai;
mod prompt;

// Re-exports for convenience
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use openai::OpenAiGateway;

use sysward_model::{AnalysisResult, MonitoringDocument};

/// Capability interface to the analysis backend
///
/// Submits a monitoring document and awaits the structured analysis. The
/// call suspends until the remote response arrives; no retries happen here
/// beyond transport-level reconnects inside an implementation.
#[async_trait::async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Submit a monitoring document for analysis
    ///
    /// # Errors
    /// - `GatewayError::RateLimited` when the backend asks the caller to back off
    /// - `GatewayError::Upstream` for non-retryable backend failures
    async fn submit(&self, document: &MonitoringDocument)
        -> Result<AnalysisResult, GatewayError>;
}
