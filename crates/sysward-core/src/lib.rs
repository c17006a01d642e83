//! sysward triage core
//!
//! Turns monitoring telemetry into persisted work items:
//! - Submits monitoring documents to the analysis gateway
//! - Synthesizes the returned findings into validated task drafts
//! - Persists drafts as one atomic batch and returns the records
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sysward_core::{MonitoringService, prelude::*};
//! use sysward_gateway::OpenAiGateway;
//! use sysward_store::MemoryTaskStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = Arc::new(OpenAiGateway::from_env()?);
//! let store = Arc::new(MemoryTaskStore::new());
//! let service = MonitoringService::new(gateway, store);
//!
//! let document = MonitoringDocument::new(serde_json::json!({
//!     "nodejs_version": "14.21.3",
//! }));
//! let (analysis, tasks) = service.analyze_and_create(&document, ProjectId(1)).await?;
//! println!("{} findings became {} tasks", analysis.finding_count(), tasks.len());
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod error;
pub mod service;
pub mod synthesis;

// Re-exports for convenience
pub use error::MonitoringError;
pub use service::MonitoringService;
pub use synthesis::TaskSynthesizer;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the triage core
    pub use crate::{MonitoringError, MonitoringService, TaskSynthesizer};
    pub use sysward_gateway::{AnalysisGateway, GatewayError};
    pub use sysward_model::{
        AnalysisResult, Finding, FindingType, MonitoringDocument, Priority, ProjectId, Severity,
        TaskRecord, TaskStatus,
    };
    pub use sysward_store::{StoreError, TaskFilter, TaskStore};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
