//! Shared domain types for sysward
//!
//! Defines the data model that flows through the triage pipeline:
//! - Monitoring documents submitted for analysis
//! - Analysis results and their findings
//! - Task drafts and persisted task records

pub mod analysis;
pub mod finding;
pub mod task;

// Re-exports for convenience
pub use analysis::{
    AnalysisResult, AnalysisSummary, MonitoringDocument, RiskAssessment, RiskFactors, SystemHealth,
};
pub use finding::{Finding, FindingType, Priority, Severity, TechnicalDetails};
pub use task::{ProjectId, TaskDraft, TaskId, TaskRecord, TaskStatus};
