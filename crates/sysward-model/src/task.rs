//! Task drafts and persisted task records
//!
//! A [`TaskDraft`] is the synthesizer's output: a fully validated task that
//! has not touched the store yet. The store turns drafts into [`TaskRecord`]s
//! by assigning identities and timestamps as one atomic batch.

use crate::finding::{FindingType, Priority, Severity, TechnicalDetails};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned task identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub i64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-supplied project reference
///
/// Must be strictly positive; the synthesizer rejects anything else before
/// building a single draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub i64);

impl ProjectId {
    /// Whether this id references a valid project
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task lifecycle state
///
/// Newly synthesized tasks are always `Pending`; later transitions belong to
/// workflow collaborators outside this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Snake_case wire value
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthesized task awaiting persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub project_id: ProjectId,
    /// Synthesized human-readable description
    pub description: String,
    pub estimated_hours: f64,
    pub status: TaskStatus,
    /// Derived from the finding severity
    pub priority: Priority,
    /// Analysis confidence in [0, 1], copied from the finding
    pub confidence_score: f64,
    /// Synthesized explanation of the confidence score
    pub confidence_rationale: String,
    pub finding_type: FindingType,
    /// Opaque structured blob, copied verbatim from the finding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_details: Option<TechnicalDetails>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risks: Vec<String>,
    pub severity: Severity,
}

/// A persisted unit of work
///
/// Created by the synthesizer, thereafter owned by the store. `status` and
/// `actual_hours` may be mutated by workflow collaborators after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: TaskId,
    pub project_id: ProjectId,
    pub description: String,
    pub estimated_hours: f64,
    /// Absent at creation; filled in as work completes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<f64>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub confidence_score: f64,
    pub confidence_rationale: String,
    pub finding_type: FindingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_details: Option<TechnicalDetails>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risks: Vec<String>,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TaskRecord {
    /// Materialize a draft with a store-assigned identity
    #[inline]
    #[must_use]
    pub fn from_draft(id: TaskId, draft: TaskDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            project_id: draft.project_id,
            description: draft.description,
            estimated_hours: draft.estimated_hours,
            actual_hours: None,
            status: draft.status,
            priority: draft.priority,
            confidence_score: draft.confidence_score,
            confidence_rationale: draft.confidence_rationale,
            finding_type: draft.finding_type,
            technical_details: draft.technical_details,
            risks: draft.risks,
            severity: draft.severity,
            created_at,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_draft() -> TaskDraft {
        TaskDraft {
            project_id: ProjectId(1),
            description: "UPDATE: Node.js update required".to_string(),
            estimated_hours: 4.0,
            status: TaskStatus::Pending,
            priority: Priority::High,
            confidence_score: 0.95,
            confidence_rationale: "Finding Type: update".to_string(),
            finding_type: FindingType::Update,
            technical_details: None,
            risks: vec!["Potential breaking changes in dependencies".to_string()],
            severity: Severity::High,
        }
    }

    #[test]
    fn project_id_validity() {
        assert!(ProjectId(1).is_valid());
        assert!(!ProjectId(0).is_valid());
        assert!(!ProjectId(-1).is_valid());
    }

    #[test]
    fn record_from_draft_assigns_identity_and_defaults() {
        let created_at = Utc::now();
        let record = TaskRecord::from_draft(TaskId(7), sample_draft(), created_at);

        assert_eq!(record.id, TaskId(7));
        assert_eq!(record.status, TaskStatus::Pending);
        assert!(record.actual_hours.is_none());
        assert!(record.updated_at.is_none());
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.risks.len(), 1);
    }

    #[test]
    fn task_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(TaskStatus::Pending.to_string(), "pending");
    }
}
