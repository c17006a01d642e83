//! Finding-to-task synthesis
//!
//! Deterministic, synchronous transformation of analysis findings into task
//! drafts: validation, severity-to-priority derivation, description and
//! confidence-rationale assembly, field copy-through. Persistence happens
//! elsewhere; this module has no side effects.

use crate::error::MonitoringError;
use sysward_model::{Finding, Priority, ProjectId, Severity, TaskDraft, TaskStatus};

/// Synthesizes task drafts from analysis findings
#[derive(Debug, Default, Clone, Copy)]
pub struct TaskSynthesizer;

impl TaskSynthesizer {
    /// Create a synthesizer
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Transform findings into task drafts, in input order
    ///
    /// Both preconditions are checked before the first draft is built, so a
    /// rejected call has no partial output.
    ///
    /// # Errors
    /// - `InvalidInput("no findings provided")` for an empty batch
    /// - `InvalidInput("invalid project id")` for a non-positive project id
    pub fn synthesize(
        &self,
        findings: &[Finding],
        project_id: ProjectId,
    ) -> Result<Vec<TaskDraft>, MonitoringError> {
        if findings.is_empty() {
            return Err(MonitoringError::InvalidInput(
                "no findings provided".to_string(),
            ));
        }
        if !project_id.is_valid() {
            return Err(MonitoringError::InvalidInput(
                "invalid project id".to_string(),
            ));
        }

        Ok(findings
            .iter()
            .map(|finding| draft_from(finding, project_id))
            .collect())
    }
}

fn draft_from(finding: &Finding, project_id: ProjectId) -> TaskDraft {
    TaskDraft {
        project_id,
        description: build_description(finding),
        estimated_hours: finding.estimated_hours,
        status: TaskStatus::Pending,
        priority: derive_priority(finding.severity),
        confidence_score: finding.confidence,
        confidence_rationale: build_confidence_rationale(finding),
        finding_type: finding.kind,
        technical_details: finding.technical_details.clone(),
        risks: finding.risks.clone(),
        severity: finding.severity,
    }
}

/// Total severity-to-priority mapping with an explicit default arm
fn derive_priority(severity: Severity) -> Priority {
    match severity {
        Severity::Critical | Severity::High => Priority::High,
        Severity::Medium => Priority::Medium,
        Severity::Low => Priority::Low,
        Severity::Unknown => Priority::Medium,
    }
}

/// Assemble the human-readable description
///
/// Uppercased type label plus the raw description, then an EOL notice when
/// an EOL date is known, then the recommended action. Blocks are separated
/// by blank lines; absent optional pieces are simply omitted.
fn build_description(finding: &Finding) -> String {
    let mut description = format!("{}: {}", finding.kind.label(), finding.description);

    if let Some(details) = &finding.technical_details {
        if let Some(eol_date) = details.eol_date {
            if details.is_eol {
                description
                    .push_str(&format!("\n\n⚠️ COMPONENT HAS REACHED END OF LIFE ON {eol_date}"));
            } else if let Some(days) = details.days_until_eol {
                description.push_str(&format!(
                    "\n\n⚠️ END OF LIFE APPROACHING: {eol_date} ({days} days remaining)"
                ));
            } else {
                description.push_str(&format!("\n\n⚠️ END OF LIFE APPROACHING: {eol_date}"));
            }
        }
    }

    if let Some(action) = &finding.recommended_action {
        description.push_str(&format!("\n\nRecommended Action: {action}"));
    }

    description
}

/// Compose the confidence rationale from type, severity, the original
/// rationale, and the joined risks; empty pieces render as empty segments
fn build_confidence_rationale(finding: &Finding) -> String {
    let rationale = finding.confidence_rationale.as_deref().unwrap_or_default();
    let risks = finding.risks.join(", ");
    format!(
        "Finding Type: {}\nSeverity: {}\n\nRationale: {}\n\nRisks: {}",
        finding.kind, finding.severity, rationale, risks
    )
}
