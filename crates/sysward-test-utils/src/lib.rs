//! Testing utilities for the sysward workspace
//!
//! Shared fixtures mirroring realistic analysis backend output.

#![allow(missing_docs)]

use chrono::NaiveDate;
use sysward_model::{
    AnalysisResult, AnalysisSummary, Finding, FindingType, MonitoringDocument, Priority, ProjectId,
    RiskAssessment, RiskFactors, Severity, SystemHealth, TaskDraft, TaskStatus, TechnicalDetails,
};

/// Monitoring document resembling an agent-collected system snapshot.
pub fn sample_document() -> MonitoringDocument {
    MonitoringDocument::new(serde_json::json!({
        "nodejs_version": "14.21.3",
        "ssl_config": "TLS 1.1",
        "last_update": "2023-12-01"
    }))
}

/// Node.js update finding: high severity, EOL approaching.
pub fn nodejs_update_finding() -> Finding {
    Finding::new(
        FindingType::Update,
        "Node.js version 14.x detected - End of Life approaching",
        Severity::High,
        0.95,
        4.0,
    )
    .with_confidence_rationale("Clear version detection with known EOL date")
    .with_technical_details(TechnicalDetails::new("Node.js", "14.21.3", "20.x LTS"))
    .with_recommended_action("Upgrade Node.js to latest LTS version")
    .with_dependencies(vec![
        "package.json updates".to_string(),
        "dependency compatibility check".to_string(),
    ])
    .with_risks(vec!["Potential breaking changes in dependencies".to_string()])
}

/// SSL configuration finding: critical severity.
pub fn ssl_security_finding() -> Finding {
    Finding::new(
        FindingType::Security,
        "Outdated SSL certificate configuration",
        Severity::Critical,
        0.9,
        2.0,
    )
    .with_confidence_rationale("Direct SSL configuration analysis")
    .with_technical_details(TechnicalDetails::new("SSL Configuration", "TLS 1.1", "TLS 1.3"))
    .with_recommended_action("Update SSL configuration to use TLS 1.3")
    .with_risks(vec!["Temporary service interruption during update".to_string()])
}

/// PHP finding whose component is already past end of life.
pub fn php_eol_finding() -> Finding {
    Finding::new(
        FindingType::Update,
        "PHP 7.4 detected - End of Life reached",
        Severity::Critical,
        0.95,
        8.0,
    )
    .with_confidence_rationale("PHP 7.4 EOL date: November 28, 2023")
    .with_technical_details(
        TechnicalDetails::new("PHP", "7.4.33", "8.2")
            .with_eol_date(NaiveDate::from_ymd_opt(2023, 11, 28).expect("valid date"))
            .reached_eol(),
    )
    .with_recommended_action("Upgrade PHP to version 8.2")
    .with_dependencies(vec![
        "Framework compatibility check".to_string(),
        "Code updates".to_string(),
    ])
    .with_risks(vec!["Breaking changes in PHP 8.x".to_string()])
}

/// Analysis result carrying the given findings, with a warning-level summary.
pub fn analysis_with(findings: Vec<Finding>) -> AnalysisResult {
    let total_estimated_hours = findings.iter().map(|f| f.estimated_hours).sum();
    AnalysisResult {
        summary: AnalysisSummary {
            system_health: SystemHealth::Warning,
            context: "Multiple outdated components detected".to_string(),
            severity_level: Severity::Medium,
            confidence_score: 0.85,
        },
        findings,
        total_estimated_hours,
        risk_assessment: Some(RiskAssessment {
            overall_risk: Severity::High,
            confidence: 0.9,
            rationale: "Multiple critical components require immediate attention".to_string(),
            immediate_actions_required: true,
            factors: RiskFactors {
                security_risk: 0.8,
                performance_risk: 0.4,
                compliance_risk: 0.7,
                update_risk: 0.6,
            },
        }),
    }
}

/// Full analysis fixture: Node.js update plus SSL security finding.
pub fn sample_analysis() -> AnalysisResult {
    analysis_with(vec![nodejs_update_finding(), ssl_security_finding()])
}

/// Minimal valid draft for store-level tests; `marker` lands in the description.
pub fn draft_for_project(project: i64, marker: &str) -> TaskDraft {
    TaskDraft {
        project_id: ProjectId(project),
        description: format!("SECURITY: {marker}"),
        estimated_hours: 1.0,
        status: TaskStatus::Pending,
        priority: Priority::Low,
        confidence_score: 0.8,
        confidence_rationale: String::new(),
        finding_type: FindingType::Security,
        technical_details: None,
        risks: Vec::new(),
        severity: Severity::Low,
    }
}
