//! Analysis documents exchanged with the gateway
//!
//! A [`MonitoringDocument`] goes out, an [`AnalysisResult`] comes back. Both
//! are transient, created per request and discarded after synthesis.

use crate::finding::{Finding, Severity};
use serde::{Deserialize, Serialize};

/// Opaque monitoring telemetry submitted for analysis
///
/// No fixed schema; the document is passed through to the analysis backend
/// unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonitoringDocument(pub serde_json::Value);

impl MonitoringDocument {
    /// Wrap a JSON value as a monitoring document
    #[inline]
    #[must_use]
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Borrow the underlying JSON value
    #[inline]
    #[must_use]
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl std::fmt::Display for MonitoringDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Overall system health reported by the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemHealth {
    Good,
    Warning,
    Critical,
}

impl SystemHealth {
    /// Lowercase wire value
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemHealth::Good => "good",
            SystemHealth::Warning => "warning",
            SystemHealth::Critical => "critical",
        }
    }
}

impl std::fmt::Display for SystemHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// System-level summary of an analysis
///
/// On the wire this is the `monitoring_analysis` object of the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub system_health: SystemHealth,
    /// Brief description of the observed system state
    pub context: String,
    pub severity_level: Severity,
    /// Analysis confidence in [0, 1]
    pub confidence_score: f64,
}

/// Named risk factors, each in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub security_risk: f64,
    pub performance_risk: f64,
    pub compliance_risk: f64,
    pub update_risk: f64,
}

/// Structured risk summary attached to an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub overall_risk: Severity,
    /// Assessment confidence in [0, 1]
    pub confidence: f64,
    pub rationale: String,
    pub immediate_actions_required: bool,
    pub factors: RiskFactors,
}

/// Structured analysis of a monitoring document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// System-level summary (wire name `monitoring_analysis`)
    #[serde(rename = "monitoring_analysis")]
    pub summary: AnalysisSummary,
    /// Ordered findings; order is preserved through task synthesis
    pub findings: Vec<Finding>,
    /// Sum of per-finding estimates; some backend responses omit it
    #[serde(default)]
    pub total_estimated_hours: f64,
    /// Risk summary; some backend responses omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_assessment: Option<RiskAssessment>,
}

impl AnalysisResult {
    /// Overall system health
    #[inline]
    #[must_use]
    pub fn system_health(&self) -> SystemHealth {
        self.summary.system_health
    }

    /// Severity level of the analysis as a whole
    #[inline]
    #[must_use]
    pub fn severity_level(&self) -> Severity {
        self.summary.severity_level
    }

    /// Number of findings
    #[inline]
    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.findings.len()
    }
}
