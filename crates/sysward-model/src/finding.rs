//! Findings produced by monitoring analysis
//!
//! A finding is one actionable observation extracted from monitoring data.
//! Findings arrive from the analysis backend as JSON; the wire names use
//! snake_case and lowercase enum values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingType {
    /// Security issue
    Security,
    /// Performance degradation
    Performance,
    /// Outdated or end-of-life component
    Update,
    /// Compliance violation
    Compliance,
}

impl FindingType {
    /// Lowercase wire value
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingType::Security => "security",
            FindingType::Performance => "performance",
            FindingType::Update => "update",
            FindingType::Compliance => "compliance",
        }
    }

    /// Uppercase label used when synthesizing task descriptions
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            FindingType::Security => "SECURITY",
            FindingType::Performance => "PERFORMANCE",
            FindingType::Update => "UPDATE",
            FindingType::Compliance => "COMPLIANCE",
        }
    }
}

impl std::fmt::Display for FindingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity reported for a finding or an overall risk level
///
/// The analysis backend is prompted for `low|medium|high|critical`, but an
/// unexpected string must stay data rather than become a parse failure, so
/// deserialization routes any other value to [`Severity::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
    /// Any value outside the documented set
    Unknown,
}

impl Severity {
    /// Lowercase wire value
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
            Severity::Unknown => "unknown",
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "low" => Severity::Low,
            "medium" => Severity::Medium,
            "high" => Severity::High,
            "critical" => Severity::Critical,
            _ => Severity::Unknown,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority assigned to a synthesized task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Lowercase wire value
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured technical context attached to a finding
///
/// The shape varies per finding type, so every known sub-field is optional
/// and unrecognized keys are retained verbatim. The value travels unchanged
/// from the analysis response onto the persisted task record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_state: Option<String>,
    /// End-of-life date, present when the component is approaching or past EOL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eol_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_until_eol: Option<i64>,
    pub is_eol: bool,
    /// Keys the documented shape does not cover, preserved as-is
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TechnicalDetails {
    /// Create details for a component transition
    #[inline]
    #[must_use]
    pub fn new(
        component: impl Into<String>,
        current_state: impl Into<String>,
        desired_state: impl Into<String>,
    ) -> Self {
        Self {
            component: Some(component.into()),
            current_state: Some(current_state.into()),
            desired_state: Some(desired_state.into()),
            ..Self::default()
        }
    }

    /// With an end-of-life date
    #[inline]
    #[must_use]
    pub fn with_eol_date(mut self, date: NaiveDate) -> Self {
        self.eol_date = Some(date);
        self
    }

    /// With days remaining until end of life
    #[inline]
    #[must_use]
    pub fn with_days_until_eol(mut self, days: i64) -> Self {
        self.days_until_eol = Some(days);
        self
    }

    /// Mark the component as already past end of life
    #[inline]
    #[must_use]
    pub fn reached_eol(mut self) -> Self {
        self.is_eol = true;
        self
    }
}

/// One actionable observation extracted from monitoring data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Finding category
    #[serde(rename = "type")]
    pub kind: FindingType,
    /// Free-text description of the observation
    pub description: String,
    pub severity: Severity,
    /// Analysis confidence in [0, 1]
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_rationale: Option<String>,
    pub estimated_hours: f64,
    /// Priority suggested by the backend; the synthesizer derives its own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_details: Option<TechnicalDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_action: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub risks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl Finding {
    /// Create a finding with the required fields
    #[inline]
    #[must_use]
    pub fn new(
        kind: FindingType,
        description: impl Into<String>,
        severity: Severity,
        confidence: f64,
        estimated_hours: f64,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            severity,
            confidence,
            confidence_rationale: None,
            estimated_hours,
            priority: None,
            technical_details: None,
            recommended_action: None,
            dependencies: Vec::new(),
            risks: Vec::new(),
            deadline: None,
        }
    }

    /// With a confidence rationale
    #[inline]
    #[must_use]
    pub fn with_confidence_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.confidence_rationale = Some(rationale.into());
        self
    }

    /// With technical details
    #[inline]
    #[must_use]
    pub fn with_technical_details(mut self, details: TechnicalDetails) -> Self {
        self.technical_details = Some(details);
        self
    }

    /// With a recommended action
    #[inline]
    #[must_use]
    pub fn with_recommended_action(mut self, action: impl Into<String>) -> Self {
        self.recommended_action = Some(action.into());
        self
    }

    /// With dependencies
    #[inline]
    #[must_use]
    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// With risks
    #[inline]
    #[must_use]
    pub fn with_risks(mut self, risks: Vec<String>) -> Self {
        self.risks = risks;
        self
    }

    /// With a deadline
    #[inline]
    #[must_use]
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }
}
