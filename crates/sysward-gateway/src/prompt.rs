//! Analysis prompt and chat wire types
//!
//! The system prompt pins the JSON contract the backend must emit; the
//! request and response bodies follow the chat-completions wire format.

use serde::{Deserialize, Serialize};
use sysward_model::MonitoringDocument;

/// System prompt pinning the structured analysis contract
pub(crate) const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are an IT systems monitoring assistant specialized in analyzing system data and identifying actionable tasks, with particular focus on detecting End-of-Life (EOL) components. Format your response as JSON with the following structure:
{
    "monitoring_analysis": {
        "system_health": "good|warning|critical",
        "context": "Brief description of system state",
        "severity_level": "low|medium|high|critical",
        "confidence_score": float (0-1)
    },
    "findings": [
        {
            "type": "security|performance|update|compliance",
            "description": "Finding description",
            "severity": "low|medium|high|critical",
            "confidence": float (0-1),
            "confidence_rationale": "Detailed explanation of confidence",
            "estimated_hours": float,
            "priority": "low|medium|high",
            "technical_details": {
                "component": "affected system component",
                "current_state": "current state description",
                "desired_state": "desired state description",
                "eol_date": "YYYY-MM-DD if component is approaching or past EOL",
                "days_until_eol": integer or null,
                "is_eol": boolean
            },
            "recommended_action": "Detailed action plan",
            "dependencies": ["list of dependencies"],
            "risks": ["list of potential risks"],
            "deadline": "YYYY-MM-DD for critical updates or EOL-related tasks"
        }
    ],
    "total_estimated_hours": float,
    "risk_assessment": {
        "overall_risk": "low|medium|high|critical",
        "confidence": float (0-1),
        "rationale": "Detailed risk explanation",
        "immediate_actions_required": boolean,
        "factors": {
            "security_risk": float (0-1),
            "performance_risk": float (0-1),
            "compliance_risk": float (0-1),
            "update_risk": float (0-1)
        }
    }
}"#;

/// Chat-completions request body
#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest {
    pub(crate) model: String,
    pub(crate) messages: Vec<ChatMessage>,
    pub(crate) response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage {
    pub(crate) role: &'static str,
    pub(crate) content: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResponseFormat {
    #[serde(rename = "type")]
    pub(crate) kind: &'static str,
}

impl ChatRequest {
    /// Build the analysis request for a monitoring document
    pub(crate) fn for_document(model: &str, document: &MonitoringDocument) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: ANALYSIS_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!(
                        "Analyze this monitoring data and identify actionable tasks:\n\n{document}"
                    ),
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        }
    }
}

/// Chat-completions response body (only the fields consumed here)
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub(crate) choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub(crate) message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponseMessage {
    pub(crate) content: Option<String>,
}

impl ChatResponse {
    /// Content of the first completion choice, if any
    pub(crate) fn first_content(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.message.content.as_deref())
    }
}
