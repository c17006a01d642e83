//! Chat-completions implementation of the analysis gateway

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::prompt::{ChatRequest, ChatResponse};
use crate::AnalysisGateway;
use sysward_model::{AnalysisResult, MonitoringDocument};
use uuid::Uuid;

/// Analysis gateway backed by an OpenAI-compatible chat-completions endpoint
#[derive(Debug)]
pub struct OpenAiGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl OpenAiGateway {
    /// Create a gateway from configuration
    ///
    /// # Errors
    /// `GatewayError::Transport` if the HTTP client cannot be constructed.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    /// Create a gateway configured from the environment
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::new(GatewayConfig::from_env()?)
    }

    /// Get the configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Send the request, retrying transport failures only
    ///
    /// HTTP error statuses are returned to the caller untouched; only
    /// connection-level failures consume the retry budget.
    async fn post_completion(
        &self,
        request: &ChatRequest,
        request_id: Uuid,
    ) -> Result<reqwest::Response, GatewayError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let mut attempt = 0u32;
        loop {
            let sent = self
                .client
                .post(&url)
                .bearer_auth(&self.config.api_key)
                .header("x-request-id", request_id.to_string())
                .json(request)
                .send()
                .await;

            match sent {
                Ok(response) => return Ok(response),
                Err(err) if attempt < self.config.max_transport_retries => {
                    attempt += 1;
                    tracing::warn!(%request_id, attempt, error = %err, "transport failure, retrying");
                }
                Err(err) => return Err(GatewayError::Transport(err)),
            }
        }
    }
}

#[async_trait::async_trait]
impl AnalysisGateway for OpenAiGateway {
    async fn submit(
        &self,
        document: &MonitoringDocument,
    ) -> Result<AnalysisResult, GatewayError> {
        let request_id = Uuid::new_v4();
        let request = ChatRequest::for_document(&self.config.model, document);

        tracing::debug!(%request_id, model = %self.config.model, "submitting monitoring document");

        let response = self.post_completion(&request, request_id).await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(%request_id, "analysis backend rate limited");
            return Err(GatewayError::RateLimited(message));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(%request_id, status = status.as_u16(), "analysis backend failure");
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let payload = response.text().await?;
        let completion: ChatResponse = serde_json::from_str(&payload)?;
        let content = completion
            .first_content()
            .ok_or(GatewayError::MissingContent)?;
        let analysis: AnalysisResult = serde_json::from_str(content)?;

        tracing::info!(
            %request_id,
            findings = analysis.finding_count(),
            health = %analysis.system_health(),
            "analysis received"
        );
        Ok(analysis)
    }
}
