//! Monitoring triage service
//!
//! Wires the analysis gateway, the synthesizer, and the task store into the
//! one-directional flow: monitoring document in, persisted tasks out. Each
//! call is independent; the service keeps no per-request state.

use crate::error::MonitoringError;
use crate::synthesis::TaskSynthesizer;
use std::sync::Arc;
use sysward_gateway::AnalysisGateway;
use sysward_model::{AnalysisResult, Finding, MonitoringDocument, ProjectId, TaskRecord};
use sysward_store::{TaskFilter, TaskStore};

/// The triage service
///
/// Owns the gateway and store handles; synthesis itself is pure computation
/// between the two.
pub struct MonitoringService {
    gateway: Arc<dyn AnalysisGateway>,
    store: Arc<dyn TaskStore>,
    synthesizer: TaskSynthesizer,
}

impl MonitoringService {
    /// Create a service over a gateway and a store
    #[must_use]
    pub fn new(gateway: Arc<dyn AnalysisGateway>, store: Arc<dyn TaskStore>) -> Self {
        Self {
            gateway,
            store,
            synthesizer: TaskSynthesizer::new(),
        }
    }

    /// Analyze a monitoring document
    ///
    /// Pass-through to the gateway: failures surface as-is, with no retry
    /// and no re-shaping of the response.
    pub async fn analyze(
        &self,
        document: &MonitoringDocument,
    ) -> Result<AnalysisResult, MonitoringError> {
        tracing::debug!("submitting monitoring document for analysis");
        let analysis = self.gateway.submit(document).await?;
        tracing::info!(
            findings = analysis.finding_count(),
            health = %analysis.system_health(),
            "monitoring analysis completed"
        );
        Ok(analysis)
    }

    /// Synthesize findings into tasks and persist them as one atomic batch
    ///
    /// Validation happens before any persistence request is issued, and the
    /// store either commits the whole batch or nothing, so the returned
    /// records are never a partial result.
    pub async fn create_tasks(
        &self,
        findings: &[Finding],
        project_id: ProjectId,
    ) -> Result<Vec<TaskRecord>, MonitoringError> {
        let drafts = self.synthesizer.synthesize(findings, project_id)?;
        let records = self.store.insert_batch(drafts).await?;
        tracing::info!(
            project = %project_id,
            count = records.len(),
            "tasks created from findings"
        );
        Ok(records)
    }

    /// Full triage flow: analyze, then persist the findings as tasks
    ///
    /// Fails with `InvalidInput` when the analysis yields no findings; in
    /// that case nothing has been persisted.
    pub async fn analyze_and_create(
        &self,
        document: &MonitoringDocument,
        project_id: ProjectId,
    ) -> Result<(AnalysisResult, Vec<TaskRecord>), MonitoringError> {
        let analysis = self.analyze(document).await?;
        let records = self.create_tasks(&analysis.findings, project_id).await?;
        Ok((analysis, records))
    }

    /// List persisted tasks matching the filter
    pub async fn tasks(&self, filter: TaskFilter) -> Result<Vec<TaskRecord>, MonitoringError> {
        Ok(self.store.list(filter).await?)
    }
}
