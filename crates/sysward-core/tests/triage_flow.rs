//! Functional tests for the triage flow and its error semantics.
//!
//! These tests exercise the MonitoringService end to end against a mocked
//! gateway and the in-memory store:
//! - analyze_and_create performs analysis, synthesis, and one batch write.
//! - Each failure kind surfaces distinctly; none produces partial data.
//! - Retryable vs non-retryable errors are classified via
//!   MonitoringError::is_retryable.

use std::sync::Arc;
use sysward_core::{MonitoringError, MonitoringService};
use sysward_gateway::{AnalysisGateway, GatewayError};
use sysward_model::{
    AnalysisResult, FindingType, MonitoringDocument, Priority, ProjectId, Severity, TaskDraft,
    TaskId, TaskRecord, TaskStatus,
};
use sysward_store::{MemoryTaskStore, StoreError, TaskFilter, TaskStore};
use sysward_test_utils::{
    analysis_with, nodejs_update_finding, php_eol_finding, sample_analysis, sample_document,
    ssl_security_finding,
};

mockall::mock! {
    Gateway {}

    #[async_trait::async_trait]
    impl AnalysisGateway for Gateway {
        async fn submit(
            &self,
            document: &MonitoringDocument,
        ) -> Result<AnalysisResult, GatewayError>;
    }
}

mockall::mock! {
    Store {}

    #[async_trait::async_trait]
    impl TaskStore for Store {
        async fn insert_batch(
            &self,
            drafts: Vec<TaskDraft>,
        ) -> Result<Vec<TaskRecord>, StoreError>;
        async fn list(&self, filter: TaskFilter) -> Result<Vec<TaskRecord>, StoreError>;
        async fn get(&self, id: TaskId) -> Result<TaskRecord, StoreError>;
    }
}

/// Helper: service over a canned-analysis gateway and a fresh memory store.
fn service_with_analysis(analysis: AnalysisResult) -> (MonitoringService, Arc<MemoryTaskStore>) {
    let mut gateway = MockGateway::new();
    gateway
        .expect_submit()
        .returning(move |_| Ok(analysis.clone()));

    let store = Arc::new(MemoryTaskStore::new());
    let service = MonitoringService::new(Arc::new(gateway), store.clone());
    (service, store)
}

#[tokio::test]
async fn analyze_passes_the_gateway_result_through() {
    let (service, _store) = service_with_analysis(sample_analysis());

    let analysis = service.analyze(&sample_document()).await.unwrap();

    assert_eq!(analysis.finding_count(), 2);
    assert_eq!(analysis.findings[0].kind, FindingType::Update);
    assert_eq!(analysis.findings[1].kind, FindingType::Security);
    assert!(analysis.risk_assessment.is_some());
}

#[tokio::test]
async fn analyze_and_create_persists_one_task_per_finding() {
    let (service, store) = service_with_analysis(sample_analysis());

    let (analysis, tasks) = service
        .analyze_and_create(&sample_document(), ProjectId(1))
        .await
        .unwrap();

    assert_eq!(tasks.len(), analysis.finding_count());
    assert_eq!(store.len(), 2);

    // Input order preserved, identities assigned in sequence.
    assert_eq!(tasks[0].id, TaskId(1));
    assert_eq!(tasks[1].id, TaskId(2));
    assert!(tasks[0].description.contains("Node.js"));
    assert!(tasks[1].description.contains("SSL"));

    // high and critical both map to high priority.
    assert_eq!(tasks[0].priority, Priority::High);
    assert_eq!(tasks[1].priority, Priority::High);

    for task in &tasks {
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.project_id, ProjectId(1));
        assert!(task.actual_hours.is_none());
    }
}

#[tokio::test]
async fn created_task_matches_its_finding() {
    let (service, _store) = service_with_analysis(analysis_with(vec![nodejs_update_finding()]));

    let (_, tasks) = service
        .analyze_and_create(&sample_document(), ProjectId(1))
        .await
        .unwrap();
    let task = &tasks[0];

    assert!(task
        .description
        .starts_with("UPDATE: Node.js version 14.x detected"));
    assert_eq!(task.estimated_hours, 4.0);
    assert_eq!(task.confidence_score, 0.95);
    assert_eq!(task.finding_type, FindingType::Update);
    assert_eq!(task.severity, Severity::High);
    assert!(task
        .confidence_rationale
        .contains("Potential breaking changes in dependencies"));
    assert_eq!(
        task.technical_details.as_ref().unwrap().component.as_deref(),
        Some("Node.js")
    );
}

#[tokio::test]
async fn eol_finding_produces_eol_notice_in_description() {
    let (service, _store) = service_with_analysis(analysis_with(vec![php_eol_finding()]));

    let (_, tasks) = service
        .analyze_and_create(&sample_document(), ProjectId(1))
        .await
        .unwrap();

    assert!(tasks[0]
        .description
        .contains("COMPONENT HAS REACHED END OF LIFE ON 2023-11-28"));
    assert_eq!(tasks[0].priority, Priority::High);
}

#[tokio::test]
async fn empty_findings_fail_before_any_side_effect() {
    let store = Arc::new(MemoryTaskStore::new());
    let service = MonitoringService::new(Arc::new(MockGateway::new()), store.clone());

    let result = service.create_tasks(&[], ProjectId(1)).await;

    match result {
        Err(MonitoringError::InvalidInput(message)) => {
            assert_eq!(message, "no findings provided");
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn non_positive_project_ids_fail_before_any_side_effect() {
    let store = Arc::new(MemoryTaskStore::new());
    let service = MonitoringService::new(Arc::new(MockGateway::new()), store.clone());
    let findings = vec![ssl_security_finding()];

    for project in [0, -1] {
        let result = service.create_tasks(&findings, ProjectId(project)).await;
        match result {
            Err(MonitoringError::InvalidInput(message)) => {
                assert_eq!(message, "invalid project id");
            }
            other => panic!("expected InvalidInput for project {project}, got {other:?}"),
        }
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn rate_limiting_propagates_as_retryable_with_nothing_persisted() {
    let mut gateway = MockGateway::new();
    gateway
        .expect_submit()
        .returning(|_| Err(GatewayError::RateLimited("try again later".to_string())));

    let store = Arc::new(MemoryTaskStore::new());
    let service = MonitoringService::new(Arc::new(gateway), store.clone());

    let error = service
        .analyze_and_create(&sample_document(), ProjectId(1))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        MonitoringError::Gateway(GatewayError::RateLimited(_))
    ));
    assert!(error.is_retryable());
    assert!(store.is_empty());
}

#[tokio::test]
async fn upstream_failures_propagate_with_their_status() {
    let mut gateway = MockGateway::new();
    gateway.expect_submit().returning(|_| {
        Err(GatewayError::Upstream {
            status: 503,
            message: "backend unavailable".to_string(),
        })
    });

    let service =
        MonitoringService::new(Arc::new(gateway), Arc::new(MemoryTaskStore::new()));

    let error = service.analyze(&sample_document()).await.unwrap_err();

    match error {
        MonitoringError::Gateway(GatewayError::Upstream { status, .. }) => {
            assert_eq!(status, 503);
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
    assert!(!error.is_retryable());
}

#[tokio::test]
async fn store_failures_propagate_opaquely() {
    let mut store = MockStore::new();
    store
        .expect_insert_batch()
        .returning(|_| Err(StoreError::Unavailable("connection reset".to_string())));

    let service = MonitoringService::new(Arc::new(MockGateway::new()), Arc::new(store));

    let error = service
        .create_tasks(&[ssl_security_finding()], ProjectId(1))
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        MonitoringError::Store(StoreError::Unavailable(_))
    ));
    assert!(!error.is_retryable());
}

#[tokio::test]
async fn tasks_query_filters_by_project_and_status() {
    let (service, _store) = service_with_analysis(sample_analysis());

    service
        .analyze_and_create(&sample_document(), ProjectId(1))
        .await
        .unwrap();
    service
        .analyze_and_create(&sample_document(), ProjectId(2))
        .await
        .unwrap();

    let all = service.tasks(TaskFilter::new()).await.unwrap();
    assert_eq!(all.len(), 4);

    let project_one = service
        .tasks(TaskFilter::new().with_project(ProjectId(1)))
        .await
        .unwrap();
    assert_eq!(project_one.len(), 2);
    assert!(project_one.iter().all(|t| t.project_id == ProjectId(1)));

    let pending = service
        .tasks(TaskFilter::new().with_status(TaskStatus::Pending))
        .await
        .unwrap();
    assert_eq!(pending.len(), 4);

    let completed = service
        .tasks(
            TaskFilter::new()
                .with_project(ProjectId(1))
                .with_status(TaskStatus::Completed),
        )
        .await
        .unwrap();
    assert!(completed.is_empty());
}
