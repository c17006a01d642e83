//! Durable task store boundary
//!
//! Task records are created in atomic batches and read back through simple
//! equality filters. The store is a capability trait so persistence backends
//! can be swapped without touching the synthesis pipeline; the in-memory
//! implementation in [`memory`] backs tests and single-process deployments.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod memory;

pub use memory::MemoryTaskStore;

use sysward_model::{ProjectId, TaskDraft, TaskId, TaskRecord, TaskStatus};

/// Task store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record with the given identity
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A record in the batch violated a storage constraint; nothing was persisted
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Backend unreachable or otherwise failing
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Equality filter over persisted task records
///
/// Both filters are optional; an empty filter matches everything. No
/// pagination or ordering beyond insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub project_id: Option<ProjectId>,
    pub status: Option<TaskStatus>,
}

impl TaskFilter {
    /// Create an empty filter matching all records
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one project
    #[inline]
    #[must_use]
    pub fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Restrict to one status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether a record satisfies both equality filters
    #[inline]
    #[must_use]
    pub fn matches(&self, record: &TaskRecord) -> bool {
        self.project_id.map_or(true, |p| p == record.project_id)
            && self.status.map_or(true, |s| s == record.status)
    }
}

/// Capability interface to the durable task store
#[async_trait::async_trait]
pub trait TaskStore: Send + Sync {
    /// Persist a batch of drafts atomically
    ///
    /// Either every draft becomes a record with a freshly assigned identity
    /// (output order matching input order) or nothing is persisted.
    ///
    /// # Errors
    /// `StoreError::Constraint` if any draft violates a storage constraint;
    /// no record is committed in that case.
    async fn insert_batch(&self, drafts: Vec<TaskDraft>) -> Result<Vec<TaskRecord>, StoreError>;

    /// List records matching the filter, in insertion order
    async fn list(&self, filter: TaskFilter) -> Result<Vec<TaskRecord>, StoreError>;

    /// Fetch one record by identity
    async fn get(&self, id: TaskId) -> Result<TaskRecord, StoreError>;
}
