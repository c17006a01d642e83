//! In-memory task store
//!
//! Append-only vector behind a mutex, with identities assigned from an
//! atomic sequence. Batch inserts validate every draft before the first id
//! is assigned, so a rejected batch leaves no trace.

use crate::{StoreError, TaskFilter, TaskStore};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use sysward_model::{TaskDraft, TaskId, TaskRecord};

/// In-memory [`TaskStore`] implementation
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    records: Mutex<Vec<TaskRecord>>,
    next_id: AtomicI64,
}

impl MemoryTaskStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether the store holds no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    fn check_constraints(drafts: &[TaskDraft]) -> Result<(), StoreError> {
        for draft in drafts {
            if !draft.project_id.is_valid() {
                return Err(StoreError::Constraint(format!(
                    "project id {} is not a valid reference",
                    draft.project_id
                )));
            }
            if draft.estimated_hours < 0.0 {
                return Err(StoreError::Constraint(format!(
                    "estimated hours must be non-negative, got {}",
                    draft.estimated_hours
                )));
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TaskStore for MemoryTaskStore {
    async fn insert_batch(&self, drafts: Vec<TaskDraft>) -> Result<Vec<TaskRecord>, StoreError> {
        Self::check_constraints(&drafts)?;

        let created_at = chrono::Utc::now();
        let mut records = self.records.lock();

        // Ids are assigned under the lock so a batch is contiguous and no
        // other writer can interleave a partially applied batch.
        let inserted: Vec<TaskRecord> = drafts
            .into_iter()
            .map(|draft| {
                let id = TaskId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
                TaskRecord::from_draft(id, draft, created_at)
            })
            .collect();

        records.extend(inserted.iter().cloned());
        tracing::debug!(count = inserted.len(), "task batch persisted");
        Ok(inserted)
    }

    async fn list(&self, filter: TaskFilter) -> Result<Vec<TaskRecord>, StoreError> {
        let records = self.records.lock();
        Ok(records.iter().filter(|r| filter.matches(r)).cloned().collect())
    }

    async fn get(&self, id: TaskId) -> Result<TaskRecord, StoreError> {
        let records = self.records.lock();
        records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }
}
