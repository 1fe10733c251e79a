//! Repository port for checklist item persistence.

use crate::checklist::domain::{ChecklistItem, ChecklistItemId};
use crate::task::domain::TaskId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for checklist repository operations.
pub type ChecklistRepositoryResult<T> = Result<T, ChecklistRepositoryError>;

/// Checklist persistence contract against the embedded document store.
#[async_trait]
pub trait ChecklistRepository: Send + Sync {
    /// Stores a batch of new checklist items (the default seed for a
    /// freshly placed task).
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistRepositoryError::DuplicateItem`] when any item
    /// identifier already exists; no item from the batch is stored in that
    /// case.
    async fn bulk_insert(&self, items: &[ChecklistItem]) -> ChecklistRepositoryResult<()>;

    /// Inserts the item or replaces the stored record with the same
    /// identifier.
    async fn upsert(&self, item: &ChecklistItem) -> ChecklistRepositoryResult<()>;

    /// Returns all checklist items belonging to the given task, in
    /// insertion order.
    async fn find_by_task(&self, task_id: TaskId) -> ChecklistRepositoryResult<Vec<ChecklistItem>>;

    /// Removes every stored item whose identifier is in `ids`.
    ///
    /// Identifiers with no stored record are ignored, matching the
    /// semantics of a selector-based remove.
    async fn remove_by_ids(&self, ids: &[ChecklistItemId]) -> ChecklistRepositoryResult<()>;
}

/// Errors returned by checklist repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ChecklistRepositoryError {
    /// An item with the same identifier already exists.
    #[error("duplicate checklist item identifier: {0}")]
    DuplicateItem(ChecklistItemId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ChecklistRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
