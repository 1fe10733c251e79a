//! Service layer bridging edit sessions and the document store.

use crate::checklist::{
    domain::ChecklistEditSession,
    ports::{ChecklistRepository, ChecklistRepositoryError},
};
use crate::task::domain::TaskId;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Service-level errors for checklist editing operations.
#[derive(Debug, Error)]
pub enum ChecklistEditingError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ChecklistRepositoryError),
}

/// Result type for checklist editing service operations.
pub type ChecklistEditingResult<T> = Result<T, ChecklistEditingError>;

/// Loads checklists into edit sessions and persists their net changes.
#[derive(Clone)]
pub struct ChecklistEditingService<R>
where
    R: ChecklistRepository,
{
    repository: Arc<R>,
}

impl<R> ChecklistEditingService<R>
where
    R: ChecklistRepository,
{
    /// Creates a new checklist editing service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Opens an edit session for the given task, loaded with its persisted
    /// checklist items.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistEditingError::Repository`] when the lookup
    /// fails.
    pub async fn open_session(
        &self,
        task_id: TaskId,
    ) -> ChecklistEditingResult<ChecklistEditSession> {
        let items = self.repository.find_by_task(task_id).await?;
        debug!(%task_id, items = items.len(), "opened checklist edit session");
        let mut session = ChecklistEditSession::new();
        session.load(items);
        Ok(session)
    }

    /// Persists the session's net changes: every dirty item is upserted
    /// and every pending deletion is removed, after which the session's
    /// deleted-id list is reset.
    ///
    /// Dirty flags are deliberately left set — a session is normally
    /// discarded once saved, and a repeated save only re-upserts the same
    /// records. In-memory state is not rolled back on a failed save.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistEditingError::Repository`] when an upsert or
    /// removal fails.
    pub async fn save_session(
        &self,
        session: &mut ChecklistEditSession,
    ) -> ChecklistEditingResult<()> {
        let updated = session.updated_items();
        for item in &updated {
            self.repository.upsert(item).await?;
        }

        let deleted = session.deleted_ids();
        if !deleted.is_empty() {
            self.repository.remove_by_ids(&deleted).await?;
        }
        session.reset_deleted_ids();

        debug!(
            upserted = updated.len(),
            removed = deleted.len(),
            "saved checklist edit session"
        );
        Ok(())
    }
}
