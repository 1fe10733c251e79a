//! Service layer for task placement, renaming, and status derivation.

use crate::checklist::{
    domain::{ChecklistItem, ChecklistStatus, aggregate_statuses},
    ports::{ChecklistRepository, ChecklistRepositoryError},
};
use crate::task::{
    domain::{PinPosition, Task, TaskId, UserId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for placing a task on the floor plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceTaskRequest {
    user_id: UserId,
    position: PinPosition,
    title: Option<String>,
}

impl PlaceTaskRequest {
    /// Creates a placement request for a pin position.
    #[must_use]
    pub const fn new(user_id: UserId, position: PinPosition) -> Self {
        Self {
            user_id,
            position,
            title: None,
        }
    }

    /// Sets an explicit title instead of the auto-numbered default.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Service-level errors for task planner operations.
#[derive(Debug, Error)]
pub enum TaskPlannerError {
    /// Task repository operation failed.
    #[error(transparent)]
    Task(#[from] TaskRepositoryError),
    /// Checklist repository operation failed.
    #[error(transparent)]
    Checklist(#[from] ChecklistRepositoryError),
}

/// Result type for task planner service operations.
pub type TaskPlannerResult<T> = Result<T, TaskPlannerError>;

/// Task planning orchestration service.
#[derive(Clone)]
pub struct TaskPlannerService<T, C, K>
where
    T: TaskRepository,
    C: ChecklistRepository,
    K: Clock + Send + Sync,
{
    tasks: Arc<T>,
    checklists: Arc<C>,
    clock: Arc<K>,
}

impl<T, C, K> TaskPlannerService<T, C, K>
where
    T: TaskRepository,
    C: ChecklistRepository,
    K: Clock + Send + Sync,
{
    /// Creates a new task planner service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, checklists: Arc<C>, clock: Arc<K>) -> Self {
        Self {
            tasks,
            checklists,
            clock,
        }
    }

    /// Places a task on the floor plan and seeds its default checklist.
    ///
    /// When the request carries no title, the task is auto-numbered
    /// `Task {n}` from the user's current task count.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPlannerError`] when storing the task or seeding its
    /// checklist fails.
    pub async fn place_task(&self, request: PlaceTaskRequest) -> TaskPlannerResult<Task> {
        let title = match request.title {
            Some(title) => title,
            None => {
                let existing = self.tasks.find_by_user(request.user_id).await?;
                format!("Task {}", existing.len().saturating_add(1))
            }
        };

        let task = Task::place(request.user_id, title, request.position, &*self.clock);
        self.tasks.store(&task).await?;

        let seed = ChecklistItem::default_set(task.id());
        self.checklists.bulk_insert(&seed).await?;

        info!(task_id = %task.id(), "placed task with default checklist");
        Ok(task)
    }

    /// Renames a task and persists the new title.
    ///
    /// The title is trimmed first. An empty result abandons the edit and
    /// an unknown task identifier is tolerated; both return `None` with
    /// nothing persisted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPlannerError::Task`] when the lookup or update
    /// fails.
    pub async fn rename_task(
        &self,
        task_id: TaskId,
        title: &str,
    ) -> TaskPlannerResult<Option<Task>> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            debug!(%task_id, "rename abandoned: empty title");
            return Ok(None);
        }

        let Some(mut task) = self.tasks.find_by_id(task_id).await? else {
            debug!(%task_id, "rename ignored: task not found");
            return Ok(None);
        };

        task.set_title(trimmed);
        self.tasks.update(&task).await?;
        Ok(Some(task))
    }

    /// Deletes a task together with its checklist.
    ///
    /// Items are removed from the checklist store in the same pass, so no
    /// orphaned checklist survives the task. An unknown task identifier is
    /// tolerated and removes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPlannerError`] when removing the task or its
    /// checklist items fails.
    pub async fn delete_task(&self, task_id: TaskId) -> TaskPlannerResult<()> {
        self.tasks.remove(task_id).await?;

        let items = self.checklists.find_by_task(task_id).await?;
        if !items.is_empty() {
            let ids: Vec<_> = items.iter().map(ChecklistItem::id).collect();
            self.checklists.remove_by_ids(&ids).await?;
        }

        info!(%task_id, "deleted task and its checklist");
        Ok(())
    }

    /// Returns all tasks belonging to the given user, in placement order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPlannerError::Task`] when the lookup fails.
    pub async fn tasks_for_user(&self, user_id: UserId) -> TaskPlannerResult<Vec<Task>> {
        Ok(self.tasks.find_by_user(user_id).await?)
    }

    /// Derives the task's current status from its persisted checklist.
    ///
    /// A task with no checklist items reports `NotStarted`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskPlannerError::Checklist`] when the checklist lookup
    /// fails.
    pub async fn task_status(&self, task_id: TaskId) -> TaskPlannerResult<ChecklistStatus> {
        let items = self.checklists.find_by_task(task_id).await?;
        Ok(aggregate_statuses(
            items.iter().map(ChecklistItem::status),
        ))
    }
}
