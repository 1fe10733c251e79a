//! Cross-task status cache for list and board groupings.

use crate::checklist::domain::{ChecklistItem, ChecklistStatus, aggregate_statuses};
use crate::task::domain::{Task, TaskId};
use std::collections::HashMap;

/// Caches each task's checklist items so list and board views can group
/// tasks by aggregate status without reloading every checklist.
///
/// The cache is a convenience for the grouping views; it is not part of
/// the core's correctness. Callers populate it from the store (or from a
/// just-saved session) and re-derive statuses from it on every render.
#[derive(Debug, Clone, Default)]
pub struct TaskStatusCache {
    checklists: HashMap<TaskId, Vec<ChecklistItem>>,
}

impl TaskStatusCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores (or replaces) the checklist items cached for a task.
    pub fn set_checklist(&mut self, task_id: TaskId, items: Vec<ChecklistItem>) {
        self.checklists.insert(task_id, items);
    }

    /// Returns the cached statuses for a task, empty when the task has no
    /// cached checklist.
    #[must_use]
    pub fn statuses_for(&self, task_id: TaskId) -> Vec<ChecklistStatus> {
        self.checklists
            .get(&task_id)
            .map(|items| items.iter().map(ChecklistItem::status).collect())
            .unwrap_or_default()
    }

    /// Returns the aggregate status for a task.
    ///
    /// A task with no cached checklist aggregates over an empty sequence
    /// and so reports `NotStarted`.
    #[must_use]
    pub fn status_of(&self, task_id: TaskId) -> ChecklistStatus {
        aggregate_statuses(self.statuses_for(task_id))
    }

    /// Groups tasks into board columns, one per status in
    /// [`ChecklistStatus::ALL`] order.
    ///
    /// Every status yields a column even when empty, so the board layout
    /// is stable.
    #[must_use]
    pub fn board_columns<'a>(&self, tasks: &'a [Task]) -> Vec<(ChecklistStatus, Vec<&'a Task>)> {
        ChecklistStatus::ALL
            .iter()
            .map(|status| {
                let column = tasks
                    .iter()
                    .filter(|task| self.status_of(task.id()) == *status)
                    .collect();
                (*status, column)
            })
            .collect()
    }
}
