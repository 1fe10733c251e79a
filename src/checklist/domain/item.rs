//! Checklist item record and the default seed checklist.

use super::{ChecklistItemId, ChecklistStatus};
use crate::task::domain::TaskId;
use serde::{Deserialize, Serialize};

/// Labels seeded onto every newly placed task, all starting `NotStarted`.
pub const DEFAULT_CHECKLIST_LABELS: [&str; 5] = [
    "Site Survey",
    "Materials Delivered",
    "Work Started",
    "Inspection Scheduled",
    "Final Check",
];

/// Placeholder label for an item added during editing, shown until the
/// user commits their own.
pub const NEW_ITEM_LABEL: &str = "New Task";

/// One line of a task's checklist.
///
/// This is the persisted shape; the session-local dirty flag lives in
/// [`ChecklistEditSession`](super::ChecklistEditSession) and is never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    id: ChecklistItemId,
    task_id: TaskId,
    label: String,
    status: ChecklistStatus,
}

impl ChecklistItem {
    /// Creates a checklist item with a fresh identifier.
    #[must_use]
    pub fn new(task_id: TaskId, label: impl Into<String>, status: ChecklistStatus) -> Self {
        Self {
            id: ChecklistItemId::new(),
            task_id,
            label: label.into(),
            status,
        }
    }

    /// Reconstructs a checklist item from persisted storage.
    #[must_use]
    pub fn from_persisted(
        id: ChecklistItemId,
        task_id: TaskId,
        label: impl Into<String>,
        status: ChecklistStatus,
    ) -> Self {
        Self {
            id,
            task_id,
            label: label.into(),
            status,
        }
    }

    /// Builds the default checklist seeded when a task is placed.
    #[must_use]
    pub fn default_set(task_id: TaskId) -> Vec<Self> {
        DEFAULT_CHECKLIST_LABELS
            .iter()
            .map(|label| Self::new(task_id, *label, ChecklistStatus::NotStarted))
            .collect()
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> ChecklistItemId {
        self.id
    }

    /// Returns the owning task's identifier.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the item label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the item status.
    #[must_use]
    pub const fn status(&self) -> ChecklistStatus {
        self.status
    }

    /// Replaces the item label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Replaces the item status.
    pub const fn set_status(&mut self, status: ChecklistStatus) {
        self.status = status;
    }
}
