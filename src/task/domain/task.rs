//! Task aggregate root.

use super::{PinPosition, TaskId, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root: a unit of work pinned to the floor plan.
///
/// A task owns zero or more checklist items (related by `task_id` in the
/// checklist domain) and has no stored status of its own: its status is
/// derived from the checklist on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    user_id: UserId,
    title: String,
    position: PinPosition,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning user.
    pub user_id: UserId,
    /// Persisted title.
    pub title: String,
    /// Persisted pin position.
    pub position: PinPosition,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Places a new task on the floor plan.
    #[must_use]
    pub fn place(
        user_id: UserId,
        title: impl Into<String>,
        position: PinPosition,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::new(),
            user_id,
            title: title.into(),
            position,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            title: data.title,
            position: data.position,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user's identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the pin position on the floor plan.
    #[must_use]
    pub const fn position(&self) -> PinPosition {
        self.position
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the task title.
    ///
    /// Validation (trimming, rejection of empty input) belongs to the
    /// planner service; the aggregate accepts the title as given.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }
}
