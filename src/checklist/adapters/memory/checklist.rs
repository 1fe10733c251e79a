//! In-memory checklist repository standing in for the embedded document
//! store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::checklist::{
    domain::{ChecklistItem, ChecklistItemId},
    ports::{ChecklistRepository, ChecklistRepositoryError, ChecklistRepositoryResult},
};
use crate::task::domain::TaskId;

/// Thread-safe in-memory checklist repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChecklistRepository {
    state: Arc<RwLock<InMemoryChecklistState>>,
}

#[derive(Debug, Default)]
struct InMemoryChecklistState {
    items: HashMap<ChecklistItemId, ChecklistItem>,
    // Preserves insertion order per task, which the checklist view relies
    // on for stable item ordering.
    task_index: HashMap<TaskId, Vec<ChecklistItemId>>,
}

impl InMemoryChecklistRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn index_item(state: &mut InMemoryChecklistState, item: &ChecklistItem) {
    state
        .task_index
        .entry(item.task_id())
        .or_default()
        .push(item.id());
}

/// Removes an item ID from a task's index, cleaning up the entry if
/// empty.
fn remove_from_index(
    index: &mut HashMap<TaskId, Vec<ChecklistItemId>>,
    task_id: TaskId,
    item_id: ChecklistItemId,
) {
    if let Some(ids) = index.get_mut(&task_id) {
        ids.retain(|id| *id != item_id);
        if ids.is_empty() {
            index.remove(&task_id);
        }
    }
}

#[async_trait]
impl ChecklistRepository for InMemoryChecklistRepository {
    async fn bulk_insert(&self, items: &[ChecklistItem]) -> ChecklistRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ChecklistRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        // Validate the whole batch before storing any of it.
        for item in items {
            if state.items.contains_key(&item.id()) {
                return Err(ChecklistRepositoryError::DuplicateItem(item.id()));
            }
        }

        for item in items {
            index_item(&mut state, item);
            state.items.insert(item.id(), item.clone());
        }
        Ok(())
    }

    async fn upsert(&self, item: &ChecklistItem) -> ChecklistRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ChecklistRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if !state.items.contains_key(&item.id()) {
            index_item(&mut state, item);
        }
        state.items.insert(item.id(), item.clone());
        Ok(())
    }

    async fn find_by_task(&self, task_id: TaskId) -> ChecklistRepositoryResult<Vec<ChecklistItem>> {
        let state = self.state.read().map_err(|err| {
            ChecklistRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let items = state
            .task_index
            .get(&task_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.items.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(items)
    }

    async fn remove_by_ids(&self, ids: &[ChecklistItemId]) -> ChecklistRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ChecklistRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        for id in ids {
            if let Some(removed) = state.items.remove(id) {
                remove_from_index(&mut state.task_index, removed.task_id(), *id);
            }
        }
        Ok(())
    }
}
