//! In-memory edit session for one task's checklist.

use super::{ChecklistItem, ChecklistItemId, ChecklistStatus, NEW_ITEM_LABEL, aggregate_statuses};
use crate::task::domain::TaskId;

/// One checklist item inside the session, with its session-local dirty
/// flag.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SessionItem {
    item: ChecklistItem,
    is_updated: bool,
}

impl SessionItem {
    const fn clean(item: ChecklistItem) -> Self {
        Self {
            item,
            is_updated: false,
        }
    }

    const fn dirty(item: ChecklistItem) -> Self {
        Self {
            item,
            is_updated: true,
        }
    }
}

/// Transient editing context for the checklist of the task currently open
/// in the detail view.
///
/// The session exclusively owns its item collection and deleted-id list
/// for the duration of an edit; the document store owns the persisted
/// records between sessions. One session exists per open task, created by
/// the caller when the view opens and discarded when it closes.
///
/// Every operation is synchronous and total: an operation referencing an
/// unknown item identifier is a silent no-op, because identifiers are
/// minted internally and a stale identifier can only come from an
/// already-removed UI element.
#[derive(Debug, Clone, Default)]
pub struct ChecklistEditSession {
    items: Vec<SessionItem>,
    deleted_ids: Vec<ChecklistItemId>,
    editing_item_id: Option<ChecklistItemId>,
    active_dropdown: Option<ChecklistItemId>,
}

impl ChecklistEditSession {
    /// Creates an empty session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            deleted_ids: Vec::new(),
            editing_item_id: None,
            active_dropdown: None,
        }
    }

    /// Replaces the session contents with freshly loaded items.
    ///
    /// All items start clean, pending deletions are discarded, and any
    /// edit focus or open dropdown is cleared. Called once per task-open.
    pub fn load<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = ChecklistItem>,
    {
        self.items = items.into_iter().map(SessionItem::clean).collect();
        self.deleted_ids.clear();
        self.editing_item_id = None;
        self.active_dropdown = None;
    }

    /// Appends a new item with the placeholder label and `NotStarted`
    /// status, marks it dirty, and puts it straight into label-edit mode.
    ///
    /// Returns a clone of the created item so the caller can seed its
    /// transient edit buffer.
    pub fn add_item(&mut self, task_id: TaskId) -> ChecklistItem {
        let item = ChecklistItem::new(task_id, NEW_ITEM_LABEL, ChecklistStatus::NotStarted);
        self.editing_item_id = Some(item.id());
        self.active_dropdown = None;
        self.items.push(SessionItem::dirty(item.clone()));
        item
    }

    /// Sets the status of the given item and marks it dirty.
    ///
    /// Unknown identifiers are ignored. The status dropdown is closed
    /// either way.
    pub fn update_status(&mut self, id: ChecklistItemId, status: ChecklistStatus) {
        if let Some(entry) = self.items.iter_mut().find(|entry| entry.item.id() == id) {
            entry.item.set_status(status);
            entry.is_updated = true;
        }
        self.active_dropdown = None;
    }

    /// Puts the given item into label-edit mode and closes the dropdown.
    ///
    /// If another item was mid-edit, focus switches silently; the previous
    /// item's in-progress input is the caller's to save or discard.
    pub fn begin_label_edit(&mut self, id: ChecklistItemId) {
        self.editing_item_id = Some(id);
        self.active_dropdown = None;
    }

    /// Commits an edited label.
    ///
    /// The label is trimmed first; a non-empty result replaces the item's
    /// label and marks it dirty. Edit mode is left in every case — an
    /// empty or whitespace-only label abandons the edit without mutating
    /// the item.
    pub fn commit_label(&mut self, id: ChecklistItemId, label: &str) {
        let trimmed = label.trim();
        if !trimmed.is_empty() {
            if let Some(entry) = self.items.iter_mut().find(|entry| entry.item.id() == id) {
                entry.item.set_label(trimmed);
                entry.is_updated = true;
            }
        }
        self.editing_item_id = None;
    }

    /// Leaves label-edit mode without mutating any item.
    pub const fn cancel_label_edit(&mut self) {
        self.editing_item_id = None;
    }

    /// Removes the item from the session and records its identifier for
    /// deletion at save time.
    ///
    /// Physical deletion only happens when the caller persists the
    /// session. If the item was mid-edit, edit mode is implicitly exited.
    pub fn delete_item(&mut self, id: ChecklistItemId) {
        let before = self.items.len();
        self.items.retain(|entry| entry.item.id() != id);
        if self.items.len() < before {
            self.deleted_ids.push(id);
        }
        if self.editing_item_id == Some(id) {
            self.editing_item_id = None;
        }
        self.active_dropdown = None;
    }

    /// Opens the status dropdown for the given item, or closes it when it
    /// is already open for that item.
    ///
    /// Ignored while the item is in label-edit mode: edit mode and the
    /// status picker are mutually exclusive.
    pub fn toggle_dropdown(&mut self, id: ChecklistItemId) {
        if self.editing_item_id == Some(id) {
            return;
        }
        self.active_dropdown = if self.active_dropdown == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Closes any open status dropdown.
    pub const fn close_dropdown(&mut self) {
        self.active_dropdown = None;
    }

    /// Returns clones of every item created or mutated since load.
    ///
    /// This is the upsert half of the save diff; an untouched session
    /// yields an empty list.
    #[must_use]
    pub fn updated_items(&self) -> Vec<ChecklistItem> {
        self.items
            .iter()
            .filter(|entry| entry.is_updated)
            .map(|entry| entry.item.clone())
            .collect()
    }

    /// Returns a copy of the identifiers marked for deletion.
    #[must_use]
    pub fn deleted_ids(&self) -> Vec<ChecklistItemId> {
        self.deleted_ids.clone()
    }

    /// Clears the deleted-id list after the deletions have been persisted,
    /// so a later save within the same session does not re-issue them.
    pub fn reset_deleted_ids(&mut self) {
        self.deleted_ids.clear();
    }

    /// Returns the statuses of the items currently in the session, in
    /// list order.
    #[must_use]
    pub fn statuses(&self) -> Vec<ChecklistStatus> {
        self.items
            .iter()
            .map(|entry| entry.item.status())
            .collect()
    }

    /// Returns the live task status for the session's current items.
    #[must_use]
    pub fn task_status(&self) -> ChecklistStatus {
        aggregate_statuses(self.statuses())
    }

    /// Iterates over the items currently in the session, in list order.
    pub fn items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.items.iter().map(|entry| &entry.item)
    }

    /// Returns the item currently in label-edit mode, if any.
    #[must_use]
    pub const fn editing_item_id(&self) -> Option<ChecklistItemId> {
        self.editing_item_id
    }

    /// Returns the item whose status dropdown is open, if any.
    #[must_use]
    pub const fn active_dropdown(&self) -> Option<ChecklistItemId> {
        self.active_dropdown
    }

    /// Returns the number of items in the session.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the session holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Counts the items currently `Done`, for the `(done/total)` header.
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.items
            .iter()
            .filter(|entry| entry.item.status() == ChecklistStatus::Done)
            .count()
    }
}
