//! Domain model for checklists.
//!
//! The checklist domain models statusable checklist items, the precedence
//! rule folding their statuses into one task status, and the in-memory
//! edit session used while a task's detail view is open.

mod aggregate;
mod error;
mod ids;
mod item;
mod session;
mod status;

pub use aggregate::aggregate_statuses;
pub use error::ParseChecklistStatusError;
pub use ids::ChecklistItemId;
pub use item::{ChecklistItem, DEFAULT_CHECKLIST_LABELS, NEW_ITEM_LABEL};
pub use session::ChecklistEditSession;
pub use status::{ChecklistStatus, StatusDescriptor};
