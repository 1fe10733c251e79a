//! Application services for checklist editing and status grouping.

mod board;
mod editing;

pub use board::TaskStatusCache;
pub use editing::{ChecklistEditingError, ChecklistEditingResult, ChecklistEditingService};
