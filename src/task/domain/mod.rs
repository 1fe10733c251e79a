//! Domain model for floor-plan tasks.
//!
//! The task domain models task placement on the floor plan and title
//! editing while keeping all infrastructure concerns outside of the domain
//! boundary. Task status is deliberately not stored here: it is derived on
//! demand from the task's checklist via the checklist domain.

mod ids;
mod pin;
mod task;

pub use ids::{TaskId, UserId};
pub use pin::PinPosition;
pub use task::{PersistedTaskData, Task};
