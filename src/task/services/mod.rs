//! Application services for task placement and management.

mod planner;

pub use planner::{PlaceTaskRequest, TaskPlannerError, TaskPlannerResult, TaskPlannerService};
