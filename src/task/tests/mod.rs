//! Unit tests for the task domain and planner service.
