//! Plumbline: offline-first construction-site task planning core.
//!
//! This crate provides the domain logic for a floor-plan task planner:
//! tasks pinned to positions on a floor-plan image, each owning a checklist
//! of statusable items, with a deterministic rule that folds checklist-item
//! statuses into one task-level status.
//!
//! # Architecture
//!
//! Plumbline follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the embedded document store
//! - **Adapters**: Concrete implementations of ports (in-memory store)
//!
//! # Modules
//!
//! - [`task`]: Task placement, title editing, and per-user lookup
//! - [`checklist`]: Checklist items, status aggregation, and edit sessions

pub mod checklist;
pub mod task;
