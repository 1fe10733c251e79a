//! Checklist management for Plumbline.
//!
//! Every task owns a checklist of statusable items. This module holds the
//! two pieces of real business logic in the planner: the deterministic
//! aggregation of checklist-item statuses into one task-level status, and
//! the edit session that tracks in-memory checklist edits, pending
//! deletions, and dirty items before they are committed to the document
//! store. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
