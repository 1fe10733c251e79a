//! Task placement and management for Plumbline.
//!
//! A task is a unit of work pinned to a position on the floor plan. This
//! module covers placing tasks, renaming them, listing a user's tasks, and
//! deriving a task's status from its checklist. The module follows
//! hexagonal architecture:
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
