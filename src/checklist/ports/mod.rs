//! Port contracts for checklist persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by checklist
//! services.

pub mod repository;

pub use repository::{ChecklistRepository, ChecklistRepositoryError, ChecklistRepositoryResult};
