//! Error types for checklist domain parsing.

use thiserror::Error;

/// Error returned while parsing checklist statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown checklist status: {0}")]
pub struct ParseChecklistStatusError(pub String);
