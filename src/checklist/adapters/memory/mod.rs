//! In-memory checklist storage.

mod checklist;

pub use checklist::InMemoryChecklistRepository;
