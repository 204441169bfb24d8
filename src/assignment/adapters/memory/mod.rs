//! In-memory adapters for the assignment context.

mod backend;
mod confirm;

pub use backend::InMemoryAssignmentBackend;
pub use confirm::StaticPrompt;
