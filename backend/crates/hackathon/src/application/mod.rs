//! Application Layer

pub mod list_submissions;
pub mod submit_entry;

// Re-exports
pub use list_submissions::ListSubmissionsUseCase;
pub use submit_entry::{SubmitEntryInput, SubmitEntryUseCase};
