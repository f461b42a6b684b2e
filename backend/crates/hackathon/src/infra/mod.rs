//! Infrastructure Layer

pub mod memory;
pub mod postgres;

pub use memory::MemorySubmissionRepository;
pub use postgres::PgSubmissionRepository;
