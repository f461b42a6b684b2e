//! Hackathon Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Teams, submissions, repository trait
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Team names are unique across the event; the first submission under a
//! name creates the team. All routes require a signed-in user and reuse the
//! account session gate.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{HackathonError, HackathonResult};
pub use infra::{MemorySubmissionRepository, PgSubmissionRepository};
pub use presentation::handlers::HackathonAppState;
pub use presentation::router::{hackathon_router, hackathon_router_generic};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
