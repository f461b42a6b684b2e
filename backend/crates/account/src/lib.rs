//! Account Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Users, credit ledger, rewards, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router, session gate
//!
//! ## Features
//! - Registration with a username derived from name and birth year
//! - Sign in / sign out with a signed session cookie
//! - Session gate that accrues one credit per interval of activity
//! - Read-only portal views (home, profile, credits, vouchers)
//!
//! ## Session Model
//! - Stateless HMAC-SHA256 signed token carrying username and expiry
//! - Gate failures redirect to the login page
//! - Accrual check-and-increment is a single atomic store operation

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AccountConfig;
pub use application::SessionContext;
pub use error::{AccountError, AccountResult};
pub use infra::{MemoryAccountRepository, PgAccountRepository};
pub use presentation::handlers::AccountAppState;
pub use presentation::router::{account_router, account_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
