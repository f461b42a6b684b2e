//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the session gate.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AccountAppState;
pub use middleware::{AUTH_REQUIRED_HEADER, require_session};
pub use router::{account_router, account_router_generic};
