//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::HackathonAppState;
pub use router::{hackathon_router, hackathon_router_generic};
