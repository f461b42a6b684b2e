//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod credits;
pub mod register;
pub mod sign_in;

// Re-exports
pub use check_session::{CheckSessionUseCase, SessionContext};
pub use config::AccountConfig;
pub use credits::{GetBalanceUseCase, ListRewardsUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
