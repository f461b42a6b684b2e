//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{credit::Credit, reward::Reward, user::User};
pub use repository::{AccountStore, CreditRepository, RewardRepository, UserRepository};
