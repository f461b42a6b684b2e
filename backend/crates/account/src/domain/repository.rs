//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Every write is a single transactional operation in the store; callers
//! never compose check-then-write sequences themselves.

use crate::domain::entity::{credit::Credit, reward::Reward, user::User};
use crate::domain::value_object::user_name::UserName;
use crate::error::AccountResult;

/// User (identity) repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user together with their opening credit row.
    ///
    /// Both rows are written or neither is. Fails with
    /// `AccountError::DuplicateUsername` when the username exists.
    async fn register(&self, user: &User, credit: &Credit) -> AccountResult<()>;

    /// Find user by username
    async fn find_by_user_name(&self, user_name: &UserName) -> AccountResult<Option<User>>;

    /// Check if username exists
    async fn exists_by_user_name(&self, user_name: &UserName) -> AccountResult<bool>;
}

/// Credit ledger repository trait
#[trait_variant::make(CreditRepository: Send)]
pub trait LocalCreditRepository {
    /// Find the credit row of a user
    async fn find_credit(&self, user_name: &UserName) -> AccountResult<Option<Credit>>;

    /// Atomically apply the accrual rule.
    ///
    /// Returns `true` when a point was granted. A user without a credit row
    /// is left untouched.
    async fn accrue(&self, user_name: &UserName, now: f64, interval_secs: f64)
    -> AccountResult<bool>;
}

/// Reward log repository trait
#[trait_variant::make(RewardRepository: Send)]
pub trait LocalRewardRepository {
    /// Append a reward; returns it with its assigned id
    async fn append(&self, reward: &Reward) -> AccountResult<Reward>;

    /// Rewards of a user, oldest first
    async fn list_by_user_name(&self, user_name: &UserName) -> AccountResult<Vec<Reward>>;
}

/// Everything the account routes need from one store
pub trait AccountStore:
    UserRepository + CreditRepository + RewardRepository + Clone + Send + Sync + 'static
{
}

impl<T> AccountStore for T where
    T: UserRepository + CreditRepository + RewardRepository + Clone + Send + Sync + 'static
{
}
