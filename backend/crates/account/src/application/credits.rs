//! Credit & Reward Queries
//!
//! Read side of the ledger used by the portal views.

use std::sync::Arc;

use crate::domain::entity::reward::Reward;
use crate::domain::repository::{CreditRepository, RewardRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::AccountResult;

/// Current balance of a user
pub struct GetBalanceUseCase<C>
where
    C: CreditRepository,
{
    credit_repo: Arc<C>,
}

impl<C> GetBalanceUseCase<C>
where
    C: CreditRepository,
{
    pub fn new(credit_repo: Arc<C>) -> Self {
        Self { credit_repo }
    }

    /// Balance in points; 0 when the user has no credit row
    pub async fn execute(&self, user_name: &UserName) -> AccountResult<i32> {
        Ok(self
            .credit_repo
            .find_credit(user_name)
            .await?
            .map(|credit| credit.points)
            .unwrap_or(0))
    }
}

/// Rewards earned by a user
pub struct ListRewardsUseCase<W>
where
    W: RewardRepository,
{
    reward_repo: Arc<W>,
}

impl<W> ListRewardsUseCase<W>
where
    W: RewardRepository,
{
    pub fn new(reward_repo: Arc<W>) -> Self {
        Self { reward_repo }
    }

    pub async fn execute(&self, user_name: &UserName) -> AccountResult<Vec<Reward>> {
        self.reward_repo.list_by_user_name(user_name).await
    }
}
