//! In-Memory Repository Implementation
//!
//! Used when no database is configured and in tests. A single mutex guards
//! all maps, so each operation is atomic with respect to the others.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::entity::{credit::Credit, reward::Reward, user::User};
use crate::domain::repository::{CreditRepository, RewardRepository, UserRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AccountError, AccountResult};

#[derive(Default)]
struct State {
    users: HashMap<UserName, User>,
    credits: HashMap<UserName, Credit>,
    rewards: Vec<Reward>,
    next_reward_id: i32,
}

/// In-memory account repository
#[derive(Clone, Default)]
pub struct MemoryAccountRepository {
    state: Arc<Mutex<State>>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a user (and their credit row); simulates an account deleted
    /// while a session is still alive.
    #[cfg(test)]
    pub async fn remove_user(&self, user_name: &UserName) -> bool {
        let mut state = self.state.lock().await;
        state.credits.remove(user_name);
        state.users.remove(user_name).is_some()
    }

    /// Remove only the credit row of a user
    #[cfg(test)]
    pub async fn remove_credit(&self, user_name: &UserName) -> bool {
        self.state.lock().await.credits.remove(user_name).is_some()
    }

    #[cfg(test)]
    pub async fn user_count(&self) -> usize {
        self.state.lock().await.users.len()
    }
}

impl UserRepository for MemoryAccountRepository {
    async fn register(&self, user: &User, credit: &Credit) -> AccountResult<()> {
        let mut state = self.state.lock().await;

        if state.users.contains_key(&user.user_name) || state.credits.contains_key(&credit.user_name)
        {
            return Err(AccountError::DuplicateUsername);
        }

        state.users.insert(user.user_name.clone(), user.clone());
        state.credits.insert(credit.user_name.clone(), credit.clone());

        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AccountResult<Option<User>> {
        Ok(self.state.lock().await.users.get(user_name).cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AccountResult<bool> {
        Ok(self.state.lock().await.users.contains_key(user_name))
    }
}

impl CreditRepository for MemoryAccountRepository {
    async fn find_credit(&self, user_name: &UserName) -> AccountResult<Option<Credit>> {
        Ok(self.state.lock().await.credits.get(user_name).cloned())
    }

    async fn accrue(
        &self,
        user_name: &UserName,
        now: f64,
        interval_secs: f64,
    ) -> AccountResult<bool> {
        let mut state = self.state.lock().await;

        Ok(state
            .credits
            .get_mut(user_name)
            .is_some_and(|credit| credit.accrue(now, interval_secs)))
    }
}

impl RewardRepository for MemoryAccountRepository {
    async fn append(&self, reward: &Reward) -> AccountResult<Reward> {
        let mut state = self.state.lock().await;

        state.next_reward_id += 1;
        let stored = Reward {
            id: Some(state.next_reward_id),
            ..reward.clone()
        };
        state.rewards.push(stored.clone());

        Ok(stored)
    }

    async fn list_by_user_name(&self, user_name: &UserName) -> AccountResult<Vec<Reward>> {
        Ok(self
            .state
            .lock()
            .await
            .rewards
            .iter()
            .filter(|reward| &reward.user_name == user_name)
            .cloned()
            .collect())
    }
}
