//! Reward Entity
//!
//! Append-only log of vouchers and badges a user has earned.

use crate::domain::value_object::user_name::UserName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reward {
    /// Assigned by the store on append
    pub id: Option<i32>,
    pub user_name: UserName,
    pub reward_type: String,
    pub description: String,
    pub date_earned: String,
}

impl Reward {
    pub fn new(
        user_name: UserName,
        reward_type: impl Into<String>,
        description: impl Into<String>,
        date_earned: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            user_name,
            reward_type: reward_type.into(),
            description: description.into(),
            date_earned: date_earned.into(),
        }
    }
}
