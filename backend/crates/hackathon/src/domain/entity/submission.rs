//! Submission Entity
//!
//! One code entry by one user for one team. A user may submit any number
//! of entries; rows are never updated or deleted.

use account::domain::value_object::user_name::UserName;

use crate::domain::value_object::team_name::TeamName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Assigned by the store
    pub id: Option<i32>,
    pub user_name: UserName,
    pub team_name: TeamName,
    pub code: String,
}

impl Submission {
    pub fn new(user_name: UserName, team_name: TeamName, code: impl Into<String>) -> Self {
        Self {
            id: None,
            user_name,
            team_name,
            code: code.into(),
        }
    }
}
