//! Team Name Value Object
//!
//! チーム名はハッカソン全体で一意。先に登録したチームが名前を確保し、
//! 以降の同名の提出は `DuplicateTeam` で拒否される。

use derive_more::Display;

use crate::error::{HackathonError, HackathonResult};

/// Column width of `teams.team_name`
pub const TEAM_NAME_MAX_LENGTH: usize = 80;

/// Team name (natural primary key of a team)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct TeamName(String);

impl TeamName {
    /// Validate a team name from the submission form.
    ///
    /// Surrounding whitespace is dropped; the rest is kept verbatim.
    pub fn new(value: &str) -> HackathonResult<Self> {
        let value = value.trim();

        if value.is_empty() {
            return Err(HackathonError::InvalidForm(
                "Team name is required".to_string(),
            ));
        }
        if value.chars().count() > TEAM_NAME_MAX_LENGTH {
            return Err(HackathonError::InvalidForm(format!(
                "Team name must be at most {} characters",
                TEAM_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(value.to_string()))
    }

    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
