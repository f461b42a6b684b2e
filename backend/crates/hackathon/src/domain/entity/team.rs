//! Team Entity

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::value_object::team_name::TeamName;

/// A hackathon team; created by its first submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub team_name: TeamName,
    pub code: String,
    /// RFC 3339 timestamp of the submission that created the team
    pub submission_time: String,
}

impl Team {
    pub fn new(team_name: TeamName, code: impl Into<String>, submitted_at: DateTime<Utc>) -> Self {
        Self {
            team_name,
            code: code.into(),
            submission_time: submitted_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
