//! Submit Entry Use Case
//!
//! Records a user's code entry and claims the team name.

use std::sync::Arc;

use account::domain::value_object::user_name::UserName;
use chrono::{DateTime, Utc};

use crate::domain::entity::{submission::Submission, team::Team};
use crate::domain::repository::SubmissionRepository;
use crate::domain::value_object::team_name::TeamName;
use crate::error::{HackathonError, HackathonResult};

/// Submission form
#[derive(Debug, Clone, Default)]
pub struct SubmitEntryInput {
    pub team_name: String,
    pub code: String,
}

/// Submit entry use case
pub struct SubmitEntryUseCase<S>
where
    S: SubmissionRepository,
{
    repo: Arc<S>,
}

impl<S> SubmitEntryUseCase<S>
where
    S: SubmissionRepository,
{
    pub fn new(repo: Arc<S>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        user_name: &UserName,
        input: SubmitEntryInput,
        now: DateTime<Utc>,
    ) -> HackathonResult<Submission> {
        let team_name = TeamName::new(&input.team_name)?;
        if input.code.trim().is_empty() {
            return Err(HackathonError::InvalidForm("Code is required".to_string()));
        }

        // Fast path; the store re-checks inside its transaction
        if self.repo.find_team(&team_name).await?.is_some() {
            return Err(HackathonError::DuplicateTeam);
        }

        let team = Team::new(team_name.clone(), input.code.clone(), now);
        let submission = Submission::new(user_name.clone(), team_name, input.code);

        let stored = self.repo.submit(&team, &submission).await?;

        tracing::info!(
            user_name = %user_name,
            team_name = %team.team_name,
            "Hackathon entry submitted"
        );

        Ok(stored)
    }
}
