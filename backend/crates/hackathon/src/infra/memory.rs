//! In-Memory Repository Implementation

use std::collections::HashMap;
use std::sync::Arc;

use account::domain::value_object::user_name::UserName;
use tokio::sync::Mutex;

use crate::domain::entity::{submission::Submission, team::Team};
use crate::domain::repository::SubmissionRepository;
use crate::domain::value_object::team_name::TeamName;
use crate::error::{HackathonError, HackathonResult};

#[derive(Default)]
struct State {
    teams: HashMap<TeamName, Team>,
    submissions: Vec<Submission>,
    next_submission_id: i32,
}

/// In-memory team and submission repository
#[derive(Clone, Default)]
pub struct MemorySubmissionRepository {
    state: Arc<Mutex<State>>,
}

impl MemorySubmissionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn submission_count(&self) -> usize {
        self.state.lock().await.submissions.len()
    }
}

impl SubmissionRepository for MemorySubmissionRepository {
    async fn submit(&self, team: &Team, submission: &Submission) -> HackathonResult<Submission> {
        let mut state = self.state.lock().await;

        if state.teams.contains_key(&team.team_name) {
            return Err(HackathonError::DuplicateTeam);
        }

        state.next_submission_id += 1;
        let stored = Submission {
            id: Some(state.next_submission_id),
            ..submission.clone()
        };

        state.teams.insert(team.team_name.clone(), team.clone());
        state.submissions.push(stored.clone());

        Ok(stored)
    }

    async fn find_team(&self, team_name: &TeamName) -> HackathonResult<Option<Team>> {
        Ok(self.state.lock().await.teams.get(team_name).cloned())
    }

    async fn list_by_user_name(&self, user_name: &UserName) -> HackathonResult<Vec<Submission>> {
        Ok(self
            .state
            .lock()
            .await
            .submissions
            .iter()
            .filter(|submission| &submission.user_name == user_name)
            .cloned()
            .collect())
    }
}
