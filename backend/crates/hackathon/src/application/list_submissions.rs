//! List Submissions Use Case

use std::sync::Arc;

use account::domain::value_object::user_name::UserName;

use crate::domain::entity::submission::Submission;
use crate::domain::repository::SubmissionRepository;
use crate::error::HackathonResult;

/// A user's own submissions
pub struct ListSubmissionsUseCase<S>
where
    S: SubmissionRepository,
{
    repo: Arc<S>,
}

impl<S> ListSubmissionsUseCase<S>
where
    S: SubmissionRepository,
{
    pub fn new(repo: Arc<S>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_name: &UserName) -> HackathonResult<Vec<Submission>> {
        self.repo.list_by_user_name(user_name).await
    }
}
