//! Repository Traits

use account::domain::value_object::user_name::UserName;

use crate::domain::entity::{submission::Submission, team::Team};
use crate::domain::value_object::team_name::TeamName;
use crate::error::HackathonResult;

/// Team and submission repository trait
#[trait_variant::make(SubmissionRepository: Send)]
pub trait LocalSubmissionRepository {
    /// Create a team together with its submission.
    ///
    /// Both rows are written or neither is. Fails with
    /// `HackathonError::DuplicateTeam` when the team name is taken, in which
    /// case no submission is recorded.
    async fn submit(&self, team: &Team, submission: &Submission) -> HackathonResult<Submission>;

    /// Find a team by name
    async fn find_team(&self, team_name: &TeamName) -> HackathonResult<Option<Team>>;

    /// Submissions of a user, oldest first
    async fn list_by_user_name(&self, user_name: &UserName) -> HackathonResult<Vec<Submission>>;
}

/// Everything the hackathon routes need from one store
pub trait HackathonStore: SubmissionRepository + Clone + Send + Sync + 'static {}

impl<T> HackathonStore for T where T: SubmissionRepository + Clone + Send + Sync + 'static {}
