//! API DTOs

use serde::{Deserialize, Serialize};

use crate::domain::entity::submission::Submission;

/// Submission request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitRequest {
    #[serde(alias = "team_name")]
    pub team_name: String,
    pub code: String,
}

/// One submission as shown to its author
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDto {
    pub id: Option<i32>,
    pub team_name: String,
    pub code: String,
}

impl From<Submission> for SubmissionDto {
    fn from(submission: Submission) -> Self {
        Self {
            id: submission.id,
            team_name: submission.team_name.as_str().to_string(),
            code: submission.code,
        }
    }
}

/// Hackathon page data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonResponse {
    pub username: String,
    pub full_name: String,
    pub credits: i32,
    pub submissions: Vec<SubmissionDto>,
}
