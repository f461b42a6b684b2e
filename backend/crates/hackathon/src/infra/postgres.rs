//! PostgreSQL Repository Implementation

use account::domain::value_object::user_name::UserName;
use sqlx::PgPool;

use crate::domain::entity::{submission::Submission, team::Team};
use crate::domain::repository::SubmissionRepository;
use crate::domain::value_object::team_name::TeamName;
use crate::error::{HackathonError, HackathonResult};

/// PostgreSQL-backed team and submission repository
#[derive(Clone)]
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SubmissionRepository for PgSubmissionRepository {
    async fn submit(&self, team: &Team, submission: &Submission) -> HackathonResult<Submission> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO teams (team_name, code, submission_time)
            VALUES ($1, $2, $3)
            ON CONFLICT (team_name) DO NOTHING
            "#,
        )
        .bind(team.team_name.as_str())
        .bind(&team.code)
        .bind(&team.submission_time)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if inserted == 0 {
            return Err(HackathonError::DuplicateTeam);
        }

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO hackathon_submissions (username, team_name, code)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(submission.user_name.as_str())
        .bind(submission.team_name.as_str())
        .bind(&submission.code)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Submission {
            id: Some(id),
            ..submission.clone()
        })
    }

    async fn find_team(&self, team_name: &TeamName) -> HackathonResult<Option<Team>> {
        let row = sqlx::query_as::<_, TeamRow>(
            "SELECT team_name, code, submission_time FROM teams WHERE team_name = $1",
        )
        .bind(team_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TeamRow::into_team))
    }

    async fn list_by_user_name(&self, user_name: &UserName) -> HackathonResult<Vec<Submission>> {
        let rows = sqlx::query_as::<_, SubmissionRow>(
            r#"
            SELECT id, username, team_name, code
            FROM hackathon_submissions
            WHERE username = $1
            ORDER BY id
            "#,
        )
        .bind(user_name.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SubmissionRow::into_submission).collect())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct TeamRow {
    team_name: String,
    code: Option<String>,
    submission_time: Option<String>,
}

impl TeamRow {
    fn into_team(self) -> Team {
        Team {
            team_name: TeamName::from_db(self.team_name),
            code: self.code.unwrap_or_default(),
            submission_time: self.submission_time.unwrap_or_default(),
        }
    }
}

#[derive(sqlx::FromRow)]
struct SubmissionRow {
    id: i32,
    username: String,
    team_name: String,
    code: String,
}

impl SubmissionRow {
    fn into_submission(self) -> Submission {
        Submission {
            id: Some(self.id),
            user_name: UserName::from_db(self.username),
            team_name: TeamName::from_db(self.team_name),
            code: self.code,
        }
    }
}
