//! HTTP Handlers

use std::sync::Arc;

use account::application::{GetBalanceUseCase, SessionContext};
use account::domain::repository::AccountStore;
use account::presentation::AccountAppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::application::{ListSubmissionsUseCase, SubmitEntryInput, SubmitEntryUseCase};
use crate::domain::repository::HackathonStore;
use crate::error::HackathonResult;
use crate::presentation::dto::{HackathonResponse, SubmissionDto, SubmitRequest};

/// Hackathon handler state
///
/// Carries the account state as well: the balance shown on the page lives in
/// the account store and the same state drives the session gate.
#[derive(Clone)]
pub struct HackathonAppState<A, S>
where
    A: AccountStore,
    S: HackathonStore,
{
    pub account: AccountAppState<A>,
    pub repo: Arc<S>,
}

impl<A, S> HackathonAppState<A, S>
where
    A: AccountStore,
    S: HackathonStore,
{
    pub fn new(account: AccountAppState<A>, repo: S) -> Self {
        Self {
            account,
            repo: Arc::new(repo),
        }
    }
}

/// GET /api/hackathon
pub async fn overview<A, S>(
    State(state): State<HackathonAppState<A, S>>,
    Extension(ctx): Extension<SessionContext>,
) -> HackathonResult<Json<HackathonResponse>>
where
    A: AccountStore,
    S: HackathonStore,
{
    let credits = GetBalanceUseCase::new(state.account.repo.clone())
        .execute(ctx.user_name())
        .await?;
    let submissions = ListSubmissionsUseCase::new(state.repo.clone())
        .execute(ctx.user_name())
        .await?;

    Ok(Json(HackathonResponse {
        username: ctx.user_name().to_string(),
        full_name: ctx.user.full_name.clone(),
        credits,
        submissions: submissions.into_iter().map(SubmissionDto::from).collect(),
    }))
}

/// POST /api/hackathon
pub async fn submit<A, S>(
    State(state): State<HackathonAppState<A, S>>,
    Extension(ctx): Extension<SessionContext>,
    Json(req): Json<SubmitRequest>,
) -> HackathonResult<(StatusCode, Json<SubmissionDto>)>
where
    A: AccountStore,
    S: HackathonStore,
{
    let use_case = SubmitEntryUseCase::new(state.repo.clone());

    let input = SubmitEntryInput {
        team_name: req.team_name,
        code: req.code,
    };

    let submission = use_case.execute(ctx.user_name(), input, ctx.now).await?;

    Ok((StatusCode::CREATED, Json(SubmissionDto::from(submission))))
}
