//! HTTP Handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use kernel::clock::Clock;

use crate::application::config::AccountConfig;
use crate::application::{
    GetBalanceUseCase, ListRewardsUseCase, RegisterInput, RegisterUseCase, SessionContext,
    SignInInput, SignInUseCase,
};
use crate::domain::repository::AccountStore;
use crate::error::AccountResult;
use crate::presentation::dto::{
    CreditsResponse, HomeResponse, LoginFormResponse, ProfileResponse, RegisterRequest,
    RegisterResponse, RewardDto, SignInRequest, SignInResponse, VouchersResponse,
};

/// Shared state for account handlers and the session gate
#[derive(Clone)]
pub struct AccountAppState<R>
where
    R: AccountStore,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountConfig>,
    pub clock: Arc<dyn Clock>,
}

impl<R> AccountAppState<R>
where
    R: AccountStore,
{
    pub fn new(repo: R, config: AccountConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
            clock,
        }
    }

    async fn balance(&self, ctx: &SessionContext) -> AccountResult<i32> {
        GetBalanceUseCase::new(self.repo.clone())
            .execute(ctx.user_name())
            .await
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/account/register
pub async fn register<R>(
    State(state): State<AccountAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AccountResult<(StatusCode, Json<RegisterResponse>)>
where
    R: AccountStore,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        full_name: req.full_name,
        school_name: req.school_name,
        class_level: req.class_level,
        password: req.password,
        phone_no: req.phone_no,
        email: req.email,
        birthdate: req.birthdate,
        country: req.country,
        state: req.state,
        city: req.city,
        address: req.address,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            username: output.user_name,
            credits: output.credits,
        }),
    ))
}

// ============================================================================
// Sign In / Sign Out
// ============================================================================

/// GET /api/account/login
///
/// Login entry point; the session gate redirects here.
pub async fn login_form() -> Json<LoginFormResponse> {
    Json(LoginFormResponse::default())
}

/// POST /api/account/login
pub async fn sign_in<R>(
    State(state): State<AccountAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: AccountStore,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignInInput {
        user_name: req.username,
        password: req.password,
    };

    let output = use_case.execute(input, state.clock.now()).await?;

    let cookie = state
        .config
        .session_cookie()
        .build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SignInResponse {
            username: output.user_name,
            full_name: output.full_name,
            expires_at: output.expires_at,
        }),
    ))
}

/// POST /api/account/logout
pub async fn sign_out<R>(State(state): State<AccountAppState<R>>) -> impl IntoResponse
where
    R: AccountStore,
{
    let cookie = state.config.session_cookie().build_delete_cookie();

    (StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)])
}

// ============================================================================
// Portal views (behind the session gate)
// ============================================================================

/// GET /api/account/home
pub async fn home<R>(
    State(state): State<AccountAppState<R>>,
    Extension(ctx): Extension<SessionContext>,
) -> AccountResult<Json<HomeResponse>>
where
    R: AccountStore,
{
    let credits = state.balance(&ctx).await?;
    Ok(Json(HomeResponse::new(&ctx.user, credits)))
}

/// GET /api/account/courses
pub async fn courses<R>(
    State(state): State<AccountAppState<R>>,
    Extension(ctx): Extension<SessionContext>,
) -> AccountResult<Json<HomeResponse>>
where
    R: AccountStore,
{
    home(State(state), Extension(ctx)).await
}

/// GET /api/account/projects
pub async fn projects<R>(
    State(state): State<AccountAppState<R>>,
    Extension(ctx): Extension<SessionContext>,
) -> AccountResult<Json<HomeResponse>>
where
    R: AccountStore,
{
    home(State(state), Extension(ctx)).await
}

/// GET /api/account/profile
pub async fn profile<R>(
    State(state): State<AccountAppState<R>>,
    Extension(ctx): Extension<SessionContext>,
) -> AccountResult<Json<ProfileResponse>>
where
    R: AccountStore,
{
    let credits = state.balance(&ctx).await?;
    Ok(Json(ProfileResponse::new(&ctx.user, credits)))
}

/// GET /api/account/credits
pub async fn credits<R>(
    State(state): State<AccountAppState<R>>,
    Extension(ctx): Extension<SessionContext>,
) -> AccountResult<Json<CreditsResponse>>
where
    R: AccountStore,
{
    let credits = state.balance(&ctx).await?;
    Ok(Json(CreditsResponse {
        username: ctx.user_name().to_string(),
        credits,
    }))
}

/// GET /api/account/vouchers
pub async fn vouchers<R>(
    State(state): State<AccountAppState<R>>,
    Extension(ctx): Extension<SessionContext>,
) -> AccountResult<Json<VouchersResponse>>
where
    R: AccountStore,
{
    let credits = state.balance(&ctx).await?;
    let rewards = ListRewardsUseCase::new(state.repo.clone())
        .execute(ctx.user_name())
        .await?;

    Ok(Json(VouchersResponse {
        home: HomeResponse::new(&ctx.user, credits),
        rewards: rewards.into_iter().map(RewardDto::from).collect(),
    }))
}
