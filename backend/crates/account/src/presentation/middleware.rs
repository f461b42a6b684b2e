//! Session Gate Middleware
//!
//! Every protected route goes through [`require_session`]: the session
//! cookie is resolved to a user, credit accrues for that user, and the
//! resulting [`SessionContext`] is handed to the handler through request
//! extensions.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::application::{CheckSessionUseCase, SessionContext};
use crate::domain::repository::AccountStore;
use crate::presentation::handlers::AccountAppState;

/// Header set on redirects issued by the gate
pub const AUTH_REQUIRED_HEADER: &str = "X-Auth-Required";

/// Middleware that requires a valid session
///
/// Missing, forged or expired sessions and sessions naming a deleted user
/// are redirected to the login page. Storage failures surface as 500.
pub async fn require_session<R>(
    State(state): State<AccountAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: AccountStore,
{
    let token =
        platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);
    let now = state.clock.now();

    let use_case =
        CheckSessionUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    match use_case.execute(token.as_deref(), now).await {
        Ok(ctx) => {
            req.extensions_mut().insert::<SessionContext>(ctx);
            next.run(req).await
        }
        Err(e) if e.requires_login() => {
            tracing::debug!(path = %req.uri().path(), error = %e, "Session required");
            (
                [(AUTH_REQUIRED_HEADER, "true")],
                Redirect::to(&state.config.login_path),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}
