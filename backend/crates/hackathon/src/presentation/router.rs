//! Hackathon Router

use account::domain::repository::AccountStore;
use account::infra::PgAccountRepository;
use account::presentation::{AccountAppState, require_session};
use axum::{Router, middleware, routing::get};

use crate::domain::repository::HackathonStore;
use crate::infra::postgres::PgSubmissionRepository;
use crate::presentation::handlers::{self, HackathonAppState};

/// Create the Hackathon router with PostgreSQL repositories
pub fn hackathon_router(
    account: AccountAppState<PgAccountRepository>,
    repo: PgSubmissionRepository,
) -> Router {
    hackathon_router_generic(account, repo)
}

/// Create a generic Hackathon router for any repository implementation
///
/// Every route sits behind the account session gate.
pub fn hackathon_router_generic<A, S>(account: AccountAppState<A>, repo: S) -> Router
where
    A: AccountStore,
    S: HackathonStore,
{
    let state = HackathonAppState::new(account.clone(), repo);

    Router::new()
        .route(
            "/",
            get(handlers::overview::<A, S>).post(handlers::submit::<A, S>),
        )
        .route_layer(middleware::from_fn_with_state(account, require_session::<A>))
        .with_state(state)
}
