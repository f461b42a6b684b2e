//! Account Router

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::domain::repository::AccountStore;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AccountAppState};
use crate::presentation::middleware::require_session;

/// Create the Account router with PostgreSQL repository
pub fn account_router(state: AccountAppState<PgAccountRepository>) -> Router {
    account_router_generic(state)
}

/// Create a generic Account router for any repository implementation
pub fn account_router_generic<R>(state: AccountAppState<R>) -> Router
where
    R: AccountStore,
{
    let protected = Router::new()
        .route("/home", get(handlers::home::<R>))
        .route("/courses", get(handlers::courses::<R>))
        .route("/projects", get(handlers::projects::<R>))
        .route("/profile", get(handlers::profile::<R>))
        .route("/credits", get(handlers::credits::<R>))
        .route("/vouchers", get(handlers::vouchers::<R>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session::<R>,
        ));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route(
            "/login",
            get(handlers::login_form).post(handlers::sign_in::<R>),
        )
        .route("/logout", post(handlers::sign_out::<R>))
        .merge(protected)
        .with_state(state)
}
