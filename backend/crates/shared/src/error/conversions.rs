//! Error Conversions
//!
//! `sqlx` and `serde_json` errors into [`AppError`], and [`AppError`] into an
//! axum response.

use super::app_error::AppError;
use super::kind::ErrorKind;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        let kind = if err.is_syntax() || err.is_data() || err.is_eof() {
            ErrorKind::BadRequest
        } else {
            ErrorKind::InternalServerError
        };
        AppError::new(kind, "Malformed JSON body").with_source(err)
    }
}

/// PostgreSQL `unique_violation`
#[cfg(feature = "sqlx")]
pub const PG_UNIQUE_VIOLATION: &str = "23505";

/// Whether a natural key (username, team name) is already taken
#[cfg(feature = "sqlx")]
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db_err| db_err.code())
        .is_some_and(|code| code == PG_UNIQUE_VIOLATION)
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let app_err = if is_unique_violation(&err) {
            AppError::new(ErrorKind::Conflict, "Already exists")
        } else {
            match &err {
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                    AppError::new(ErrorKind::ServiceUnavailable, "Database unavailable")
                        .with_action("Please try again later")
                }
                _ => AppError::internal("Something went wrong"),
            }
        };
        app_err.with_source(err)
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status_code())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/problem+json")],
            axum::Json(self.problem()),
        )
            .into_response()
    }
}
