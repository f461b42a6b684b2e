//! Hackathon Error Types

use account::AccountError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Hackathon-specific result type alias
pub type HackathonResult<T> = Result<T, HackathonError>;

/// Hackathon-specific error variants
#[derive(Debug, Error)]
pub enum HackathonError {
    /// Team name is already taken
    #[error("Team name already exists")]
    DuplicateTeam,

    /// Submission form is incomplete or malformed
    #[error("Invalid form: {0}")]
    InvalidForm(String),

    /// Failure while reading the submitter's account
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Storage failure; the surrounding transaction has been rolled back
    #[error("Storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

impl HackathonError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            HackathonError::DuplicateTeam => StatusCode::CONFLICT,
            HackathonError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            HackathonError::Account(e) => e.status_code(),
            HackathonError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            HackathonError::DuplicateTeam => ErrorKind::Conflict,
            HackathonError::InvalidForm(_) => ErrorKind::BadRequest,
            HackathonError::Account(e) => e.kind(),
            HackathonError::Storage(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            HackathonError::DuplicateTeam => AppError::new(self.kind(), self.to_string())
                .with_action("Please choose another team name"),
            HackathonError::Account(e) => e.to_app_error(),
            HackathonError::Storage(_) => AppError::new(self.kind(), "Submission failed")
                .with_action("Please try again"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            HackathonError::Storage(e) => {
                tracing::error!(error = %e, "Hackathon storage failure");
            }
            HackathonError::DuplicateTeam => {
                tracing::warn!("Submission rejected: team name already exists");
            }
            _ => {
                tracing::debug!(error = %self, "Hackathon error");
            }
        }
    }
}

impl IntoResponse for HackathonError {
    fn into_response(self) -> Response {
        match self {
            HackathonError::Account(e) => e.into_response(),
            other => {
                other.log();
                other.to_app_error().into_response()
            }
        }
    }
}

impl From<HackathonError> for AppError {
    fn from(err: HackathonError) -> Self {
        err.to_app_error()
    }
}
