//! Account Error Types
//!
//! This module provides account-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// Derived username is already registered
    #[error("Username already exists")]
    DuplicateUsername,

    /// Unknown username or wrong password (deliberately indistinguishable)
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Session refers to a user that no longer exists
    #[error("User not found")]
    UserNotFound,

    /// Session token missing, forged or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Registration or login form is incomplete or malformed
    #[error("Invalid form: {0}")]
    InvalidForm(String),

    /// Storage failure; the surrounding transaction has been rolled back
    #[error("Storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

impl AccountError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::DuplicateUsername => StatusCode::CONFLICT,
            AccountError::InvalidCredentials | AccountError::SessionInvalid => {
                StatusCode::UNAUTHORIZED
            }
            AccountError::UserNotFound => StatusCode::NOT_FOUND,
            AccountError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            AccountError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::DuplicateUsername => ErrorKind::Conflict,
            AccountError::InvalidCredentials | AccountError::SessionInvalid => {
                ErrorKind::Unauthorized
            }
            AccountError::UserNotFound => ErrorKind::NotFound,
            AccountError::InvalidForm(_) => ErrorKind::BadRequest,
            AccountError::Storage(_) => ErrorKind::InternalServerError,
        }
    }

    /// Whether the gate should send the client back to the login page
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            AccountError::SessionInvalid | AccountError::UserNotFound
        )
    }

    /// Convert to AppError
    ///
    /// Storage details never leave the process; they are logged instead.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AccountError::DuplicateUsername => AppError::new(self.kind(), self.to_string())
                .with_action("Please check your details and try again"),
            AccountError::Storage(_) => AppError::new(self.kind(), "Something went wrong")
                .with_action("Please try again"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Storage(e) => {
                tracing::error!(error = %e, "Account storage failure");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountError::DuplicateUsername => {
                tracing::warn!("Registration rejected: username already exists");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        err.to_app_error()
    }
}
