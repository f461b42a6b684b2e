//! Application Error
//!
//! [`AppError`] は HTTP 境界で使う唯一のエラー型。`AccountError` や
//! `HackathonError` はここに変換され、RFC 7807 の Problem Details として
//! クライアントへ返る。
//!
//! ```rust
//! use kernel::error::{app_error::AppError, kind::ErrorKind};
//!
//! let err = AppError::new(ErrorKind::Conflict, "Team name already exists")
//!     .with_action("Please choose another team name");
//! assert_eq!(err.status_code(), 409);
//! assert_eq!(err.problem().detail, "Team name already exists");
//! ```

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde::Serialize;

use super::kind::ErrorKind;

type BoxedSource = Box<dyn Error + Send + Sync + 'static>;

/// Unified error: a kind, a user-facing message and an optional hint
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
    /// Logged, never serialized
    source: Option<BoxedSource>,
}

pub type AppResult<T> = Result<T, AppError>;

/// RFC 7807 response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails<'a> {
    #[serde(rename = "type")]
    pub problem_type: &'static str,
    pub title: &'static str,
    pub status: u16,
    pub detail: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'a str>,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    /// 500 with a message that is safe to show
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// What the user should do next (e.g. re-enter the form)
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Body sent to the client
    pub fn problem(&self) -> ProblemDetails<'_> {
        ProblemDetails {
            problem_type: "about:blank",
            title: self.kind.title(),
            status: self.kind.status_code(),
            detail: &self.message,
            action: self.action(),
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("action", &self.action)
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}
