//! Check Session Use Case
//!
//! The session gate: resolves a session token to an existing user and
//! applies the credit accrual rule for that user at the request time.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::clock::to_epoch_seconds;

use crate::application::config::AccountConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::{CreditRepository, UserRepository};
use crate::domain::value_object::{session_token::SessionClaims, user_name::UserName};
use crate::error::{AccountError, AccountResult};

/// Request-scoped identity handed to protected views
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user: User,
    /// Wall-clock time of the request
    pub now: DateTime<Utc>,
}

impl SessionContext {
    pub fn user_name(&self) -> &UserName {
        &self.user.user_name
    }
}

/// Check session use case
pub struct CheckSessionUseCase<U, C>
where
    U: UserRepository,
    C: CreditRepository,
{
    user_repo: Arc<U>,
    credit_repo: Arc<C>,
    config: Arc<AccountConfig>,
}

impl<U, C> CheckSessionUseCase<U, C>
where
    U: UserRepository,
    C: CreditRepository,
{
    pub fn new(user_repo: Arc<U>, credit_repo: Arc<C>, config: Arc<AccountConfig>) -> Self {
        Self {
            user_repo,
            credit_repo,
            config,
        }
    }

    /// Resolve the session and accrue credit.
    ///
    /// Fails with `SessionInvalid` when the token is absent, forged or
    /// expired, and with `UserNotFound` when it names a deleted user.
    pub async fn execute(
        &self,
        session_token: Option<&str>,
        now: DateTime<Utc>,
    ) -> AccountResult<SessionContext> {
        let token = session_token.ok_or(AccountError::SessionInvalid)?;
        let claims = SessionClaims::verify(token, &self.config.session_secret, now)?;

        let user = self
            .user_repo
            .find_by_user_name(&claims.user_name)
            .await?
            .ok_or(AccountError::UserNotFound)?;

        let accrued = self
            .credit_repo
            .accrue(
                &user.user_name,
                to_epoch_seconds(now),
                self.config.accrual_interval_secs(),
            )
            .await?;

        if accrued {
            tracing::debug!(user_name = %user.user_name, "Credit accrued");
        }

        Ok(SessionContext { user, now })
    }
}
