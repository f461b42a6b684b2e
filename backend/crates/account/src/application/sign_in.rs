//! Sign In Use Case
//!
//! Authenticates a user and issues a signed session token.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::AccountConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{session_token::SessionClaims, user_name::UserName};
use crate::error::{AccountError, AccountResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    pub user_name: String,
    pub full_name: String,
    /// Session expiry (Unix seconds)
    pub expires_at: i64,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AccountConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AccountConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Look up the user and compare the password.
    ///
    /// Unknown usernames and wrong passwords both yield
    /// `InvalidCredentials`.
    pub async fn authenticate(&self, user_name: &str, password: &str) -> AccountResult<User> {
        let user_name = UserName::parse(user_name)?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        if !user.verify_password(password) {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(user)
    }

    pub async fn execute(&self, input: SignInInput, now: DateTime<Utc>) -> AccountResult<SignInOutput> {
        let user = self.authenticate(&input.user_name, &input.password).await?;

        let claims = SessionClaims::new(user.user_name.clone(), now + self.config.session_ttl_chrono());
        let session_token = claims.sign(&self.config.session_secret);

        tracing::info!(user_name = %user.user_name, "User signed in");

        Ok(SignInOutput {
            session_token,
            user_name: user.user_name.into_inner(),
            full_name: user.full_name,
            expires_at: claims.expires_at,
        })
    }
}
