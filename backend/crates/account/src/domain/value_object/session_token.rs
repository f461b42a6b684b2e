//! Session Token Value Object
//!
//! The session cookie carries the username and an expiry, signed with the
//! server's session secret:
//!
//! `base64url("<expires_at_unix>:<username>") "." base64url(HMAC-SHA256)`
//!
//! No server-side session table is needed; a token resolves to a user only
//! if the signature verifies, it has not expired and the user still exists.

use chrono::{DateTime, Utc};

use crate::domain::value_object::user_name::UserName;
use crate::error::{AccountError, AccountResult};

/// Verified contents of a session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub user_name: UserName,
    /// Expiry (Unix seconds)
    pub expires_at: i64,
}

impl SessionClaims {
    pub fn new(user_name: UserName, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_name,
            expires_at: expires_at.timestamp(),
        }
    }

    /// Encode and sign
    pub fn sign(&self, secret: &[u8; 32]) -> String {
        let payload = format!("{}:{}", self.expires_at, self.user_name.as_str());
        platform::crypto::sign_value(secret, payload.as_bytes())
    }

    /// Verify a token and return its claims
    pub fn verify(token: &str, secret: &[u8; 32], now: DateTime<Utc>) -> AccountResult<Self> {
        let payload = platform::crypto::verify_signed_value(secret, token)
            .map_err(|_| AccountError::SessionInvalid)?;
        let payload = String::from_utf8(payload).map_err(|_| AccountError::SessionInvalid)?;

        let (expires_at, user_name) = payload
            .split_once(':')
            .ok_or(AccountError::SessionInvalid)?;
        let expires_at: i64 = expires_at.parse().map_err(|_| AccountError::SessionInvalid)?;

        if user_name.is_empty() || now.timestamp() >= expires_at {
            return Err(AccountError::SessionInvalid);
        }

        Ok(Self {
            user_name: UserName::from_db(user_name),
            expires_at,
        })
    }
}
