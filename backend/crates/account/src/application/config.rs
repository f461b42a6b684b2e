//! Application Configuration
//!
//! Configuration for the account application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;

use crate::domain::entity::credit::{DEFAULT_ACCRUAL_INTERVAL_SECS, STARTING_CREDITS};

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Sign-in route as mounted by the api server
pub const DEFAULT_LOGIN_PATH: &str = "/api/account/login";

/// Account application configuration
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session lifetime
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Where the session gate sends unauthenticated requests; either a
    /// path on this server or a frontend URL
    pub login_path: String,
    /// Balance granted at registration
    pub starting_credits: i32,
    /// Minimum time between two accrued points
    pub accrual_interval: Duration,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "portal_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            starting_credits: STARTING_CREDITS,
            accrual_interval: Duration::from_secs_f64(DEFAULT_ACCRUAL_INTERVAL_SECS),
        }
    }
}

impl AccountConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Accrual interval in seconds
    pub fn accrual_interval_secs(&self) -> f64 {
        self.accrual_interval.as_secs_f64()
    }

    /// Session TTL as a chrono duration
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or(chrono::Duration::weeks(1))
    }

    /// Cookie settings for the session cookie
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs()),
        }
    }
}
