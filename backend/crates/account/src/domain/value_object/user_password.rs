//! User Password Value Object
//!
//! Passwords are stored exactly as submitted. There is no hashing here;
//! see DESIGN.md for the open question on password storage.

use std::fmt;

use platform::crypto::constant_time_eq;

/// Stored password
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(String);

impl UserPassword {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Exact comparison, constant-time in the password length
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.0.as_bytes(), candidate.as_bytes())
    }

    /// Value for database storage
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UserPassword(***)")
    }
}
