//! Birthdate Value Object
//!
//! Birthdates arrive from the registration form as `YYYY-MM-DD` strings and
//! are stored verbatim; the digits feed into the derived username.

use chrono::NaiveDate;
use derive_more::Display;

use crate::error::{AccountError, AccountResult};

/// Accepted input format
const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// Validated birthdate string (`YYYY-MM-DD`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Birthdate(String);

impl Birthdate {
    /// Create a birthdate from form input
    pub fn new(value: impl Into<String>) -> AccountResult<Self> {
        let value = value.into().trim().to_string();

        // chrono accepts unpadded fields, so check the shape first
        let shape_ok = value.len() == 10
            && value
                .char_indices()
                .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() });

        if !shape_ok || NaiveDate::parse_from_str(&value, BIRTHDATE_FORMAT).is_err() {
            return Err(AccountError::InvalidForm(
                "Birthdate must be a valid date in YYYY-MM-DD format".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
