//! User Name Value Object
//!
//! ユーザー名はユーザーが選ぶものではなく、氏名と生年月日から導出される。
//!
//! ## 導出規則
//! - 氏名を小文字化し、空白文字（U+0020）をすべて除去
//! - 生年月日からハイフンを除去し、先頭 4 桁（生年）を連結
//!
//! `Alice Smith` + `2005-03-14` → `alicesmith2005`
//!
//! 同姓同名・同じ生年の二人は同じユーザー名になるため、
//! 登録時の重複は上書きせず `DuplicateUsername` として扱う。

use derive_more::Display;

use crate::domain::value_object::birthdate::Birthdate;
use crate::error::{AccountError, AccountResult};

/// Number of birthdate digits appended to the name (the birth year)
pub const BIRTHDATE_DIGITS_IN_USER_NAME: usize = 4;

/// Column width of `users.username`
pub const USER_NAME_MAX_LENGTH: usize = 80;

/// Derive a username from a full name and a `YYYY-MM-DD` birthdate.
///
/// Pure and deterministic: identical inputs always give identical output.
pub fn derive_user_name(full_name: &str, birthdate: &str) -> String {
    let name_part = full_name.to_lowercase().replace(' ', "");
    let date_part: String = birthdate
        .replace('-', "")
        .chars()
        .take(BIRTHDATE_DIGITS_IN_USER_NAME)
        .collect();

    name_part + &date_part
}

/// Username (natural primary key of a user)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct UserName(String);

impl UserName {
    /// Derive the username for a registrant
    pub fn derive(full_name: &str, birthdate: &Birthdate) -> AccountResult<Self> {
        let derived = derive_user_name(full_name, birthdate.as_str());

        if derived.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AccountError::InvalidForm(format!(
                "Full name is too long (username must be at most {} characters)",
                USER_NAME_MAX_LENGTH
            )));
        }

        Ok(Self(derived))
    }

    /// Parse a username typed into the login form (looked up verbatim)
    pub fn parse(value: impl Into<String>) -> AccountResult<Self> {
        let value = value.into();
        if value.is_empty() || value.chars().count() > USER_NAME_MAX_LENGTH {
            return Err(AccountError::InvalidCredentials);
        }
        Ok(Self(value))
    }

    /// Create from database value or a verified session token
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
