//! User Entity
//!
//! A registered student. The username is derived at registration and never
//! changes afterwards; there are no update paths for users.

use crate::domain::value_object::{
    birthdate::Birthdate, user_name::UserName, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Derived username (primary key)
    pub user_name: UserName,
    pub full_name: String,
    pub school_name: String,
    pub class_level: String,
    /// Stored as submitted
    pub password: UserPassword,
    pub phone_no: String,
    pub email: String,
    pub birthdate: Birthdate,
    pub country: String,
    pub state: String,
    pub city: String,
    pub address: String,
}

impl User {
    /// Check a login password
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password.matches(candidate)
    }
}
