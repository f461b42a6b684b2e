//! Value Object Module

pub mod birthdate;
pub mod session_token;
pub mod user_name;
pub mod user_password;
