//! Platform
//!
//! Technical building blocks with no domain knowledge: HMAC-signed values
//! for the session cookie and Set-Cookie / Cookie header handling.

pub mod cookie;
pub mod crypto;
