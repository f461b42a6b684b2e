//! Entity Module

pub mod credit;
pub mod reward;
pub mod user;
