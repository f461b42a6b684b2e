//! Entity Module

pub mod submission;
pub mod team;
