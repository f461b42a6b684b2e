//! Value Object Module

pub mod team_name;
