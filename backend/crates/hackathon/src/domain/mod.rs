//! Domain Layer
//!
//! Teams, submissions and the repository trait.

pub mod entity;
pub mod repository;
pub mod value_object;

pub use entity::{submission::Submission, team::Team};
pub use repository::{HackathonStore, SubmissionRepository};
pub use value_object::team_name::TeamName;
