//! Configuration: path resolution and project metadata

pub mod paths;
pub mod project;

pub use paths::Paths;
pub use project::{ProjectInfo, TeamMember};
