//! Domain model for the project portfolio.

mod error;
mod ids;
mod project;

pub use error::ProjectDomainError;
pub use ids::ProjectId;
pub use project::{PersistedProjectData, Project};
