//! Domain model for the developer directory.
//!
//! Developers are referenced by tasks as assignees. The directory keeps
//! infrastructure concerns outside of the domain boundary.

mod developer;
mod error;
mod ids;
mod name;

pub use developer::{Developer, PersistedDeveloperData};
pub use error::DeveloperDomainError;
pub use ids::DeveloperId;
pub use name::{EmailAddress, PersonName};
