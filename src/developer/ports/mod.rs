//! Port contracts for the developer directory.
//!
//! Ports define infrastructure-agnostic interfaces used by directory
//! services.

pub mod repository;

pub use repository::{DeveloperRepository, DeveloperRepositoryError, DeveloperRepositoryResult};
