//! Repository port for developer persistence and lookup.

use crate::developer::domain::{Developer, DeveloperId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for developer repository operations.
pub type DeveloperRepositoryResult<T> = Result<T, DeveloperRepositoryError>;

/// Developer persistence contract.
#[async_trait]
pub trait DeveloperRepository: Send + Sync {
    /// Stores a new developer.
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperRepositoryError::DuplicateDeveloper`] when the
    /// developer ID already exists.
    async fn store(&self, developer: &Developer) -> DeveloperRepositoryResult<()>;

    /// Persists changes to an existing developer (activation flag).
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperRepositoryError::NotFound`] when the developer
    /// does not exist.
    async fn update(&self, developer: &Developer) -> DeveloperRepositoryResult<()>;

    /// Finds a developer by identifier.
    ///
    /// Returns `None` when the developer does not exist.
    async fn find_by_id(&self, id: DeveloperId) -> DeveloperRepositoryResult<Option<Developer>>;

    /// Returns all developers with the active flag set.
    async fn list_active(&self) -> DeveloperRepositoryResult<Vec<Developer>>;

    /// Returns all developers regardless of activation state.
    async fn list_all(&self) -> DeveloperRepositoryResult<Vec<Developer>>;

    /// Deletes a developer outright.
    ///
    /// Referential integrity is enforced above this port: callers must
    /// ensure no task references the developer. The PostgreSQL adapter
    /// additionally maps foreign-key restrictions to
    /// [`DeveloperRepositoryError::ReferencedByTasks`].
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperRepositoryError::NotFound`] when the developer
    /// does not exist.
    async fn delete(&self, id: DeveloperId) -> DeveloperRepositoryResult<()>;
}

/// Errors returned by developer repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DeveloperRepositoryError {
    /// A developer with the same identifier already exists.
    #[error("duplicate developer identifier: {0}")]
    DuplicateDeveloper(DeveloperId),

    /// The developer was not found.
    #[error("developer not found: {0}")]
    NotFound(DeveloperId),

    /// The developer is still referenced by at least one task.
    #[error("developer {0} is still referenced by tasks")]
    ReferencedByTasks(DeveloperId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DeveloperRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
