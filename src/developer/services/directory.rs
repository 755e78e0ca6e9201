//! Service layer for developer registration and lifecycle.

use crate::developer::{
    domain::{Developer, DeveloperDomainError, DeveloperId, EmailAddress, PersonName},
    ports::{DeveloperRepository, DeveloperRepositoryError, DeveloperRepositoryResult},
};
use crate::error::ErrorClass;
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a new developer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterDeveloperRequest {
    first_name: String,
    last_name: String,
    email: String,
}

impl RegisterDeveloperRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

/// Service-level errors for developer directory operations.
#[derive(Debug, Error)]
pub enum DeveloperDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DeveloperDomainError),

    /// The developer is still assigned to tasks and cannot be removed.
    #[error("developer {id} is assigned to {task_count} task(s) and cannot be removed")]
    StillAssigned {
        /// Developer that removal was requested for.
        id: DeveloperId,
        /// Number of tasks referencing the developer.
        task_count: usize,
    },

    /// Developer repository operation failed.
    #[error(transparent)]
    Repository(#[from] DeveloperRepositoryError),

    /// Task reference lookup failed.
    #[error("task reference lookup failed: {0}")]
    TaskLookup(#[source] TaskRepositoryError),
}

impl DeveloperDirectoryError {
    /// Returns the user-facing outcome class of this error.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Domain(_) | Self::StillAssigned { .. } => ErrorClass::Validation,
            Self::Repository(DeveloperRepositoryError::NotFound(_)) => ErrorClass::NotFound,
            Self::Repository(_) | Self::TaskLookup(_) => ErrorClass::Unexpected,
        }
    }
}

/// Result type for developer directory service operations.
pub type DeveloperDirectoryResult<T> = Result<T, DeveloperDirectoryError>;

/// Developer registration and lifecycle orchestration service.
#[derive(Clone)]
pub struct DeveloperDirectoryService<R, T, C>
where
    R: DeveloperRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    developers: Arc<R>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<R, T, C> DeveloperDirectoryService<R, T, C>
where
    R: DeveloperRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new developer directory service.
    #[must_use]
    pub const fn new(developers: Arc<R>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            developers,
            tasks,
            clock,
        }
    }

    /// Registers a new active developer.
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperDirectoryError`] when name or email validation
    /// fails or the repository rejects persistence.
    pub async fn register(
        &self,
        request: RegisterDeveloperRequest,
    ) -> DeveloperDirectoryResult<Developer> {
        let name = PersonName::new(request.first_name, request.last_name)?;
        let email = EmailAddress::new(request.email)?;

        let developer = Developer::new(name, email, &*self.clock);
        self.developers.store(&developer).await?;
        tracing::info!(developer = %developer.id(), "developer registered");
        Ok(developer)
    }

    /// Finds a developer by identifier.
    ///
    /// Returns `Ok(None)` when no developer has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperDirectoryError::Repository`] when persistence
    /// lookup fails.
    pub async fn find_by_id(
        &self,
        id: DeveloperId,
    ) -> DeveloperDirectoryResult<Option<Developer>> {
        Ok(self.developers.find_by_id(id).await?)
    }

    /// Returns all active developers.
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperDirectoryError::Repository`] when persistence
    /// lookup fails.
    pub async fn list_active(&self) -> DeveloperDirectoryResult<Vec<Developer>> {
        Ok(self.developers.list_active().await?)
    }

    /// Returns all developers regardless of activation state.
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperDirectoryError::Repository`] when persistence
    /// lookup fails.
    pub async fn list_all(&self) -> DeveloperDirectoryResult<Vec<Developer>> {
        Ok(self.developers.list_all().await?)
    }

    /// Deactivates a developer, excluding them from active listings and
    /// from new task assignment.
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperDirectoryError::Repository`] when the developer
    /// is not found or persistence fails.
    pub async fn deactivate(&self, id: DeveloperId) -> DeveloperDirectoryResult<Developer> {
        let mut developer = self.find_by_id_or_error(id).await?;
        developer.deactivate();
        self.developers.update(&developer).await?;
        tracing::info!(developer = %id, "developer deactivated");
        Ok(developer)
    }

    /// Reactivates a developer.
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperDirectoryError::Repository`] when the developer
    /// is not found or persistence fails.
    pub async fn activate(&self, id: DeveloperId) -> DeveloperDirectoryResult<Developer> {
        let mut developer = self.find_by_id_or_error(id).await?;
        developer.activate();
        self.developers.update(&developer).await?;
        tracing::info!(developer = %id, "developer activated");
        Ok(developer)
    }

    /// Removes a developer outright.
    ///
    /// Removal is rejected while any task still references the developer
    /// as its assignee; tasks must be reassigned or deleted first.
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperDirectoryError::StillAssigned`] when tasks still
    /// reference the developer, or [`DeveloperDirectoryError::Repository`]
    /// when the developer is not found or persistence fails.
    pub async fn remove(&self, id: DeveloperId) -> DeveloperDirectoryResult<()> {
        let task_count = self
            .tasks
            .count_by_assignee(id)
            .await
            .map_err(DeveloperDirectoryError::TaskLookup)?;
        if task_count > 0 {
            return Err(DeveloperDirectoryError::StillAssigned { id, task_count });
        }

        self.developers.delete(id).await?;
        tracing::info!(developer = %id, "developer removed");
        Ok(())
    }

    async fn find_by_id_or_error(&self, id: DeveloperId) -> DeveloperDirectoryResult<Developer> {
        let found: DeveloperRepositoryResult<Option<Developer>> =
            self.developers.find_by_id(id).await;
        found?.ok_or_else(|| DeveloperRepositoryError::NotFound(id).into())
    }
}
