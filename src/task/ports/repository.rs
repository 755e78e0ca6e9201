//! Repository port for task persistence, lookup, and listing.

use crate::developer::domain::DeveloperId;
use crate::project::domain::ProjectId;
use crate::task::domain::{PageRequest, PagedResult, Task, TaskFilter, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task (status, priority, complexity,
    /// completion date, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Deletes a task outright (hard delete, no tombstone).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns every task. The dashboard reports aggregate over this set.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks assigned to a developer, newest first.
    async fn list_by_assignee(&self, assignee: DeveloperId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the tasks of a project passing the filter, newest first.
    async fn list_by_project(
        &self,
        project: ProjectId,
        filter: &TaskFilter,
    ) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns one page of the tasks of a project passing the filter,
    /// newest first, together with the total match count.
    async fn list_by_project_paged(
        &self,
        project: ProjectId,
        filter: &TaskFilter,
        page: &PageRequest,
    ) -> TaskRepositoryResult<PagedResult<Task>>;

    /// Counts the tasks referencing a developer as assignee.
    async fn count_by_assignee(&self, assignee: DeveloperId) -> TaskRepositoryResult<usize>;

    /// Counts the tasks referencing a project.
    async fn count_by_project(&self, project: ProjectId) -> TaskRepositoryResult<usize>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
