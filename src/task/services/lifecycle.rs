//! Service layer for validated task creation, status updates, and removal.

use crate::developer::{
    domain::{Developer, DeveloperId},
    ports::{DeveloperRepository, DeveloperRepositoryError},
};
use crate::error::ErrorClass;
use crate::project::{
    domain::ProjectId,
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::task::{
    domain::{
        Complexity, NewTaskData, ParseTaskPriorityError, ParseTaskStatusError, StatusUpdate, Task,
        TaskDomainError, TaskId, TaskPriority, TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// Status defaults to `ToDo` and priority to `Medium`; both are validated
/// against the closed enumerations when the request is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    assignee_id: DeveloperId,
    status: String,
    priority: String,
    estimated_complexity: Option<u8>,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with required fields and default status/priority.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>, assignee_id: DeveloperId) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: None,
            assignee_id,
            status: TaskStatus::ToDo.as_str().to_owned(),
            priority: TaskPriority::Medium.as_str().to_owned(),
            estimated_complexity: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status (validated when processed).
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the initial priority (validated when processed).
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Sets the estimated complexity (validated when processed).
    #[must_use]
    pub const fn with_estimated_complexity(mut self, complexity: u8) -> Self {
        self.estimated_complexity = Some(complexity);
        self
    }

    /// Sets the due date (validated against the clock when processed).
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for the partial status-update operation.
///
/// Absent fields leave the task untouched; absent never means "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskStatusRequest {
    status: Option<String>,
    priority: Option<String>,
    estimated_complexity: Option<u8>,
}

impl UpdateTaskStatusRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new status (validated when processed).
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the new priority (validated when processed).
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the new estimated complexity (validated when processed).
    #[must_use]
    pub const fn with_estimated_complexity(mut self, complexity: u8) -> Self {
        self.estimated_complexity = Some(complexity);
        self
    }
}

/// A task enriched with the names of its project and assignee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetails {
    /// The task record.
    pub task: Task,
    /// Name of the owning project.
    pub project_name: String,
    /// Full name of the assigned developer.
    pub assignee_name: String,
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The status value is not a member of the closed enumeration.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// The priority value is not a member of the closed enumeration.
    #[error(transparent)]
    InvalidPriority(#[from] ParseTaskPriorityError),

    /// The referenced project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The referenced developer does not exist or is not active.
    #[error("developer {0} does not exist or is not active")]
    AssigneeNotActive(DeveloperId),

    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),

    /// Project lookup failed.
    #[error("project lookup failed: {0}")]
    Projects(#[source] ProjectRepositoryError),

    /// Developer lookup failed.
    #[error("developer lookup failed: {0}")]
    Developers(#[source] DeveloperRepositoryError),
}

impl TaskLifecycleError {
    /// Returns the user-facing outcome class of this error.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Domain(_)
            | Self::InvalidStatus(_)
            | Self::InvalidPriority(_)
            | Self::AssigneeNotActive(_) => ErrorClass::Validation,
            Self::ProjectNotFound(_)
            | Self::TaskNotFound(_)
            | Self::Tasks(TaskRepositoryError::NotFound(_)) => ErrorClass::NotFound,
            Self::Tasks(_) | Self::Projects(_) | Self::Developers(_) => ErrorClass::Unexpected,
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<T, P, D, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    D: DeveloperRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    projects: Arc<P>,
    developers: Arc<D>,
    clock: Arc<C>,
}

impl<T, P, D, C> TaskLifecycleService<T, P, D, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    D: DeveloperRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, projects: Arc<P>, developers: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            projects,
            developers,
            clock,
        }
    }

    /// Creates a new task after checking every precondition.
    ///
    /// Preconditions, in order: the project exists; the assignee exists
    /// and is active; status and priority are members of their
    /// enumerations; the complexity, if given, is in 1..=5; the due date,
    /// if given, is not in the past.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] naming the violated precondition, or
    /// a repository error when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<TaskDetails> {
        let project = self
            .projects
            .find_by_id(request.project_id)
            .await
            .map_err(TaskLifecycleError::Projects)?
            .ok_or(TaskLifecycleError::ProjectNotFound(request.project_id))?;

        let assignee = self.active_assignee(request.assignee_id).await?;

        let status = TaskStatus::try_from(request.status.as_str())?;
        let priority = TaskPriority::try_from(request.priority.as_str())?;
        let estimated_complexity = request
            .estimated_complexity
            .map(Complexity::new)
            .transpose()?;

        let task = Task::new(
            NewTaskData {
                project_id: request.project_id,
                title: request.title,
                description: request.description,
                assignee_id: request.assignee_id,
                status,
                priority,
                estimated_complexity,
                due_date: request.due_date,
            },
            &*self.clock,
        )?;
        self.tasks.store(&task).await?;
        tracing::info!(task = %task.id(), project = %project.id(), "task created");

        Ok(TaskDetails {
            project_name: project.name().to_owned(),
            assignee_name: assignee.full_name(),
            task,
        })
    }

    /// Applies a partial status update to an existing task.
    ///
    /// Provided fields are validated exactly as at creation; absent fields
    /// are left untouched. Entering `Completed` stamps the completion
    /// date, leaving it clears the date, and the update timestamp is
    /// always refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist and a validation error when a provided field is malformed.
    pub async fn update_status(
        &self,
        id: TaskId,
        request: UpdateTaskStatusRequest,
    ) -> TaskLifecycleResult<TaskDetails> {
        let mut task = self
            .tasks
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::TaskNotFound(id))?;

        let update = StatusUpdate {
            status: request
                .status
                .as_deref()
                .map(TaskStatus::try_from)
                .transpose()?,
            priority: request
                .priority
                .as_deref()
                .map(TaskPriority::try_from)
                .transpose()?,
            estimated_complexity: request
                .estimated_complexity
                .map(Complexity::new)
                .transpose()?,
        };

        task.apply_status_update(update, &*self.clock);
        self.tasks.update(&task).await?;
        tracing::info!(task = %id, status = %task.status(), "task status updated");
        self.to_details(task).await
    }

    /// Deletes a task outright.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when the task does not
    /// exist.
    pub async fn remove(&self, id: TaskId) -> TaskLifecycleResult<()> {
        match self.tasks.delete(id).await {
            Err(TaskRepositoryError::NotFound(_)) => Err(TaskLifecycleError::TaskNotFound(id)),
            other => {
                other?;
                tracing::info!(task = %id, "task removed");
                Ok(())
            }
        }
    }

    /// Finds a task by identifier, enriched with project and assignee
    /// names.
    ///
    /// Returns `Ok(None)` when no task has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when persistence lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskLifecycleResult<Option<TaskDetails>> {
        let Some(task) = self.tasks.find_by_id(id).await? else {
            return Ok(None);
        };
        Ok(Some(self.to_details(task).await?))
    }

    /// Returns the tasks assigned to a developer, newest first, enriched
    /// with project and assignee names.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when persistence lookup fails.
    pub async fn list_by_assignee(
        &self,
        assignee: DeveloperId,
    ) -> TaskLifecycleResult<Vec<TaskDetails>> {
        let tasks = self.tasks.list_by_assignee(assignee).await?;
        let mut details = Vec::with_capacity(tasks.len());
        for task in tasks {
            details.push(self.to_details(task).await?);
        }
        Ok(details)
    }

    async fn active_assignee(&self, id: DeveloperId) -> TaskLifecycleResult<Developer> {
        let developer = self
            .developers
            .find_by_id(id)
            .await
            .map_err(TaskLifecycleError::Developers)?;
        match developer {
            Some(developer) if developer.is_active() => Ok(developer),
            _ => Err(TaskLifecycleError::AssigneeNotActive(id)),
        }
    }

    async fn to_details(&self, task: Task) -> TaskLifecycleResult<TaskDetails> {
        let project = self
            .projects
            .find_by_id(task.project_id())
            .await
            .map_err(TaskLifecycleError::Projects)?
            .ok_or(TaskLifecycleError::ProjectNotFound(task.project_id()))?;
        let assignee = self
            .developers
            .find_by_id(task.assignee_id())
            .await
            .map_err(TaskLifecycleError::Developers)?
            .ok_or_else(|| {
                TaskLifecycleError::Developers(DeveloperRepositoryError::NotFound(
                    task.assignee_id(),
                ))
            })?;

        Ok(TaskDetails {
            project_name: project.name().to_owned(),
            assignee_name: assignee.full_name(),
            task,
        })
    }
}
