//! Service layer for project creation, statistics, and task listings.

use crate::developer::{
    domain::{Developer, DeveloperId},
    ports::{DeveloperRepository, DeveloperRepositoryError},
};
use crate::error::ErrorClass;
use crate::project::{
    domain::{Project, ProjectDomainError, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::task::{
    domain::{
        PageRequest, PagedResult, ParseTaskStatusError, Task, TaskDomainError, TaskFilter,
        TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError},
    services::TaskDetails,
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    client_name: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    status: Option<String>,
}

impl CreateProjectRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        client_name: impl Into<String>,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            client_name: client_name.into(),
            start_date,
            end_date: None,
            status: None,
        }
    }

    /// Sets the end date.
    #[must_use]
    pub const fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Sets the free-form status (defaults to `Planned`).
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Query describing one page of a project's task listing.
///
/// Page defaults to 1 with a page size of 10; both are validated when the
/// query is processed, as is the optional status filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTasksQuery {
    project_id: ProjectId,
    status: Option<String>,
    assignee_id: Option<DeveloperId>,
    page: u32,
    page_size: u32,
}

impl ProjectTasksQuery {
    /// Creates a query for the first page with the default page size.
    #[must_use]
    pub const fn new(project_id: ProjectId) -> Self {
        Self {
            project_id,
            status: None,
            assignee_id: None,
            page: 1,
            page_size: 10,
        }
    }

    /// Restricts the listing to tasks with the given status (validated
    /// when processed).
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Restricts the listing to tasks assigned to the given developer.
    #[must_use]
    pub const fn with_assignee(mut self, assignee_id: DeveloperId) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Sets the page coordinates (validated when processed).
    #[must_use]
    pub const fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

/// A project together with its task counts.
///
/// `total_tasks` always equals `open_tasks + completed_tasks`: every task
/// is in exactly one of the two buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    /// The project record.
    pub project: Project,
    /// Number of tasks referencing the project.
    pub total_tasks: usize,
    /// Number of tasks not yet completed.
    pub open_tasks: usize,
    /// Number of completed tasks.
    pub completed_tasks: usize,
}

/// Service-level errors for project portfolio operations.
#[derive(Debug, Error)]
pub enum ProjectPortfolioError {
    /// Project validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),

    /// Paging validation failed.
    #[error(transparent)]
    Paging(#[from] TaskDomainError),

    /// The status filter is not a member of the closed enumeration.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// The project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The project still owns tasks and cannot be removed.
    #[error("project {id} still owns {task_count} task(s) and cannot be removed")]
    StillOwnsTasks {
        /// Project that removal was requested for.
        id: ProjectId,
        /// Number of tasks referencing the project.
        task_count: usize,
    },

    /// Project repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),

    /// Task listing failed.
    #[error("task listing failed: {0}")]
    Tasks(#[source] TaskRepositoryError),

    /// Assignee name lookup failed.
    #[error("assignee lookup failed: {0}")]
    Developers(#[source] DeveloperRepositoryError),
}

impl ProjectPortfolioError {
    /// Returns the user-facing outcome class of this error.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Domain(_)
            | Self::Paging(_)
            | Self::InvalidStatus(_)
            | Self::StillOwnsTasks { .. } => ErrorClass::Validation,
            Self::ProjectNotFound(_) | Self::Repository(ProjectRepositoryError::NotFound(_)) => {
                ErrorClass::NotFound
            }
            Self::Repository(_) | Self::Tasks(_) | Self::Developers(_) => ErrorClass::Unexpected,
        }
    }
}

/// Result type for project portfolio service operations.
pub type ProjectPortfolioResult<T> = Result<T, ProjectPortfolioError>;

/// Project portfolio orchestration service.
#[derive(Clone)]
pub struct ProjectPortfolioService<P, T, D, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    D: DeveloperRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    developers: Arc<D>,
    clock: Arc<C>,
}

impl<P, T, D, C> ProjectPortfolioService<P, T, D, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    D: DeveloperRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new project portfolio service.
    #[must_use]
    pub const fn new(projects: Arc<P>, tasks: Arc<T>, developers: Arc<D>, clock: Arc<C>) -> Self {
        Self {
            projects,
            tasks,
            developers,
            clock,
        }
    }

    /// Creates a new project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPortfolioError`] when name validation fails or the
    /// repository rejects persistence.
    pub async fn create(&self, request: CreateProjectRequest) -> ProjectPortfolioResult<Project> {
        let project = Project::new(
            request.name,
            request.client_name,
            request.start_date,
            request.end_date,
            request.status,
            &*self.clock,
        )?;
        self.projects.store(&project).await?;
        tracing::info!(project = %project.id(), "project created");
        Ok(project)
    }

    /// Finds a project by identifier.
    ///
    /// Returns `Ok(None)` when no project has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPortfolioError::Repository`] when persistence
    /// lookup fails.
    pub async fn find_by_id(&self, id: ProjectId) -> ProjectPortfolioResult<Option<Project>> {
        Ok(self.projects.find_by_id(id).await?)
    }

    /// Returns every project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPortfolioError::Repository`] when persistence
    /// lookup fails.
    pub async fn list_all(&self) -> ProjectPortfolioResult<Vec<Project>> {
        Ok(self.projects.list_all().await?)
    }

    /// Returns a project together with its task counts.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPortfolioError::ProjectNotFound`] when the project
    /// does not exist.
    pub async fn stats_by_id(&self, id: ProjectId) -> ProjectPortfolioResult<ProjectStats> {
        let project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or(ProjectPortfolioError::ProjectNotFound(id))?;
        let tasks = self
            .tasks
            .list_by_project(id, &TaskFilter::all())
            .await
            .map_err(ProjectPortfolioError::Tasks)?;
        Ok(stats_for(project, &tasks))
    }

    /// Returns every project together with its task counts.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPortfolioError`] when persistence lookup fails.
    pub async fn list_with_stats(&self) -> ProjectPortfolioResult<Vec<ProjectStats>> {
        let projects = self.projects.list_all().await?;
        let tasks = self
            .tasks
            .list_all()
            .await
            .map_err(ProjectPortfolioError::Tasks)?;

        let mut by_project: HashMap<ProjectId, Vec<&Task>> = HashMap::new();
        for task in &tasks {
            by_project.entry(task.project_id()).or_default().push(task);
        }

        Ok(projects
            .into_iter()
            .map(|project| {
                let owned = by_project.remove(&project.id()).unwrap_or_default();
                let open_tasks = owned.iter().filter(|t| t.is_open()).count();
                let completed_tasks = owned.len() - open_tasks;
                ProjectStats {
                    total_tasks: owned.len(),
                    open_tasks,
                    completed_tasks,
                    project,
                }
            })
            .collect())
    }

    /// Returns one page of a project's task listing, newest first,
    /// enriched with project and assignee names.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPortfolioError::ProjectNotFound`] when the project
    /// does not exist and a validation error when the page coordinates or
    /// status filter are malformed.
    pub async fn tasks_paged(
        &self,
        query: ProjectTasksQuery,
    ) -> ProjectPortfolioResult<PagedResult<TaskDetails>> {
        let page = PageRequest::new(query.page, query.page_size)?;
        let mut filter = TaskFilter::all();
        if let Some(raw) = query.status.as_deref() {
            filter = filter.with_status(TaskStatus::try_from(raw)?);
        }
        if let Some(assignee) = query.assignee_id {
            filter = filter.with_assignee(assignee);
        }

        let project = self
            .projects
            .find_by_id(query.project_id)
            .await?
            .ok_or(ProjectPortfolioError::ProjectNotFound(query.project_id))?;

        let PagedResult {
            items: page_items,
            total_count,
            page_number,
            page_size,
        } = self
            .tasks
            .list_by_project_paged(query.project_id, &filter, &page)
            .await
            .map_err(ProjectPortfolioError::Tasks)?;

        let assignees = self.assignee_names().await?;
        let mut items = Vec::with_capacity(page_items.len());
        for task in page_items {
            let assignee_name = assignees.get(&task.assignee_id()).cloned().ok_or_else(|| {
                ProjectPortfolioError::Developers(DeveloperRepositoryError::NotFound(
                    task.assignee_id(),
                ))
            })?;
            items.push(TaskDetails {
                project_name: project.name().to_owned(),
                assignee_name,
                task,
            });
        }

        Ok(PagedResult {
            items,
            total_count,
            page_number,
            page_size,
        })
    }

    /// Removes a project outright.
    ///
    /// Removal is rejected while any task still references the project;
    /// tasks must be deleted or moved first.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPortfolioError::StillOwnsTasks`] when tasks still
    /// reference the project, or [`ProjectPortfolioError::Repository`]
    /// when the project is not found or persistence fails.
    pub async fn remove(&self, id: ProjectId) -> ProjectPortfolioResult<()> {
        let task_count = self
            .tasks
            .count_by_project(id)
            .await
            .map_err(ProjectPortfolioError::Tasks)?;
        if task_count > 0 {
            return Err(ProjectPortfolioError::StillOwnsTasks { id, task_count });
        }

        self.projects.delete(id).await?;
        tracing::info!(project = %id, "project removed");
        Ok(())
    }

    async fn assignee_names(&self) -> ProjectPortfolioResult<HashMap<DeveloperId, String>> {
        let developers = self
            .developers
            .list_all()
            .await
            .map_err(ProjectPortfolioError::Developers)?;
        Ok(developers
            .iter()
            .map(|d: &Developer| (d.id(), d.full_name()))
            .collect())
    }
}

fn stats_for(project: Project, tasks: &[Task]) -> ProjectStats {
    let open_tasks = tasks.iter().filter(|t| t.is_open()).count();
    ProjectStats {
        total_tasks: tasks.len(),
        open_tasks,
        completed_tasks: tasks.len() - open_tasks,
        project,
    }
}
