//! Service layer feeding the dashboard reports from the repositories.

use crate::dashboard::domain::{
    self, DashboardDomainError, DeveloperDelayRisk, DeveloperWorkload, ProjectHealth,
    UpcomingTask, UpcomingWindow,
};
use crate::developer::domain::DeveloperId;
use crate::developer::ports::{DeveloperRepository, DeveloperRepositoryError};
use crate::error::ErrorClass;
use crate::project::domain::ProjectId;
use crate::project::ports::{ProjectRepository, ProjectRepositoryError};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for dashboard report operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Report parameter validation failed.
    #[error(transparent)]
    Domain(#[from] DashboardDomainError),

    /// Developer lookup failed.
    #[error("developer lookup failed: {0}")]
    Developers(#[source] DeveloperRepositoryError),

    /// Project lookup failed.
    #[error("project lookup failed: {0}")]
    Projects(#[source] ProjectRepositoryError),

    /// Task lookup failed.
    #[error("task lookup failed: {0}")]
    Tasks(#[source] TaskRepositoryError),
}

impl DashboardError {
    /// Returns the user-facing outcome class of this error.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Domain(_) => ErrorClass::Validation,
            Self::Developers(_) | Self::Projects(_) | Self::Tasks(_) => ErrorClass::Unexpected,
        }
    }
}

/// Result type for dashboard service operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Read-only dashboard report service.
///
/// Data flows one way: repositories feed the pure aggregation functions
/// in [`crate::dashboard::domain`], whose rows go straight to the
/// caller. Nothing is written.
#[derive(Clone)]
pub struct DashboardService<D, P, T, C>
where
    D: DeveloperRepository,
    P: ProjectRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    developers: Arc<D>,
    projects: Arc<P>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<D, P, T, C> DashboardService<D, P, T, C>
where
    D: DeveloperRepository,
    P: ProjectRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new dashboard service.
    #[must_use]
    pub const fn new(developers: Arc<D>, projects: Arc<P>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            developers,
            projects,
            tasks,
            clock,
        }
    }

    /// Computes the per-developer workload report.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] when a repository lookup fails.
    pub async fn developer_workload(&self) -> DashboardResult<Vec<DeveloperWorkload>> {
        let developers = self
            .developers
            .list_active()
            .await
            .map_err(DashboardError::Developers)?;
        let tasks = self.tasks.list_all().await.map_err(DashboardError::Tasks)?;
        Ok(domain::developer_workload(&developers, &tasks))
    }

    /// Computes the per-project health report.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] when a repository lookup fails.
    pub async fn project_health(&self) -> DashboardResult<Vec<ProjectHealth>> {
        let projects = self
            .projects
            .list_all()
            .await
            .map_err(DashboardError::Projects)?;
        let tasks = self.tasks.list_all().await.map_err(DashboardError::Tasks)?;
        Ok(domain::project_health(&projects, &tasks))
    }

    /// Computes the per-developer delay-risk report.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] when a repository lookup fails.
    pub async fn developer_delay_risk(&self) -> DashboardResult<Vec<DeveloperDelayRisk>> {
        let developers = self
            .developers
            .list_active()
            .await
            .map_err(DashboardError::Developers)?;
        let tasks = self.tasks.list_all().await.map_err(DashboardError::Tasks)?;
        Ok(domain::developer_delay_risk(&developers, &tasks))
    }

    /// Lists the open tasks due within the next `days` days (1..=30),
    /// today included.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Domain`] when `days` is outside 1..=30,
    /// or a repository error when a lookup fails.
    pub async fn upcoming_tasks(&self, days: u32) -> DashboardResult<Vec<UpcomingTask>> {
        let window = UpcomingWindow::new(days)?;

        let tasks = self.tasks.list_all().await.map_err(DashboardError::Tasks)?;
        let projects = self
            .projects
            .list_all()
            .await
            .map_err(DashboardError::Projects)?;
        let developers = self
            .developers
            .list_all()
            .await
            .map_err(DashboardError::Developers)?;

        let project_names: HashMap<ProjectId, String> = projects
            .iter()
            .map(|p| (p.id(), p.name().to_owned()))
            .collect();
        let assignee_names: HashMap<DeveloperId, String> = developers
            .iter()
            .map(|d| (d.id(), d.full_name()))
            .collect();

        let today = self.clock.utc().date_naive();
        Ok(domain::upcoming_tasks(
            &tasks,
            &project_names,
            &assignee_names,
            today,
            window.days(),
        ))
    }
}
