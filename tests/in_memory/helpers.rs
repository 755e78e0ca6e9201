//! Shared wiring for the in-memory end-to-end tests.

use std::sync::Arc;

use atelier::dashboard::services::DashboardService;
use atelier::developer::{
    adapters::memory::InMemoryDeveloperRepository,
    domain::{Developer, DeveloperId},
    services::{DeveloperDirectoryService, RegisterDeveloperRequest},
};
use atelier::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{Project, ProjectId},
    services::{CreateProjectRequest, ProjectPortfolioService},
};
use atelier::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Complexity, PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus},
    ports::TaskRepository,
    services::TaskLifecycleService,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::DefaultClock;
use once_cell::sync::Lazy;
use rstest::fixture;
use tracing_subscriber::EnvFilter;

/// Installs the test log subscriber once for the whole binary.
static TRACING: Lazy<()> = Lazy::new(|| {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("atelier=info"));
    let _init = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
});

/// Fully wired in-memory service stack.
pub struct Context {
    pub tasks: Arc<InMemoryTaskRepository>,
    pub directory:
        DeveloperDirectoryService<InMemoryDeveloperRepository, InMemoryTaskRepository, DefaultClock>,
    pub portfolio: ProjectPortfolioService<
        InMemoryProjectRepository,
        InMemoryTaskRepository,
        InMemoryDeveloperRepository,
        DefaultClock,
    >,
    pub lifecycle: TaskLifecycleService<
        InMemoryTaskRepository,
        InMemoryProjectRepository,
        InMemoryDeveloperRepository,
        DefaultClock,
    >,
    pub dashboard: DashboardService<
        InMemoryDeveloperRepository,
        InMemoryProjectRepository,
        InMemoryTaskRepository,
        DefaultClock,
    >,
}

/// Builds a fresh service stack over empty in-memory stores.
#[fixture]
pub fn context() -> Context {
    Lazy::force(&TRACING);

    let developers = Arc::new(InMemoryDeveloperRepository::new());
    let projects = Arc::new(InMemoryProjectRepository::new());
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let clock = Arc::new(DefaultClock);

    Context {
        directory: DeveloperDirectoryService::new(
            Arc::clone(&developers),
            Arc::clone(&tasks),
            Arc::clone(&clock),
        ),
        portfolio: ProjectPortfolioService::new(
            Arc::clone(&projects),
            Arc::clone(&tasks),
            Arc::clone(&developers),
            Arc::clone(&clock),
        ),
        lifecycle: TaskLifecycleService::new(
            Arc::clone(&tasks),
            Arc::clone(&projects),
            Arc::clone(&developers),
            Arc::clone(&clock),
        ),
        dashboard: DashboardService::new(developers, projects, Arc::clone(&tasks), clock),
        tasks,
    }
}

/// Registers an active developer through the directory service.
pub async fn register_developer(context: &Context, first: &str, last: &str) -> Developer {
    context
        .directory
        .register(RegisterDeveloperRequest::new(
            first,
            last,
            format!(
                "{}.{}@example.com",
                first.to_lowercase(),
                last.to_lowercase()
            ),
        ))
        .await
        .expect("registration should succeed")
}

/// Creates a project through the portfolio service.
pub async fn create_project(context: &Context, name: &str) -> Project {
    context
        .portfolio
        .create(CreateProjectRequest::new(
            name,
            "Acme Corp",
            NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date"),
        ))
        .await
        .expect("project creation should succeed")
}

/// Stores a task record with explicit dates directly, bypassing the
/// creation-time validation so past histories can be staged.
pub async fn seed_historical_task(
    context: &Context,
    project_id: ProjectId,
    assignee_id: DeveloperId,
    status: TaskStatus,
    due_date: Option<DateTime<Utc>>,
    completion_date: Option<DateTime<Utc>>,
) -> Task {
    let created = utc(2025, 1, 2);
    let task = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        project_id,
        title: "Seeded task".to_owned(),
        description: None,
        assignee_id,
        status,
        priority: TaskPriority::Medium,
        estimated_complexity: Some(Complexity::new(3).expect("valid complexity")),
        due_date,
        completion_date,
        created_at: created,
        updated_at: created,
    });
    context
        .tasks
        .store(&task)
        .await
        .expect("store should succeed");
    task
}

/// Midday UTC timestamp on the given date.
pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(12, 0, 0)
        .expect("valid time")
        .and_utc()
}
