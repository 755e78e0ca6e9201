//! Service orchestration tests for the task lifecycle.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use crate::developer::{
    adapters::memory::InMemoryDeveloperRepository,
    domain::{Developer, DeveloperId, EmailAddress, PersonName},
    ports::DeveloperRepository,
};
use crate::error::ErrorClass;
use crate::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{Project, ProjectId},
    ports::ProjectRepository,
};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDomainError, TaskId, TaskStatus},
    services::{
        CreateTaskRequest, TaskLifecycleError, TaskLifecycleService, UpdateTaskStatusRequest,
    },
};
use chrono::{NaiveDate, TimeDelta, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryProjectRepository,
    InMemoryDeveloperRepository,
    DefaultClock,
>;

struct Harness {
    service: TestService,
    projects: Arc<InMemoryProjectRepository>,
    developers: Arc<InMemoryDeveloperRepository>,
}

#[fixture]
fn harness() -> Harness {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let projects = Arc::new(InMemoryProjectRepository::new());
    let developers = Arc::new(InMemoryDeveloperRepository::new());
    let service = TaskLifecycleService::new(
        tasks,
        Arc::clone(&projects),
        Arc::clone(&developers),
        Arc::new(DefaultClock),
    );
    Harness {
        service,
        projects,
        developers,
    }
}

async fn seed_project(harness: &Harness, name: &str) -> Project {
    let start = NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date");
    let project =
        Project::new(name, "Acme Corp", start, None, None, &DefaultClock).expect("valid project");
    harness
        .projects
        .store(&project)
        .await
        .expect("store should succeed");
    project
}

async fn seed_developer(harness: &Harness, first: &str, last: &str, active: bool) -> Developer {
    let name = PersonName::new(first, last).expect("valid name");
    let email = EmailAddress::new(format!(
        "{}.{}@example.com",
        first.to_lowercase(),
        last.to_lowercase()
    ))
    .expect("valid email");
    let mut developer = Developer::new(name, email, &DefaultClock);
    if !active {
        developer.deactivate();
    }
    harness
        .developers
        .store(&developer)
        .await
        .expect("store should succeed");
    developer
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_persists_and_enriches_with_names(harness: Harness) {
    let project = seed_project(&harness, "Portal").await;
    let developer = seed_developer(&harness, "John", "Doe", true).await;

    let created = harness
        .service
        .create(
            CreateTaskRequest::new(project.id(), "Build the login form", developer.id())
                .with_status("InProgress")
                .with_priority("High")
                .with_estimated_complexity(3)
                .with_due_date(Utc::now() + TimeDelta::days(5)),
        )
        .await
        .expect("creation should succeed");

    assert_eq!(created.project_name, "Portal");
    assert_eq!(created.assignee_name, "John Doe");
    assert_eq!(created.task.status(), TaskStatus::InProgress);

    let fetched = harness
        .service
        .find_by_id(created.task.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_an_unknown_project(harness: Harness) {
    let developer = seed_developer(&harness, "John", "Doe", true).await;
    let missing = ProjectId::new();

    let err = harness
        .service
        .create(CreateTaskRequest::new(missing, "Anything", developer.id()))
        .await
        .expect_err("unknown project should be rejected");

    assert!(matches!(
        err,
        TaskLifecycleError::ProjectNotFound(id) if id == missing
    ));
    assert_eq!(err.class(), ErrorClass::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_an_inactive_assignee(harness: Harness) {
    let project = seed_project(&harness, "Portal").await;
    let developer = seed_developer(&harness, "Jane", "Roe", false).await;

    let err = harness
        .service
        .create(CreateTaskRequest::new(
            project.id(),
            "Anything",
            developer.id(),
        ))
        .await
        .expect_err("inactive assignee should be rejected");

    assert!(matches!(err, TaskLifecycleError::AssigneeNotActive(_)));
    assert_eq!(err.class(), ErrorClass::Validation);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_an_unknown_assignee(harness: Harness) {
    let project = seed_project(&harness, "Portal").await;

    let err = harness
        .service
        .create(CreateTaskRequest::new(
            project.id(),
            "Anything",
            DeveloperId::new(),
        ))
        .await
        .expect_err("unknown assignee should be rejected");

    assert!(matches!(err, TaskLifecycleError::AssigneeNotActive(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_an_unknown_status(harness: Harness) {
    let project = seed_project(&harness, "Portal").await;
    let developer = seed_developer(&harness, "John", "Doe", true).await;

    let err = harness
        .service
        .create(
            CreateTaskRequest::new(project.id(), "Anything", developer.id())
                .with_status("Started"),
        )
        .await
        .expect_err("unknown status should be rejected");

    assert!(matches!(err, TaskLifecycleError::InvalidStatus(_)));
    assert_eq!(err.class(), ErrorClass::Validation);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_an_unknown_priority(harness: Harness) {
    let project = seed_project(&harness, "Portal").await;
    let developer = seed_developer(&harness, "John", "Doe", true).await;

    let err = harness
        .service
        .create(
            CreateTaskRequest::new(project.id(), "Anything", developer.id())
                .with_priority("Urgent"),
        )
        .await
        .expect_err("unknown priority should be rejected");

    assert!(matches!(err, TaskLifecycleError::InvalidPriority(_)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_an_out_of_range_complexity(harness: Harness) {
    let project = seed_project(&harness, "Portal").await;
    let developer = seed_developer(&harness, "John", "Doe", true).await;

    let err = harness
        .service
        .create(
            CreateTaskRequest::new(project.id(), "Anything", developer.id())
                .with_estimated_complexity(6),
        )
        .await
        .expect_err("out-of-range complexity should be rejected");

    assert!(matches!(
        err,
        TaskLifecycleError::Domain(TaskDomainError::InvalidComplexity(6))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_a_past_due_date(harness: Harness) {
    let project = seed_project(&harness, "Portal").await;
    let developer = seed_developer(&harness, "John", "Doe", true).await;

    let err = harness
        .service
        .create(
            CreateTaskRequest::new(project.id(), "Anything", developer.id())
                .with_due_date(Utc::now() - TimeDelta::hours(2)),
        )
        .await
        .expect_err("past due date should be rejected");

    assert!(matches!(
        err,
        TaskLifecycleError::Domain(TaskDomainError::DueDateInPast { .. })
    ));
    assert_eq!(err.class(), ErrorClass::Validation);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_a_task_stamps_the_completion_date(harness: Harness) {
    let project = seed_project(&harness, "Portal").await;
    let developer = seed_developer(&harness, "John", "Doe", true).await;
    let created = harness
        .service
        .create(CreateTaskRequest::new(
            project.id(),
            "Build the login form",
            developer.id(),
        ))
        .await
        .expect("creation should succeed");

    let before = Utc::now();
    let updated = harness
        .service
        .update_status(
            created.task.id(),
            UpdateTaskStatusRequest::new().with_status("Completed"),
        )
        .await
        .expect("update should succeed");
    let after = Utc::now();

    assert_eq!(updated.task.status(), TaskStatus::Completed);
    let completed_at = updated.task.completion_date().expect("completion date set");
    assert!(completed_at >= before && completed_at <= after);

    let reopened = harness
        .service
        .update_status(
            created.task.id(),
            UpdateTaskStatusRequest::new().with_status("InProgress"),
        )
        .await
        .expect("update should succeed");
    assert!(reopened.task.completion_date().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn partial_update_leaves_absent_fields_untouched(harness: Harness) {
    let project = seed_project(&harness, "Portal").await;
    let developer = seed_developer(&harness, "John", "Doe", true).await;
    let created = harness
        .service
        .create(
            CreateTaskRequest::new(project.id(), "Build the login form", developer.id())
                .with_status("Blocked")
                .with_estimated_complexity(4),
        )
        .await
        .expect("creation should succeed");

    let updated = harness
        .service
        .update_status(
            created.task.id(),
            UpdateTaskStatusRequest::new().with_priority("High"),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.task.status(), TaskStatus::Blocked);
    assert_eq!(
        updated.task.estimated_complexity().map(|c| c.value()),
        Some(4)
    );
    assert!(updated.task.updated_at() >= created.task.updated_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_an_invalid_status_without_mutating(harness: Harness) {
    let project = seed_project(&harness, "Portal").await;
    let developer = seed_developer(&harness, "John", "Doe", true).await;
    let created = harness
        .service
        .create(CreateTaskRequest::new(
            project.id(),
            "Build the login form",
            developer.id(),
        ))
        .await
        .expect("creation should succeed");

    let err = harness
        .service
        .update_status(
            created.task.id(),
            UpdateTaskStatusRequest::new().with_status("Cancelled"),
        )
        .await
        .expect_err("invalid status should be rejected");
    assert!(matches!(err, TaskLifecycleError::InvalidStatus(_)));

    let fetched = harness
        .service
        .find_by_id(created.task.id())
        .await
        .expect("lookup should succeed")
        .expect("task still present");
    assert_eq!(fetched.task.status(), TaskStatus::ToDo);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_on_an_unknown_task_is_not_found(harness: Harness) {
    let missing = TaskId::new();
    let err = harness
        .service
        .update_status(missing, UpdateTaskStatusRequest::new().with_status("ToDo"))
        .await
        .expect_err("unknown task should be rejected");

    assert!(matches!(
        err,
        TaskLifecycleError::TaskNotFound(id) if id == missing
    ));
    assert_eq!(err.class(), ErrorClass::NotFound);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_deletes_the_task_outright(harness: Harness) {
    let project = seed_project(&harness, "Portal").await;
    let developer = seed_developer(&harness, "John", "Doe", true).await;
    let created = harness
        .service
        .create(CreateTaskRequest::new(
            project.id(),
            "Build the login form",
            developer.id(),
        ))
        .await
        .expect("creation should succeed");

    harness
        .service
        .remove(created.task.id())
        .await
        .expect("removal should succeed");

    let fetched = harness
        .service
        .find_by_id(created.task.id())
        .await
        .expect("lookup should succeed");
    assert!(fetched.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_on_an_unknown_task_is_not_found(harness: Harness) {
    let missing = TaskId::new();
    let err = harness
        .service
        .remove(missing)
        .await
        .expect_err("unknown task should be rejected");

    assert!(matches!(
        err,
        TaskLifecycleError::TaskNotFound(id) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_by_assignee_returns_only_their_tasks(harness: Harness) {
    let project = seed_project(&harness, "Portal").await;
    let john = seed_developer(&harness, "John", "Doe", true).await;
    let jane = seed_developer(&harness, "Jane", "Roe", true).await;

    for title in ["First", "Second"] {
        harness
            .service
            .create(CreateTaskRequest::new(project.id(), title, john.id()))
            .await
            .expect("creation should succeed");
    }
    harness
        .service
        .create(CreateTaskRequest::new(project.id(), "Other", jane.id()))
        .await
        .expect("creation should succeed");

    let johns = harness
        .service
        .list_by_assignee(john.id())
        .await
        .expect("listing should succeed");
    assert_eq!(johns.len(), 2);
    assert!(johns.iter().all(|d| d.task.assignee_id() == john.id()));
    assert!(johns.iter().all(|d| d.assignee_name == "John Doe"));
}
