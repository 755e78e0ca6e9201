//! End-to-end task lifecycle flows over the in-memory stores.

use super::helpers::{context, create_project, register_developer, Context};
use atelier::developer::services::DeveloperDirectoryError;
use atelier::project::services::{ProjectPortfolioError, ProjectTasksQuery};
use atelier::task::domain::TaskStatus;
use atelier::task::services::{CreateTaskRequest, UpdateTaskStatusRequest};
use eyre::ensure;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_tasks_show_up_in_the_project_listing(context: Context) {
    let developer = register_developer(&context, "John", "Doe").await;
    let project = create_project(&context, "Portal").await;

    context
        .lifecycle
        .create(
            CreateTaskRequest::new(project.id(), "Build the login form", developer.id())
                .with_estimated_complexity(3),
        )
        .await
        .expect("creation should succeed");

    let page = context
        .portfolio
        .tasks_paged(ProjectTasksQuery::new(project.id()))
        .await
        .expect("listing should succeed");
    assert_eq!(page.total_count, 1);
    let item = page.items.first().expect("one item");
    assert_eq!(item.project_name, "Portal");
    assert_eq!(item.assignee_name, "John Doe");

    let stats = context
        .portfolio
        .stats_by_id(project.id())
        .await
        .expect("stats should succeed");
    assert_eq!(stats.total_tasks, 1);
    assert_eq!(stats.open_tasks, 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_a_task_moves_it_between_report_buckets(context: Context) {
    let developer = register_developer(&context, "John", "Doe").await;
    let project = create_project(&context, "Portal").await;
    let created = context
        .lifecycle
        .create(CreateTaskRequest::new(
            project.id(),
            "Build the login form",
            developer.id(),
        ))
        .await
        .expect("creation should succeed");

    let before = context
        .dashboard
        .developer_workload()
        .await
        .expect("report should succeed");
    assert_eq!(before.first().expect("one row").open_tasks_count, 1);

    let updated = context
        .lifecycle
        .update_status(
            created.task.id(),
            UpdateTaskStatusRequest::new().with_status("Completed"),
        )
        .await
        .expect("update should succeed");
    assert!(updated.task.completion_date().is_some());

    let after = context
        .dashboard
        .developer_workload()
        .await
        .expect("report should succeed");
    assert_eq!(after.first().expect("one row").open_tasks_count, 0);

    let health = context
        .dashboard
        .project_health()
        .await
        .expect("report should succeed");
    let row = health.first().expect("one row");
    assert_eq!(row.completed_tasks, 1);
    assert_eq!(row.open_tasks, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigned_developers_and_owning_projects_resist_removal(
    context: Context,
) -> eyre::Result<()> {
    let developer = register_developer(&context, "John", "Doe").await;
    let project = create_project(&context, "Portal").await;
    let created = context
        .lifecycle
        .create(CreateTaskRequest::new(
            project.id(),
            "Build the login form",
            developer.id(),
        ))
        .await?;

    let developer_err = context
        .directory
        .remove(developer.id())
        .await
        .expect_err("assigned developer should resist removal");
    ensure!(
        matches!(
            developer_err,
            DeveloperDirectoryError::StillAssigned { .. }
        ),
        "expected StillAssigned, got {developer_err:?}"
    );

    let project_err = context
        .portfolio
        .remove(project.id())
        .await
        .expect_err("owning project should resist removal");
    ensure!(
        matches!(project_err, ProjectPortfolioError::StillOwnsTasks { .. }),
        "expected StillOwnsTasks, got {project_err:?}"
    );

    // Once the task is gone, both removals go through.
    context.lifecycle.remove(created.task.id()).await?;
    context.directory.remove(developer.id()).await?;
    context.portfolio.remove(project.id()).await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopening_a_completed_task_clears_its_completion_date(context: Context) {
    let developer = register_developer(&context, "John", "Doe").await;
    let project = create_project(&context, "Portal").await;
    let created = context
        .lifecycle
        .create(
            CreateTaskRequest::new(project.id(), "Build the login form", developer.id())
                .with_status("InProgress"),
        )
        .await
        .expect("creation should succeed");

    let completed = context
        .lifecycle
        .update_status(
            created.task.id(),
            UpdateTaskStatusRequest::new().with_status("Completed"),
        )
        .await
        .expect("update should succeed");
    assert!(completed.task.completion_date().is_some());

    let reopened = context
        .lifecycle
        .update_status(
            created.task.id(),
            UpdateTaskStatusRequest::new().with_status("Blocked"),
        )
        .await
        .expect("update should succeed");
    assert_eq!(reopened.task.status(), TaskStatus::Blocked);
    assert!(reopened.task.completion_date().is_none());
}
