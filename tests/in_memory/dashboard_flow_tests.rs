//! End-to-end dashboard report flows over a seeded portfolio.

#![expect(
    clippy::float_cmp,
    reason = "averages in these fixtures are exactly representable"
)]

use super::helpers::{
    context, create_project, register_developer, seed_historical_task, utc, Context,
};
use atelier::task::domain::TaskStatus;
use atelier::task::services::CreateTaskRequest;
use chrono::{TimeDelta, Utc};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn workload_skips_developers_deactivated_after_assignment(context: Context) {
    let john = register_developer(&context, "John", "Doe").await;
    let jane = register_developer(&context, "Jane", "Roe").await;
    let project = create_project(&context, "Portal").await;

    for assignee in [john.id(), jane.id()] {
        context
            .lifecycle
            .create(CreateTaskRequest::new(project.id(), "Work item", assignee))
            .await
            .expect("creation should succeed");
    }
    // Deactivation after assignment is legitimate; the task keeps its
    // assignee link but the reports drop the developer.
    context
        .directory
        .deactivate(jane.id())
        .await
        .expect("deactivation should succeed");

    let workload = context
        .dashboard
        .developer_workload()
        .await
        .expect("report should succeed");
    assert_eq!(workload.len(), 1);
    assert_eq!(
        workload.first().expect("one row").developer_name,
        "John Doe"
    );

    let risk = context
        .dashboard
        .developer_delay_risk()
        .await
        .expect("report should succeed");
    assert_eq!(risk.len(), 1);
    assert_eq!(risk.first().expect("one row").developer_name, "John Doe");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delay_risk_blends_history_with_the_open_horizon(context: Context) {
    let john = register_developer(&context, "John", "Doe").await;
    let project = create_project(&context, "Portal").await;

    // History: completed 2 and 4 days late.
    seed_historical_task(
        &context,
        project.id(),
        john.id(),
        TaskStatus::Completed,
        Some(utc(2025, 5, 1)),
        Some(utc(2025, 5, 3)),
    )
    .await;
    seed_historical_task(
        &context,
        project.id(),
        john.id(),
        TaskStatus::Completed,
        Some(utc(2025, 5, 10)),
        Some(utc(2025, 5, 14)),
    )
    .await;

    // Open horizon: one dated task due in ten days.
    let due = Utc::now() + TimeDelta::days(10);
    context
        .lifecycle
        .create(
            CreateTaskRequest::new(project.id(), "Ship the next milestone", john.id())
                .with_due_date(due),
        )
        .await
        .expect("creation should succeed");

    let risk = context
        .dashboard
        .developer_delay_risk()
        .await
        .expect("report should succeed");
    let row = risk.first().expect("one row");
    assert_eq!(row.avg_delay_days, 3.0);
    assert!(row.high_risk_flag);
    assert_eq!(row.open_tasks_count, 1);
    assert_eq!(row.latest_due_date, Some(due));
    assert_eq!(row.predicted_completion_date, Some(due + TimeDelta::days(3)));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn upcoming_tasks_lists_the_due_window_in_order(context: Context) {
    let john = register_developer(&context, "John", "Doe").await;
    let project = create_project(&context, "Portal").await;

    for (title, days_ahead) in [("Later", 6), ("Sooner", 2)] {
        context
            .lifecycle
            .create(
                CreateTaskRequest::new(project.id(), title, john.id())
                    .with_due_date(Utc::now() + TimeDelta::days(days_ahead)),
            )
            .await
            .expect("creation should succeed");
    }
    // Outside the requested window.
    context
        .lifecycle
        .create(
            CreateTaskRequest::new(project.id(), "Far out", john.id())
                .with_due_date(Utc::now() + TimeDelta::days(20)),
        )
        .await
        .expect("creation should succeed");

    let rows = context
        .dashboard
        .upcoming_tasks(7)
        .await
        .expect("report should succeed");
    assert_eq!(rows.len(), 2);
    let titles: Vec<&str> = rows.iter().map(|row| row.title.as_str()).collect();
    assert_eq!(titles, vec!["Sooner", "Later"]);
    assert_eq!(rows.first().expect("two rows").days_until_due, 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn health_covers_every_project_in_the_portfolio(context: Context) {
    let john = register_developer(&context, "John", "Doe").await;
    let portal = create_project(&context, "Portal").await;
    let idle = create_project(&context, "Idle").await;

    context
        .lifecycle
        .create(CreateTaskRequest::new(
            portal.id(),
            "Only task",
            john.id(),
        ))
        .await
        .expect("creation should succeed");

    let health = context
        .dashboard
        .project_health()
        .await
        .expect("report should succeed");
    assert_eq!(health.len(), 2);

    let idle_row = health
        .iter()
        .find(|row| row.project_id == idle.id())
        .expect("row for the idle project");
    assert_eq!(idle_row.total_tasks, 0);

    let portal_row = health
        .iter()
        .find(|row| row.project_id == portal.id())
        .expect("row for the portal project");
    assert_eq!(portal_row.total_tasks, 1);
    assert_eq!(portal_row.open_tasks, 1);
}
