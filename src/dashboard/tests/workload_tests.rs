//! Tests for the developer workload aggregation.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]
#![expect(
    clippy::float_cmp,
    reason = "averages in these fixtures are exactly representable"
)]

use super::support::{developer, project, task};
use crate::dashboard::domain::developer_workload;
use crate::task::domain::TaskStatus;
use rstest::rstest;

#[rstest]
fn open_tasks_and_average_complexity_per_developer() {
    let john = developer("John", "Doe", true);
    let portal = project("Portal", "Acme Corp");

    // Complexity 3 (open), 5 (open), 2 (completed): the completed task
    // contributes to neither the count nor the average.
    let tasks = vec![
        task(portal.id(), john.id(), TaskStatus::ToDo, Some(3), None, None),
        task(
            portal.id(),
            john.id(),
            TaskStatus::InProgress,
            Some(5),
            None,
            None,
        ),
        task(
            portal.id(),
            john.id(),
            TaskStatus::Completed,
            Some(2),
            None,
            None,
        ),
    ];

    let rows = developer_workload(&[john], &tasks);
    assert_eq!(rows.len(), 1);
    let row = rows.first().expect("one row");
    assert_eq!(row.developer_name, "John Doe");
    assert_eq!(row.open_tasks_count, 2);
    assert_eq!(row.average_estimated_complexity, 4.0);
}

#[rstest]
fn average_defaults_to_zero_without_scored_open_tasks() {
    let john = developer("John", "Doe", true);
    let portal = project("Portal", "Acme Corp");
    let tasks = vec![
        task(portal.id(), john.id(), TaskStatus::ToDo, None, None, None),
        task(
            portal.id(),
            john.id(),
            TaskStatus::Completed,
            Some(5),
            None,
            None,
        ),
    ];

    let rows = developer_workload(&[john], &tasks);
    let row = rows.first().expect("one row");
    assert_eq!(row.open_tasks_count, 1);
    assert_eq!(row.average_estimated_complexity, 0.0);
    assert!(row.average_estimated_complexity.is_finite());
}

#[rstest]
fn developers_without_tasks_report_zeros() {
    let john = developer("John", "Doe", true);

    let rows = developer_workload(&[john], &[]);
    let row = rows.first().expect("one row");
    assert_eq!(row.open_tasks_count, 0);
    assert_eq!(row.average_estimated_complexity, 0.0);
}

#[rstest]
fn inactive_developers_are_excluded() {
    let john = developer("John", "Doe", true);
    let jane = developer("Jane", "Roe", false);
    let portal = project("Portal", "Acme Corp");
    let tasks = vec![task(
        portal.id(),
        jane.id(),
        TaskStatus::ToDo,
        Some(4),
        None,
        None,
    )];

    let rows = developer_workload(&[john, jane], &tasks);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows.first().expect("one row").developer_name, "John Doe");
}

#[rstest]
fn tasks_of_other_developers_are_not_counted() {
    let john = developer("John", "Doe", true);
    let jane = developer("Jane", "Roe", true);
    let portal = project("Portal", "Acme Corp");
    let tasks = vec![task(
        portal.id(),
        jane.id(),
        TaskStatus::ToDo,
        Some(5),
        None,
        None,
    )];

    let rows = developer_workload(&[john.clone(), jane], &tasks);
    let johns_row = rows
        .iter()
        .find(|row| row.developer_name == "John Doe")
        .expect("row for John");
    assert_eq!(johns_row.open_tasks_count, 0);
    assert_eq!(johns_row.average_estimated_complexity, 0.0);
}

#[rstest]
fn rows_are_ordered_by_developer_name() {
    let zoe = developer("Zoe", "Adams", true);
    let alice = developer("Alice", "Brown", true);

    let rows = developer_workload(&[zoe, alice], &[]);
    let names: Vec<&str> = rows.iter().map(|row| row.developer_name.as_str()).collect();
    assert_eq!(names, vec!["Alice Brown", "Zoe Adams"]);
}
