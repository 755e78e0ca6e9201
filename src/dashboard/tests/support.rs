//! Shared fixtures for dashboard report tests.
//!
//! Report inputs are reconstructed through the persistence constructors
//! so histories (past due dates, past completions) can be staged without
//! fighting the creation-time validation.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

use crate::developer::domain::{Developer, DeveloperId, EmailAddress, PersistedDeveloperData, PersonName};
use crate::project::domain::{PersistedProjectData, Project, ProjectId};
use crate::task::domain::{
    Complexity, PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus,
};
use chrono::{DateTime, NaiveDate, Utc};

/// Builds a developer record with the given activation state.
pub fn developer(first: &str, last: &str, active: bool) -> Developer {
    Developer::from_persisted(PersistedDeveloperData {
        id: DeveloperId::new(),
        name: PersonName::new(first, last).expect("valid name"),
        email: EmailAddress::new(format!(
            "{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase()
        ))
        .expect("valid email"),
        active,
        created_at: utc(2025, 1, 1),
    })
}

/// Builds a project record.
pub fn project(name: &str, client: &str) -> Project {
    Project::from_persisted(PersistedProjectData {
        id: ProjectId::new(),
        name: name.to_owned(),
        client_name: client.to_owned(),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
        end_date: None,
        status: "InProgress".to_owned(),
        created_at: utc(2025, 1, 1),
        updated_at: utc(2025, 1, 1),
    })
}

/// Builds a task record with explicit dates, bypassing creation-time
/// validation.
pub fn task(
    project_id: ProjectId,
    assignee_id: DeveloperId,
    status: TaskStatus,
    complexity: Option<u8>,
    due_date: Option<DateTime<Utc>>,
    completion_date: Option<DateTime<Utc>>,
) -> Task {
    let created = utc(2025, 1, 2);
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        project_id,
        title: "Seeded task".to_owned(),
        description: None,
        assignee_id,
        status,
        priority: TaskPriority::Medium,
        estimated_complexity: complexity.map(|v| Complexity::new(v).expect("valid complexity")),
        due_date,
        completion_date,
        created_at: created,
        updated_at: created,
    })
}

/// Midday UTC timestamp on the given date.
pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(12, 0, 0)
        .expect("valid time")
        .and_utc()
}

/// The given date, as used for "today" in window tests.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
