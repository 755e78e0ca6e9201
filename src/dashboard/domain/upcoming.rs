//! Upcoming-tasks window report.

use super::UpcomingTask;
use crate::developer::domain::DeveloperId;
use crate::project::domain::ProjectId;
use crate::task::domain::Task;
use chrono::{Days, NaiveDate};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Computes the upcoming-tasks report over the given tasks.
///
/// Included are open tasks whose due date falls within
/// `[today, today + days]` inclusive, compared date-to-date, ordered by
/// due date ascending. `days` may be any non-negative number; 0 lists
/// only tasks due exactly today. Completed tasks never appear, whatever
/// their due date.
#[must_use]
pub fn upcoming_tasks<S1: BuildHasher, S2: BuildHasher>(
    tasks: &[Task],
    project_names: &HashMap<ProjectId, String, S1>,
    assignee_names: &HashMap<DeveloperId, String, S2>,
    today: NaiveDate,
    days: u32,
) -> Vec<UpcomingTask> {
    let horizon = today
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX);

    let mut rows: Vec<UpcomingTask> = tasks
        .iter()
        .filter(|task| task.is_open())
        .filter_map(|task| {
            let due_date = task.due_date()?;
            let due = due_date.date_naive();
            if due < today || due > horizon {
                return None;
            }
            Some(UpcomingTask {
                title: task.title().to_owned(),
                project_name: project_names
                    .get(&task.project_id())
                    .cloned()
                    .unwrap_or_default(),
                assigned_to: assignee_names
                    .get(&task.assignee_id())
                    .cloned()
                    .unwrap_or_default(),
                status: task.status(),
                priority: task.priority(),
                due_date,
                days_until_due: (due - today).num_days(),
            })
        })
        .collect();
    rows.sort_by_key(|row| row.due_date);
    rows
}
