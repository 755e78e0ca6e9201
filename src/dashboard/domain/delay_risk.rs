//! Delay-risk prediction from historical lateness.

use super::DeveloperDelayRisk;
use crate::developer::domain::Developer;
use crate::task::domain::{Task, TaskStatus};
use chrono::{DateTime, TimeDelta, Utc};
use std::cmp::Reverse;

/// Computes the delay-risk report over the given developers and tasks.
///
/// One row per active developer (inactive developers are skipped
/// regardless of their task history), ordered by risk flag descending,
/// then by dated-open-task count descending; ties keep their input
/// order.
///
/// The risk flag is raised by any nonzero average historical delay: a
/// developer who has ever completed late is predicted to slip again.
#[must_use]
pub fn developer_delay_risk(developers: &[Developer], tasks: &[Task]) -> Vec<DeveloperDelayRisk> {
    let mut rows: Vec<DeveloperDelayRisk> = developers
        .iter()
        .filter(|developer| developer.is_active())
        .map(|developer| delay_risk_for(developer, tasks))
        .collect();
    rows.sort_by_key(|row| (Reverse(row.high_risk_flag), Reverse(row.open_tasks_count)));
    rows
}

fn delay_risk_for(developer: &Developer, tasks: &[Task]) -> DeveloperDelayRisk {
    let delays: Vec<u32> = tasks
        .iter()
        .filter(|task| {
            task.assignee_id() == developer.id() && task.status() == TaskStatus::Completed
        })
        .filter_map(|task| match (task.due_date(), task.completion_date()) {
            (Some(due), Some(completed)) => Some(delay_days(due, completed)),
            _ => None,
        })
        .collect();
    let avg_delay_days = mean_days(&delays);

    let open_due_dates: Vec<DateTime<Utc>> = tasks
        .iter()
        .filter(|task| task.assignee_id() == developer.id() && task.is_open())
        .filter_map(Task::due_date)
        .collect();
    let nearest_due_date = open_due_dates.iter().min().copied();
    let latest_due_date = open_due_dates.iter().max().copied();
    let predicted_completion_date =
        latest_due_date.and_then(|latest| latest.checked_add_signed(whole_days(avg_delay_days)));

    DeveloperDelayRisk {
        developer_name: developer.full_name(),
        open_tasks_count: open_due_dates.len(),
        avg_delay_days,
        nearest_due_date,
        latest_due_date,
        predicted_completion_date,
        high_risk_flag: avg_delay_days > 0.0,
    }
}

/// Whole days by which the completion exceeded the due date, floored at
/// 0 for early or on-time completions.
fn delay_days(due: DateTime<Utc>, completed: DateTime<Utc>) -> u32 {
    let days = (completed.date_naive() - due.date_naive()).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Mean of the given day counts, 0 for an empty slice.
#[expect(
    clippy::float_arithmetic,
    reason = "the report exposes the average delay as a fractional day count"
)]
fn mean_days(values: &[u32]) -> f64 {
    let Ok(count) = u32::try_from(values.len()) else {
        return 0.0;
    };
    if count == 0 {
        return 0.0;
    }
    let sum: f64 = values.iter().copied().map(f64::from).sum();
    sum / f64::from(count)
}

/// Truncates a fractional day count to a whole-day shift, matching the
/// date arithmetic the prediction is defined over.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the fractional part is dropped on purpose; the value is a small non-negative day count"
)]
fn whole_days(days: f64) -> TimeDelta {
    TimeDelta::try_days(days.trunc() as i64).unwrap_or_else(TimeDelta::zero)
}
