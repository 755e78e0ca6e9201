//! Report row types rendered by the dashboard UI.

use crate::project::domain::ProjectId;
use crate::task::domain::{TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Errors returned while validating dashboard report parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardDomainError {
    /// The upcoming-tasks window is outside the 1..=30 range.
    #[error("number of days must be between 1 and 30, got {0}")]
    InvalidWindow(u32),
}

/// Validated look-ahead window for the upcoming-tasks report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingWindow(u32);

impl UpcomingWindow {
    /// Largest accepted window in days.
    pub const MAX_DAYS: u32 = 30;

    const DEFAULT_DAYS: u32 = 7;

    /// Creates a validated window.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardDomainError::InvalidWindow`] when `days` is
    /// outside 1..=30.
    pub const fn new(days: u32) -> Result<Self, DashboardDomainError> {
        if days < 1 || days > Self::MAX_DAYS {
            return Err(DashboardDomainError::InvalidWindow(days));
        }
        Ok(Self(days))
    }

    /// Returns the window length in days.
    #[must_use]
    pub const fn days(self) -> u32 {
        self.0
    }
}

impl Default for UpcomingWindow {
    fn default() -> Self {
        Self(Self::DEFAULT_DAYS)
    }
}

/// Open-task load of one active developer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperWorkload {
    /// Developer full name (`first last`).
    pub developer_name: String,
    /// Number of open (not completed) tasks assigned to the developer.
    pub open_tasks_count: usize,
    /// Mean estimated complexity over the open tasks carrying one, or 0
    /// when none do. The zero is a deliberate default, not a
    /// missing-data signal.
    pub average_estimated_complexity: f64,
}

/// Task-count summary of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHealth {
    /// Project identifier.
    pub project_id: ProjectId,
    /// Project name.
    pub project_name: String,
    /// Client name.
    pub client_name: String,
    /// Number of tasks referencing the project.
    pub total_tasks: usize,
    /// Number of tasks not yet completed.
    pub open_tasks: usize,
    /// Number of completed tasks.
    pub completed_tasks: usize,
}

/// Delay-risk prediction for one active developer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperDelayRisk {
    /// Developer full name (`first last`).
    pub developer_name: String,
    /// Number of open tasks that carry a due date.
    pub open_tasks_count: usize,
    /// Mean historical delay in whole days over completed tasks that had
    /// both a due and a completion date; 0 with no such history. Early
    /// or on-time completions contribute 0, never a negative number.
    pub avg_delay_days: f64,
    /// Earliest due date among the developer's dated open tasks.
    pub nearest_due_date: Option<DateTime<Utc>>,
    /// Latest due date among the developer's dated open tasks.
    pub latest_due_date: Option<DateTime<Utc>>,
    /// Latest due date shifted by the whole-day average delay; absent
    /// without a latest due date.
    pub predicted_completion_date: Option<DateTime<Utc>>,
    /// Whether the developer's open work is predicted to finish late.
    pub high_risk_flag: bool,
}

/// One row of the upcoming-tasks report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingTask {
    /// Task title.
    pub title: String,
    /// Name of the owning project.
    pub project_name: String,
    /// Full name of the assigned developer.
    pub assigned_to: String,
    /// Task status.
    pub status: TaskStatus,
    /// Task priority.
    pub priority: TaskPriority,
    /// Due date of the task.
    pub due_date: DateTime<Utc>,
    /// Whole days until the due date, measured date-to-date; 0 for tasks
    /// due today.
    pub days_until_due: i64,
}
