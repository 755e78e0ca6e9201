//! Task aggregate root.

use super::{Complexity, TaskDomainError, TaskId, TaskPriority, TaskStatus};
use crate::developer::domain::DeveloperId;
use crate::project::domain::ProjectId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// Invariant: `completion_date` is present exactly when `status` is
/// [`TaskStatus::Completed`]. The field is system-managed; callers never
/// supply it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: String,
    description: Option<String>,
    assignee_id: DeveloperId,
    status: TaskStatus,
    priority: TaskPriority,
    estimated_complexity: Option<Complexity>,
    due_date: Option<DateTime<Utc>>,
    completion_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Validated input for constructing a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Owning project.
    pub project_id: ProjectId,
    /// Task title (must be non-empty after trimming).
    pub title: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Assigned developer.
    pub assignee_id: DeveloperId,
    /// Initial status.
    pub status: TaskStatus,
    /// Initial priority.
    pub priority: TaskPriority,
    /// Optional estimated complexity.
    pub estimated_complexity: Option<Complexity>,
    /// Optional due date; must not lie before the creation instant.
    pub due_date: Option<DateTime<Utc>>,
}

/// Partial update applied by the status-transition operation.
///
/// Absent fields are left untouched; absent never means "clear".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusUpdate {
    /// New status, if any.
    pub status: Option<TaskStatus>,
    /// New priority, if any.
    pub priority: Option<TaskPriority>,
    /// New estimated complexity, if any.
    pub estimated_complexity: Option<Complexity>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning project.
    pub project_id: ProjectId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted assignee.
    pub assignee_id: DeveloperId,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted estimated complexity, if any.
    pub estimated_complexity: Option<Complexity>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted completion date, if any.
    pub completion_date: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task.
    ///
    /// A task created directly in [`TaskStatus::Completed`] gets its
    /// completion date stamped at the creation instant, keeping the
    /// completion-date invariant from the first write.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title trims to
    /// nothing and [`TaskDomainError::DueDateInPast`] when a supplied due
    /// date lies before the current clock reading.
    pub fn new(data: NewTaskData, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let timestamp = clock.utc();
        let title = data.title.trim().to_owned();
        if title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        if let Some(due_date) = data.due_date
            && due_date < timestamp
        {
            return Err(TaskDomainError::DueDateInPast {
                due_date,
                now: timestamp,
            });
        }

        let completion_date = (data.status == TaskStatus::Completed).then_some(timestamp);
        Ok(Self {
            id: TaskId::new(),
            project_id: data.project_id,
            title,
            description: data.description,
            assignee_id: data.assignee_id,
            status: data.status,
            priority: data.priority,
            estimated_complexity: data.estimated_complexity,
            due_date: data.due_date,
            completion_date,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            title: data.title,
            description: data.description,
            assignee_id: data.assignee_id,
            status: data.status,
            priority: data.priority,
            estimated_complexity: data.estimated_complexity,
            due_date: data.due_date,
            completion_date: data.completion_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the assigned developer.
    #[must_use]
    pub const fn assignee_id(&self) -> DeveloperId {
        self.assignee_id
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns whether the task counts as open (not completed).
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the estimated complexity, if any.
    #[must_use]
    pub const fn estimated_complexity(&self) -> Option<Complexity> {
        self.estimated_complexity
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the completion date, if any.
    #[must_use]
    pub const fn completion_date(&self) -> Option<DateTime<Utc>> {
        self.completion_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial status update.
    ///
    /// Entering [`TaskStatus::Completed`] from any other status stamps the
    /// completion date; leaving it clears the date again. The update
    /// timestamp is refreshed unconditionally, even for an empty update.
    pub fn apply_status_update(&mut self, update: StatusUpdate, clock: &impl Clock) {
        let previous_status = self.status;
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(estimated_complexity) = update.estimated_complexity {
            self.estimated_complexity = Some(estimated_complexity);
        }

        let timestamp = clock.utc();
        if self.status == TaskStatus::Completed && previous_status != TaskStatus::Completed {
            self.completion_date = Some(timestamp);
        } else if self.status != TaskStatus::Completed && previous_status == TaskStatus::Completed {
            self.completion_date = None;
        }
        self.updated_at = timestamp;
    }
}
