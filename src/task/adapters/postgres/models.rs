//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Assigned developer.
    pub assignee_id: uuid::Uuid,
    /// Workflow status.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Optional estimated complexity.
    pub estimated_complexity: Option<i16>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional completion date.
    pub completion_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Assigned developer.
    pub assignee_id: uuid::Uuid,
    /// Workflow status.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Optional estimated complexity.
    pub estimated_complexity: Option<i16>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Optional completion date.
    pub completion_date: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Update model applied by the status-transition operation.
///
/// `treat_none_as_null` lets a cleared completion date reach the row as
/// SQL `NULL` instead of being skipped.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Workflow status.
    pub status: String,
    /// Priority.
    pub priority: String,
    /// Optional estimated complexity.
    pub estimated_complexity: Option<i16>,
    /// Optional completion date.
    pub completion_date: Option<DateTime<Utc>>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
