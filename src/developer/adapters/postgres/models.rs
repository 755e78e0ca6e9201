//! Diesel row models for developer persistence.

use super::schema::developers;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for developer records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = developers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DeveloperRow {
    /// Developer identifier.
    pub id: uuid::Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Active flag.
    pub active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for developer records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = developers)]
pub struct NewDeveloperRow {
    /// Developer identifier.
    pub id: uuid::Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Active flag.
    pub active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
