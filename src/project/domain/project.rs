//! Project aggregate root.

use super::{ProjectDomainError, ProjectId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Default status assigned to newly created projects.
pub const DEFAULT_PROJECT_STATUS: &str = "Planned";

/// Project aggregate root.
///
/// Project status is stored as free text ("Planned", "InProgress",
/// "Completed" by convention) and is not constrained at this layer; only
/// task status and priority are validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    client_name: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted project name.
    pub name: String,
    /// Persisted client name.
    pub client_name: String,
    /// Persisted start date.
    pub start_date: NaiveDate,
    /// Persisted end date, if any.
    pub end_date: Option<NaiveDate>,
    /// Persisted free-form status.
    pub status: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project.
    ///
    /// A missing status defaults to [`DEFAULT_PROJECT_STATUS`].
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] or
    /// [`ProjectDomainError::EmptyClientName`] when either name is empty
    /// after trimming.
    pub fn new(
        name: impl Into<String>,
        client_name: impl Into<String>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        status: Option<String>,
        clock: &impl Clock,
    ) -> Result<Self, ProjectDomainError> {
        let trimmed_name = name.into().trim().to_owned();
        if trimmed_name.is_empty() {
            return Err(ProjectDomainError::EmptyName);
        }
        let trimmed_client = client_name.into().trim().to_owned();
        if trimmed_client.is_empty() {
            return Err(ProjectDomainError::EmptyClientName);
        }

        let timestamp = clock.utc();
        Ok(Self {
            id: ProjectId::new(),
            name: trimmed_name,
            client_name: trimmed_client,
            start_date,
            end_date,
            status: status.unwrap_or_else(|| DEFAULT_PROJECT_STATUS.to_owned()),
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            client_name: data.client_name,
            start_date: data.start_date,
            end_date: data.end_date,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the client name.
    #[must_use]
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the end date, if any.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Returns the free-form status.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
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
}
