//! Developer aggregate root.

use super::{DeveloperId, EmailAddress, PersonName};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Developer aggregate root.
///
/// A developer may be referenced by any number of tasks as their assignee.
/// Deactivation only excludes the developer from active listings and from
/// being assigned new tasks; existing tasks keep their assignee link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    id: DeveloperId,
    name: PersonName,
    email: EmailAddress,
    active: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted developer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDeveloperData {
    /// Persisted developer identifier.
    pub id: DeveloperId,
    /// Persisted name.
    pub name: PersonName,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted active flag.
    pub active: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Developer {
    /// Creates a new active developer.
    #[must_use]
    pub fn new(name: PersonName, email: EmailAddress, clock: &impl Clock) -> Self {
        Self {
            id: DeveloperId::new(),
            name,
            email,
            active: true,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a developer from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedDeveloperData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            active: data.active,
            created_at: data.created_at,
        }
    }

    /// Returns the developer identifier.
    #[must_use]
    pub const fn id(&self) -> DeveloperId {
        self.id
    }

    /// Returns the developer name.
    #[must_use]
    pub const fn name(&self) -> &PersonName {
        &self.name
    }

    /// Returns the developer's full name (`first last`).
    #[must_use]
    pub fn full_name(&self) -> String {
        self.name.full()
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns whether the developer is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Marks the developer inactive.
    pub const fn deactivate(&mut self) {
        self.active = false;
    }

    /// Marks the developer active.
    pub const fn activate(&mut self) {
        self.active = true;
    }
}
