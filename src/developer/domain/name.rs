//! Validated scalar types for the developer directory.

use super::DeveloperDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A developer's first and last name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName {
    first: String,
    last: String,
}

impl PersonName {
    /// Creates a validated person name.
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperDomainError::EmptyFirstName`] or
    /// [`DeveloperDomainError::EmptyLastName`] when either part is empty
    /// after trimming.
    pub fn new(
        first: impl Into<String>,
        last: impl Into<String>,
    ) -> Result<Self, DeveloperDomainError> {
        let trimmed_first = first.into().trim().to_owned();
        let trimmed_last = last.into().trim().to_owned();
        if trimmed_first.is_empty() {
            return Err(DeveloperDomainError::EmptyFirstName);
        }
        if trimmed_last.is_empty() {
            return Err(DeveloperDomainError::EmptyLastName);
        }
        Ok(Self {
            first: trimmed_first,
            last: trimmed_last,
        })
    }

    /// Returns the first name.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Returns the last name.
    #[must_use]
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Returns `first last` joined with a single space.
    #[must_use]
    pub fn full(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

/// Validated email address.
///
/// Validation is deliberately shallow (`local@domain` with non-empty
/// parts); deliverability is not this layer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// # Errors
    ///
    /// Returns [`DeveloperDomainError::InvalidEmail`] when the value does
    /// not contain exactly one `@` with non-empty parts on both sides.
    pub fn new(value: impl Into<String>) -> Result<Self, DeveloperDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        let mut segments = normalized.split('@');
        let local = segments.next().unwrap_or_default();
        let domain = segments.next().unwrap_or_default();
        let has_more_segments = segments.next().is_some();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && !has_more_segments
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(DeveloperDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
