//! Error types for developer domain validation.

use thiserror::Error;

/// Errors returned while constructing developer domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeveloperDomainError {
    /// The first name is empty after trimming.
    #[error("first name must not be empty")]
    EmptyFirstName,

    /// The last name is empty after trimming.
    #[error("last name must not be empty")]
    EmptyLastName,

    /// The email address is not of the form `local@domain`.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),
}
