//! Bounded estimated-complexity score.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Estimated complexity of a task, an integer in 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Complexity(u8);

impl Complexity {
    /// Smallest accepted complexity score.
    pub const MIN: u8 = 1;
    /// Largest accepted complexity score.
    pub const MAX: u8 = 5;

    /// Creates a validated complexity score.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidComplexity`] when the value is
    /// outside 1..=5.
    pub const fn new(value: u8) -> Result<Self, TaskDomainError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(TaskDomainError::InvalidComplexity(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying score.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
