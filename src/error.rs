//! Cross-cutting error classification.
//!
//! Service errors map onto three user-facing outcome classes. The HTTP
//! boundary (outside this crate) translates them to status codes and must
//! not leak [`ErrorClass::Unexpected`] detail to callers.

/// Outcome class of a failed service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// A referenced project, task, or developer does not exist.
    NotFound,
    /// A field value violates a validation rule; the error message names
    /// the rule.
    Validation,
    /// A store or infrastructure failure; terminal for the request, never
    /// retried at this layer.
    Unexpected,
}
