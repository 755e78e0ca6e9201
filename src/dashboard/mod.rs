//! Dashboard analytics for Atelier.
//!
//! Four read-only reports computed over the stored developers, projects,
//! and tasks: per-developer workload, per-project health counts, a
//! delay-risk prediction derived from historical lateness, and the list
//! of tasks due within a caller-supplied window. Reports have no side
//! effects and fail only when the store is unavailable.
//!
//! The aggregation algorithms are pure functions in [`domain`]; the
//! service in [`services`] feeds them from the repositories.

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
