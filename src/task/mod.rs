//! Task lifecycle management for Atelier.
//!
//! This module implements validated task creation (existing project,
//! active assignee, enumerated status and priority, bounded complexity,
//! non-past due date), partial status updates with completion-date
//! bookkeeping, hard deletion, and filtered/paged listing. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
