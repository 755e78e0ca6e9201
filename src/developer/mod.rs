//! Developer directory for Atelier.
//!
//! This module tracks the developers tasks can be assigned to: registering
//! them with validated names and email addresses, activating and
//! deactivating them, and removing them once no task references them any
//! longer. The module follows hexagonal architecture:
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
