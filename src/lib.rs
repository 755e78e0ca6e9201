//! Atelier: project and task tracking core.
//!
//! This crate provides the backend core for a project/task management
//! dashboard: developer and project directories, a validated task
//! lifecycle, and the read-only analytics reports the dashboard renders.
//!
//! # Architecture
//!
//! Atelier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, memory)
//!
//! # Modules
//!
//! - [`developer`]: Developer directory and activation lifecycle
//! - [`project`]: Project portfolio and per-project task listings
//! - [`task`]: Validated task creation, status transitions, and deletion
//! - [`dashboard`]: Workload, health, delay-risk, and due-date reports
//! - [`db`]: PostgreSQL connection pool configuration
//! - [`error`]: User-facing outcome classes for failed operations

pub mod dashboard;
pub mod db;
pub mod developer;
pub mod error;
pub mod project;
pub mod task;
