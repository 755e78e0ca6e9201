//! In-memory end-to-end tests for the tracking core.
//!
//! Tests are organized into modules by flow:
//! - `task_flow_tests`: creation, status transitions, restricted deletes
//! - `dashboard_flow_tests`: reports over a seeded portfolio

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for assertion clarity"
)]

mod in_memory {
    pub mod helpers;

    mod dashboard_flow_tests;
    mod task_flow_tests;
}
