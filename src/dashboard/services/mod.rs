//! Application services for the dashboard reports.

mod reports;

pub use reports::{DashboardError, DashboardResult, DashboardService};
