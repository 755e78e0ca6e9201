//! Pure aggregation logic behind the dashboard reports.

mod delay_risk;
mod health;
mod reports;
mod upcoming;
mod workload;

pub use delay_risk::developer_delay_risk;
pub use health::project_health;
pub use reports::{
    DashboardDomainError, DeveloperDelayRisk, DeveloperWorkload, ProjectHealth, UpcomingTask,
    UpcomingWindow,
};
pub use upcoming::upcoming_tasks;
pub use workload::developer_workload;
