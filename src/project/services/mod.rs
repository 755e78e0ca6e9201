//! Application services for the project portfolio.

mod portfolio;

pub use portfolio::{
    CreateProjectRequest, ProjectPortfolioError, ProjectPortfolioResult, ProjectPortfolioService,
    ProjectStats, ProjectTasksQuery,
};
