//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    CreateTaskRequest, TaskDetails, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
    UpdateTaskStatusRequest,
};
