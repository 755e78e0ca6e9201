//! Filtering and paging types for task listings.

use super::{Task, TaskDomainError, TaskStatus};
use crate::developer::domain::DeveloperId;
use serde::Serialize;

/// Optional filters applied to a per-project task listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    assignee: Option<DeveloperId>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            status: None,
            assignee: None,
        }
    }

    /// Restricts the listing to tasks with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts the listing to tasks assigned to the given developer.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: DeveloperId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Returns the status restriction, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the assignee restriction, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<DeveloperId> {
        self.assignee
    }

    /// Returns whether the task passes every restriction.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|status| task.status() == status)
            && self
                .assignee
                .is_none_or(|assignee| task.assignee_id() == assignee)
    }
}

/// Validated page coordinates for a paged listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Largest accepted page size.
    pub const MAX_PAGE_SIZE: u32 = 100;

    /// Creates a validated page request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPageNumber`] when `page` is 0 and
    /// [`TaskDomainError::InvalidPageSize`] when `page_size` is outside
    /// 1..=100.
    pub const fn new(page: u32, page_size: u32) -> Result<Self, TaskDomainError> {
        if page < 1 {
            return Err(TaskDomainError::InvalidPageNumber(page));
        }
        if page_size < 1 || page_size > Self::MAX_PAGE_SIZE {
            return Err(TaskDomainError::InvalidPageSize(page_size));
        }
        Ok(Self { page, page_size })
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the number of records preceding this page.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.page_size)
    }

    /// Returns the page size as a query limit.
    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

/// One page of a filtered collection plus paging metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    /// Records on this page.
    pub items: Vec<T>,
    /// Total number of records matching the filter, across all pages.
    pub total_count: usize,
    /// 1-based page number.
    pub page_number: u32,
    /// Requested page size.
    pub page_size: u32,
}

impl<T> PagedResult<T> {
    /// Maps the items of this page, keeping the paging metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }
}
