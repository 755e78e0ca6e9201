//! In-memory repository for task lifecycle tests.

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::developer::domain::DeveloperId;
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{PageRequest, PagedResult, Task, TaskFilter, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_tasks(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.values().cloned().collect())
    }
}

/// Sorts tasks newest first, with the identifier as a stable tiebreak.
fn newest_first(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by_key(|t| (Reverse(t.created_at()), t.id().into_inner()));
    tasks
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if !state.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        Ok(newest_first(self.read_tasks()?))
    }

    async fn list_by_assignee(&self, assignee: DeveloperId) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.read_tasks()?;
        Ok(newest_first(
            tasks
                .into_iter()
                .filter(|t| t.assignee_id() == assignee)
                .collect(),
        ))
    }

    async fn list_by_project(
        &self,
        project: ProjectId,
        filter: &TaskFilter,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.read_tasks()?;
        Ok(newest_first(
            tasks
                .into_iter()
                .filter(|t| t.project_id() == project && filter.matches(t))
                .collect(),
        ))
    }

    async fn list_by_project_paged(
        &self,
        project: ProjectId,
        filter: &TaskFilter,
        page: &PageRequest,
    ) -> TaskRepositoryResult<PagedResult<Task>> {
        let matching = self.list_by_project(project, filter).await?;
        let total_count = matching.len();

        let skip = usize::try_from(page.offset())
            .map_err(TaskRepositoryError::persistence)?;
        let take = usize::try_from(page.limit())
            .map_err(TaskRepositoryError::persistence)?;
        let items = matching.into_iter().skip(skip).take(take).collect();

        Ok(PagedResult {
            items,
            total_count,
            page_number: page.page(),
            page_size: page.page_size(),
        })
    }

    async fn count_by_assignee(&self, assignee: DeveloperId) -> TaskRepositoryResult<usize> {
        let tasks = self.read_tasks()?;
        Ok(tasks.iter().filter(|t| t.assignee_id() == assignee).count())
    }

    async fn count_by_project(&self, project: ProjectId) -> TaskRepositoryResult<usize> {
        let tasks = self.read_tasks()?;
        Ok(tasks.iter().filter(|t| t.project_id() == project).count())
    }
}
