//! `PostgreSQL` repository implementation for task lifecycle storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::db::PgPool;
use crate::developer::domain::DeveloperId;
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{
        Complexity, PageRequest, PagedResult, PersistedTaskData, Task, TaskFilter, TaskId,
        TaskPriority, TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changeset = to_changeset(task);

        self.run_blocking(move |connection| {
            let updated = diesel::update(tasks::table.filter(tasks::id.eq(task_id.into_inner())))
                .set(&changeset)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

            if deleted == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .order(tasks::created_at.desc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_by_assignee(&self, assignee: DeveloperId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::assignee_id.eq(assignee.into_inner()))
                .order(tasks::created_at.desc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_by_project(
        &self,
        project: ProjectId,
        filter: &TaskFilter,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let filter = *filter;
        self.run_blocking(move |connection| load_filtered(connection, project, &filter, None))
            .await
    }

    async fn list_by_project_paged(
        &self,
        project: ProjectId,
        filter: &TaskFilter,
        page: &PageRequest,
    ) -> TaskRepositoryResult<PagedResult<Task>> {
        let filter = *filter;
        let page = *page;
        self.run_blocking(move |connection| {
            let total = count_filtered(connection, project, &filter)?;
            let items = load_filtered(connection, project, &filter, Some(&page))?;
            Ok(PagedResult {
                items,
                total_count: total,
                page_number: page.page(),
                page_size: page.page_size(),
            })
        })
        .await
    }

    async fn count_by_assignee(&self, assignee: DeveloperId) -> TaskRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            let total: i64 = tasks::table
                .filter(tasks::assignee_id.eq(assignee.into_inner()))
                .count()
                .get_result(connection)
                .map_err(TaskRepositoryError::persistence)?;
            usize::try_from(total).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn count_by_project(&self, project: ProjectId) -> TaskRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            let total: i64 = tasks::table
                .filter(tasks::project_id.eq(project.into_inner()))
                .count()
                .get_result(connection)
                .map_err(TaskRepositoryError::persistence)?;
            usize::try_from(total).map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

fn load_filtered(
    connection: &mut PgConnection,
    project: ProjectId,
    filter: &TaskFilter,
    page: Option<&PageRequest>,
) -> TaskRepositoryResult<Vec<Task>> {
    let mut query = tasks::table
        .filter(tasks::project_id.eq(project.into_inner()))
        .into_boxed();
    if let Some(status) = filter.status() {
        query = query.filter(tasks::status.eq(status.as_str()));
    }
    if let Some(assignee) = filter.assignee() {
        query = query.filter(tasks::assignee_id.eq(assignee.into_inner()));
    }
    query = query.order(tasks::created_at.desc());
    if let Some(page) = page {
        query = query.offset(page.offset()).limit(page.limit());
    }

    let rows = query
        .load::<TaskRow>(connection)
        .map_err(TaskRepositoryError::persistence)?;
    rows.into_iter().map(row_to_task).collect()
}

fn count_filtered(
    connection: &mut PgConnection,
    project: ProjectId,
    filter: &TaskFilter,
) -> TaskRepositoryResult<usize> {
    let mut query = tasks::table
        .filter(tasks::project_id.eq(project.into_inner()))
        .count()
        .into_boxed();
    if let Some(status) = filter.status() {
        query = query.filter(tasks::status.eq(status.as_str()));
    }
    if let Some(assignee) = filter.assignee() {
        query = query.filter(tasks::assignee_id.eq(assignee.into_inner()));
    }

    let total: i64 = query
        .get_result(connection)
        .map_err(TaskRepositoryError::persistence)?;
    usize::try_from(total).map_err(TaskRepositoryError::persistence)
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        project_id: task.project_id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        assignee_id: task.assignee_id().into_inner(),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        estimated_complexity: task.estimated_complexity().map(|c| i16::from(c.value())),
        due_date: task.due_date(),
        completion_date: task.completion_date(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn to_changeset(task: &Task) -> TaskChangeset {
    TaskChangeset {
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        estimated_complexity: task.estimated_complexity().map(|c| i16::from(c.value())),
        completion_date: task.completion_date(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        project_id,
        title,
        description,
        assignee_id,
        status: persisted_status,
        priority: persisted_priority,
        estimated_complexity,
        due_date,
        completion_date,
        created_at,
        updated_at,
    } = row;

    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let priority = TaskPriority::try_from(persisted_priority.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let estimated_complexity = estimated_complexity
        .map(|raw| {
            u8::try_from(raw)
                .map_err(TaskRepositoryError::persistence)
                .and_then(|value| Complexity::new(value).map_err(TaskRepositoryError::persistence))
        })
        .transpose()?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        project_id: ProjectId::from_uuid(project_id),
        title,
        description,
        assignee_id: DeveloperId::from_uuid(assignee_id),
        status,
        priority,
        estimated_complexity,
        due_date,
        completion_date,
        created_at,
        updated_at,
    }))
}
