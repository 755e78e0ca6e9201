//! `PostgreSQL` repository implementation for developer storage.

use super::{
    models::{DeveloperRow, NewDeveloperRow},
    schema::developers,
};
use crate::db::PgPool;
use crate::developer::{
    domain::{Developer, DeveloperId, EmailAddress, PersistedDeveloperData, PersonName},
    ports::{DeveloperRepository, DeveloperRepositoryError, DeveloperRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed developer repository.
#[derive(Debug, Clone)]
pub struct PostgresDeveloperRepository {
    pool: PgPool,
}

impl PostgresDeveloperRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> DeveloperRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DeveloperRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(DeveloperRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(DeveloperRepositoryError::persistence)?
    }
}

#[async_trait]
impl DeveloperRepository for PostgresDeveloperRepository {
    async fn store(&self, developer: &Developer) -> DeveloperRepositoryResult<()> {
        let developer_id = developer.id();
        let new_row = to_new_row(developer);

        self.run_blocking(move |connection| {
            diesel::insert_into(developers::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        DeveloperRepositoryError::DuplicateDeveloper(developer_id)
                    }
                    _ => DeveloperRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, developer: &Developer) -> DeveloperRepositoryResult<()> {
        let developer_id = developer.id();
        let active = developer.is_active();

        self.run_blocking(move |connection| {
            let updated = diesel::update(
                developers::table.filter(developers::id.eq(developer_id.into_inner())),
            )
            .set(developers::active.eq(active))
            .execute(connection)
            .map_err(DeveloperRepositoryError::persistence)?;

            if updated == 0 {
                return Err(DeveloperRepositoryError::NotFound(developer_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: DeveloperId) -> DeveloperRepositoryResult<Option<Developer>> {
        self.run_blocking(move |connection| {
            let row = developers::table
                .filter(developers::id.eq(id.into_inner()))
                .select(DeveloperRow::as_select())
                .first::<DeveloperRow>(connection)
                .optional()
                .map_err(DeveloperRepositoryError::persistence)?;
            row.map(row_to_developer).transpose()
        })
        .await
    }

    async fn list_active(&self) -> DeveloperRepositoryResult<Vec<Developer>> {
        self.run_blocking(move |connection| {
            let rows = developers::table
                .filter(developers::active.eq(true))
                .order((developers::first_name.asc(), developers::last_name.asc()))
                .select(DeveloperRow::as_select())
                .load::<DeveloperRow>(connection)
                .map_err(DeveloperRepositoryError::persistence)?;
            rows.into_iter().map(row_to_developer).collect()
        })
        .await
    }

    async fn list_all(&self) -> DeveloperRepositoryResult<Vec<Developer>> {
        self.run_blocking(move |connection| {
            let rows = developers::table
                .order((developers::first_name.asc(), developers::last_name.asc()))
                .select(DeveloperRow::as_select())
                .load::<DeveloperRow>(connection)
                .map_err(DeveloperRepositoryError::persistence)?;
            rows.into_iter().map(row_to_developer).collect()
        })
        .await
    }

    async fn delete(&self, id: DeveloperId) -> DeveloperRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted =
                diesel::delete(developers::table.filter(developers::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(
                            DatabaseErrorKind::ForeignKeyViolation,
                            _,
                        ) => DeveloperRepositoryError::ReferencedByTasks(id),
                        _ => DeveloperRepositoryError::persistence(err),
                    })?;

            if deleted == 0 {
                return Err(DeveloperRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(developer: &Developer) -> NewDeveloperRow {
    NewDeveloperRow {
        id: developer.id().into_inner(),
        first_name: developer.name().first().to_owned(),
        last_name: developer.name().last().to_owned(),
        email: developer.email().as_str().to_owned(),
        active: developer.is_active(),
        created_at: developer.created_at(),
    }
}

fn row_to_developer(row: DeveloperRow) -> DeveloperRepositoryResult<Developer> {
    let DeveloperRow {
        id,
        first_name,
        last_name,
        email,
        active,
        created_at,
    } = row;

    let name =
        PersonName::new(first_name, last_name).map_err(DeveloperRepositoryError::persistence)?;
    let email = EmailAddress::new(email).map_err(DeveloperRepositoryError::persistence)?;

    Ok(Developer::from_persisted(PersistedDeveloperData {
        id: DeveloperId::from_uuid(id),
        name,
        email,
        active,
        created_at,
    }))
}
