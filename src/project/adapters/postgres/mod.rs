//! `PostgreSQL` adapters for project portfolio persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresProjectRepository;
