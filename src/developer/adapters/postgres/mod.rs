//! `PostgreSQL` adapters for developer directory persistence.

mod models;
mod repository;
mod schema;

pub use repository::PostgresDeveloperRepository;
