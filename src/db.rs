//! `PostgreSQL` connection pool configuration.
//!
//! The pool is shared by every repository adapter; services never touch
//! connections directly.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::env;
use thiserror::Error;

/// `PostgreSQL` connection pool type used by repository adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Environment variable holding the database connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable overriding the maximum pool size.
pub const POOL_SIZE_VAR: &str = "ATELIER_POOL_SIZE";

const DEFAULT_POOL_SIZE: u32 = 10;

/// Errors raised while reading configuration or building the pool.
#[derive(Debug, Error)]
pub enum DatabaseConfigError {
    /// The `DATABASE_URL` variable is unset or empty.
    #[error("environment variable {DATABASE_URL_VAR} must be set")]
    MissingDatabaseUrl,

    /// The pool size override is not a positive integer.
    #[error("invalid {POOL_SIZE_VAR} value '{0}', expected a positive integer")]
    InvalidPoolSize(String),

    /// The pool could not be constructed.
    #[error("failed to build connection pool: {0}")]
    PoolBuild(#[from] diesel::r2d2::PoolError),
}

/// Connection settings for the repository adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    url: String,
    pool_size: u32,
}

impl DatabaseConfig {
    /// Creates a configuration with the default pool size.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }

    /// Overrides the maximum pool size.
    #[must_use]
    pub const fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseConfigError::MissingDatabaseUrl`] when
    /// `DATABASE_URL` is unset or empty, and
    /// [`DatabaseConfigError::InvalidPoolSize`] when `ATELIER_POOL_SIZE`
    /// is present but not a positive integer.
    pub fn from_env() -> Result<Self, DatabaseConfigError> {
        let url = env::var(DATABASE_URL_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(DatabaseConfigError::MissingDatabaseUrl)?;

        let mut config = Self::new(url);
        if let Ok(raw) = env::var(POOL_SIZE_VAR) {
            let pool_size = raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| DatabaseConfigError::InvalidPoolSize(raw.clone()))?;
            config = config.with_pool_size(pool_size);
        }
        Ok(config)
    }

    /// Returns the connection string.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the maximum pool size.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }

    /// Builds an r2d2 connection pool from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseConfigError::PoolBuild`] when the pool cannot be
    /// constructed.
    pub fn build_pool(&self) -> Result<PgPool, DatabaseConfigError> {
        let manager = ConnectionManager::<PgConnection>::new(&self.url);
        let pool = Pool::builder().max_size(self.pool_size).build(manager)?;
        Ok(pool)
    }
}
