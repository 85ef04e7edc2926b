//! Core rowhaus functionality
//!
//! This module contains the main RowHaus struct, which owns the database
//! pool and hands out mapping engines bound to record types.

use sqlx::PgPool;
use std::time::Duration;

use crate::errors::RowHausError;
use config::DatabaseConfig;
use record_map::{GenericMapper, MapperError, Record};

/// Connection provider and entry point: builds the pool from configuration
/// and constructs mappers for registered record types.
pub struct RowHaus {
    pool: PgPool,
}

impl RowHaus {
    /// Create a new RowHaus with a database connection pool
    pub async fn new(config: DatabaseConfig) -> Result<Self, RowHausError> {
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.pool.max_connections)
            .min_connections(config.pool.min_connections)
            .acquire_timeout(Duration::from_secs(config.pool.acquire_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.pool.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.pool.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.pool.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;

        Ok(Self { pool })
    }

    /// Wrap an already-constructed pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Construct the mapping engine for a record type.
    ///
    /// Fails when the type's registration is invalid (no identifier field),
    /// before any SQL reaches the database.
    pub fn mapper<T: Record>(&self) -> Result<GenericMapper<T>, MapperError> {
        GenericMapper::new(self.pool.clone())
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), RowHausError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
