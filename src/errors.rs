//! Error types for the rowhaus crate
//!
//! This module contains the errors that can be returned by the RowHaus
//! entry point.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowHausError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error(transparent)]
    Mapper(#[from] record_map::MapperError),
}
