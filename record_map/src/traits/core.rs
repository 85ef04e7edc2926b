//! Trait definitions
//!
//! This module defines the core trait for single-table CRUD by identifier.

use async_trait::async_trait;
use std::fmt::Debug;
use type_mapping::SqlValue;

use crate::descriptor::Record;
use crate::errors::MapperError;

/// The four mapping operations every record mapper provides.
///
/// "Not found" is a normal result, never an error: `find_by_id` returns
/// `None` and `delete` returns an affected count of 0.
#[async_trait]
pub trait RecordCrud: Clone + Send + Sync + Debug {
    /// The record type this mapper operates on
    type Model: Record;

    /// Insert the record; returns the number of rows affected (expected 1)
    async fn save(&self, record: &Self::Model) -> Result<u64, MapperError>;

    /// Look up one record by its identifier value
    async fn find_by_id(&self, id: SqlValue) -> Result<Option<Self::Model>, MapperError>;

    /// Update the stored row matching the record's identifier; updating a
    /// row that does not exist is an error
    async fn update(&self, record: &Self::Model) -> Result<u64, MapperError>;

    /// Delete by identifier value; returns the number of rows affected
    /// (0 meaning nothing to delete)
    async fn delete(&self, id: SqlValue) -> Result<u64, MapperError>;
}
