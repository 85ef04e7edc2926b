//! Record Map - Core record-to-table mapping layer for rowhaus
//!
//! This crate provides the generic mapping engine: field descriptors and
//! registration, SQL construction, type-directed parameter binding, row
//! hydration, and the mapper facade that composes them into single-table
//! CRUD by identifier.

pub mod binder;
pub mod descriptor;
pub mod errors;
pub mod generic_mapper;
pub mod hydrate;
mod macros;
pub mod prelude;
pub mod sql_builder;
pub mod traits;

pub use descriptor::{FieldDescriptor, FieldKind, FieldValue, Record, RecordDescriptor};
pub use errors::MapperError;
pub use generic_mapper::GenericMapper;
pub use traits::RecordCrud;
pub use type_mapping::{SqlValue, ValueError};

use sqlx::PgPool;

pub type DbPool = PgPool;
