//! Convenience re-exports for common record-map usage

// Core traits
pub use crate::traits::RecordCrud;

// Registration surface
pub use crate::descriptor::{FieldDescriptor, FieldKind, FieldValue, Record, RecordDescriptor};
pub use crate::record_fields;

// Error types
pub use crate::errors::MapperError;

// The mapping engine
pub use crate::generic_mapper::GenericMapper;

// Value type
pub use type_mapping::{SqlValue, ValueError};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use chrono::NaiveDate;
pub use sqlx::PgPool;
