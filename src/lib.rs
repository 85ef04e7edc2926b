//! # rowhaus
//!
//! A generic object-relational mapping core for PostgreSQL: register a
//! record type once and get save, find-by-id, update, and delete with no
//! per-type SQL.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rowhaus::prelude::*;
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! pub struct Student {
//!     pub id: i32,
//!     pub name: String,
//!     pub groupname: String,
//!     pub dateofbirth: NaiveDate,
//! }
//!
//! impl Record for Student {
//!     fn type_name() -> &'static str {
//!         "Student"
//!     }
//!
//!     fn fields() -> &'static [FieldDescriptor<Self>] {
//!         record_fields!(Student => [
//!             #[id] id: Integer,
//!             name: Text,
//!             groupname: Text,
//!             dateofbirth: Date,
//!         ])
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "school".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!     );
//!
//!     let rowhaus = RowHaus::new(config).await?;
//!     let students = rowhaus.mapper::<Student>()?;
//!
//!     let student = Student {
//!         id: 12,
//!         name: "Bohdan Petrov".to_string(),
//!         groupname: "I-32".to_string(),
//!         dateofbirth: NaiveDate::from_ymd_opt(2000, 12, 12).unwrap(),
//!     };
//!
//!     students.save(&student).await?;
//!     let found = students.find_by_id(SqlValue::Integer(12)).await?;
//!     println!("Found: {:?}", found);
//!
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::RowHaus;
pub use errors::RowHausError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig, PoolConfig};

// Re-export the engine crates
pub use record_map;
pub use type_mapping;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
