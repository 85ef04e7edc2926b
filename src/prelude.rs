//! Convenience re-exports for common rowhaus usage
//!
//! This prelude module re-exports the most commonly used items from the
//! rowhaus ecosystem, making it easier to import everything you need with a
//! single use statement.
//!
//! # Example
//!
//! ```rust
//! use rowhaus::prelude::*;
//! ```

// Core rowhaus components
pub use crate::core::RowHaus;
pub use crate::errors::RowHausError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig, PoolConfig};

// Re-export commonly used record-map types for convenience
pub use record_map::prelude::*;

// Re-export the engine crate for qualified access
pub use record_map;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;

// Commonly used sqlx types
pub use sqlx::{PgPool, Row};
