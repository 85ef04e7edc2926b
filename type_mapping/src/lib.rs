//! Unified value mapping between Rust record fields and PostgreSQL
//! This crate provides the closed value type shared across the rowhaus ecosystem

pub mod value;

pub use value::{SqlValue, ValueError, DATE_FORMAT};
