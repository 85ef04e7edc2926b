//! Value type definitions
//!
//! This module provides the tagged value type used for parameter
//! binding and row hydration, and conversions into it.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical text form for date values, e.g. "2000-12-12"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Conversion errors for values that have no SQL mapping
#[derive(Debug, Clone, PartialEq)]
pub enum ValueError {
    /// The value's runtime type has no bind/column mapping
    UnsupportedType(String),
    /// Date text did not match the canonical `YYYY-MM-DD` form
    InvalidDate(String),
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::UnsupportedType(what) => {
                write!(f, "Value of type '{}' has no SQL mapping", what)
            }
            ValueError::InvalidDate(text) => {
                write!(f, "Date text '{}' does not match {}", text, DATE_FORMAT)
            }
        }
    }
}

impl std::error::Error for ValueError {}

/// Closed set of column value types the mapping core understands.
///
/// Every field of a registered record carries one of these kinds; the
/// parameter binder is an exhaustive match over this enum, so a value
/// without a bind mapping cannot reach the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Integer(i32),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Null,
}

impl SqlValue {
    /// Variant name, used in diagnostics
    pub fn variant_name(&self) -> &'static str {
        match self {
            SqlValue::Integer(_) => "Integer",
            SqlValue::Float(_) => "Float",
            SqlValue::Text(_) => "Text",
            SqlValue::Date(_) => "Date",
            SqlValue::Null => "Null",
        }
    }

    /// Parse a date value from its canonical text form
    pub fn date_from_str(text: &str) -> Result<Self, ValueError> {
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(SqlValue::Date)
            .map_err(|_| ValueError::InvalidDate(text.to_string()))
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Integer(v) => write!(f, "{}", v),
            SqlValue::Float(v) => write!(f, "{}", v),
            SqlValue::Text(v) => write!(f, "{}", v),
            SqlValue::Date(v) => write!(f, "{}", v.format(DATE_FORMAT)),
            SqlValue::Null => write!(f, "NULL"),
        }
    }
}

/// Convert basic Rust types to SqlValue
impl From<i32> for SqlValue {
    fn from(val: i32) -> Self {
        SqlValue::Integer(val)
    }
}

impl From<i16> for SqlValue {
    fn from(val: i16) -> Self {
        SqlValue::Integer(val as i32)
    }
}

impl From<f64> for SqlValue {
    fn from(val: f64) -> Self {
        SqlValue::Float(val)
    }
}

impl From<f32> for SqlValue {
    fn from(val: f32) -> Self {
        SqlValue::Float(val as f64)
    }
}

impl From<String> for SqlValue {
    fn from(val: String) -> Self {
        SqlValue::Text(val)
    }
}

impl From<&str> for SqlValue {
    fn from(val: &str) -> Self {
        SqlValue::Text(val.to_string())
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(val: NaiveDate) -> Self {
        SqlValue::Date(val)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}

/// Conversion from dynamic JSON input.
///
/// Strings matching the canonical date form become dates; integers must
/// fit the INTEGER column range. Shapes with no column mapping (bool,
/// array, object) are rejected rather than coerced.
impl TryFrom<serde_json::Value> for SqlValue {
    type Error = ValueError;

    fn try_from(value: serde_json::Value) -> Result<Self, ValueError> {
        match value {
            serde_json::Value::String(s) => {
                if let Ok(date) = SqlValue::date_from_str(&s) {
                    Ok(date)
                } else {
                    Ok(SqlValue::Text(s))
                }
            }
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i32::try_from(i)
                        .map(SqlValue::Integer)
                        .map_err(|_| ValueError::UnsupportedType(format!("integer {} out of range", i)))
                } else if let Some(f) = n.as_f64() {
                    Ok(SqlValue::Float(f))
                } else {
                    Err(ValueError::UnsupportedType(n.to_string()))
                }
            }
            serde_json::Value::Null => Ok(SqlValue::Null),
            serde_json::Value::Bool(_) => Err(ValueError::UnsupportedType("bool".to_string())),
            serde_json::Value::Array(_) => Err(ValueError::UnsupportedType("array".to_string())),
            serde_json::Value::Object(_) => Err(ValueError::UnsupportedType("object".to_string())),
        }
    }
}
