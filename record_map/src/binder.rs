//! Parameter binding
//!
//! Maps each extracted value to the correctly typed bind call. The match is
//! exhaustive over the closed value set, so a value without a bind mapping
//! cannot reach the driver.

use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::Postgres;
use type_mapping::SqlValue;

/// Bind a single value with its type-directed bind call
pub fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: SqlValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        SqlValue::Integer(v) => query.bind(v),
        SqlValue::Float(v) => query.bind(v),
        SqlValue::Text(v) => query.bind(v),
        SqlValue::Date(v) => query.bind(v),
        SqlValue::Null => query.bind(Option::<String>::None),
    }
}

/// Bind a sequence of values in placeholder order
pub fn bind_values<'q, I>(
    mut query: Query<'q, Postgres, PgArguments>,
    values: I,
) -> Query<'q, Postgres, PgArguments>
where
    I: IntoIterator<Item = SqlValue>,
{
    for value in values {
        query = bind_value(query, value);
    }
    query
}
