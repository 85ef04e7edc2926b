//! Row hydration
//!
//! Builds a typed record from a result row: start from the zero-valued
//! instance, then read each column by field name with the kind-directed
//! decode and assign it through the descriptor.

use sqlx::postgres::PgRow;
use sqlx::Row;
use type_mapping::SqlValue;

use crate::descriptor::{FieldDescriptor, FieldKind, Record, RecordDescriptor};
use crate::errors::MapperError;

/// Hydrate one row into a new record instance.
///
/// An absent column or a decode failure is a hydration error; a column
/// whose decoded variant the field's assigner refuses is a kind mismatch.
/// SQL NULL hydrates as the field's zero value.
pub fn hydrate_row<T: Record>(
    descriptor: &RecordDescriptor<T>,
    row: &PgRow,
) -> Result<T, MapperError> {
    let mut record = T::default();
    for field in descriptor.fields() {
        let value = read_column(row, field, descriptor.table_name())?;
        (field.set)(&mut record, value).map_err(|unexpected| {
            MapperError::hydration_mismatch(descriptor.table_name(), field.name, &unexpected)
        })?;
    }
    Ok(record)
}

fn read_column<T: Record>(
    row: &PgRow,
    field: &FieldDescriptor<T>,
    table: &str,
) -> Result<SqlValue, MapperError> {
    let value = match field.kind {
        FieldKind::Integer => row
            .try_get::<Option<i32>, _>(field.name)
            .map(|v| v.map(SqlValue::Integer)),
        FieldKind::Float => row
            .try_get::<Option<f64>, _>(field.name)
            .map(|v| v.map(SqlValue::Float)),
        FieldKind::Text => row
            .try_get::<Option<String>, _>(field.name)
            .map(|v| v.map(SqlValue::Text)),
        FieldKind::Date => row
            .try_get::<Option<chrono::NaiveDate>, _>(field.name)
            .map(|v| v.map(SqlValue::Date)),
    }
    .map_err(|e| MapperError::hydration(table, field.name, e))?;

    Ok(value.unwrap_or(SqlValue::Null))
}
