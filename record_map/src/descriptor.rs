//! Record type descriptors
//!
//! This module defines the per-type field table that replaces runtime
//! reflection: each registered record exposes an ordered list of field
//! descriptors, exactly one of which is flagged as the identifier.

use std::fmt;

use type_mapping::SqlValue;

use crate::errors::MapperError;
use crate::sql_builder;

/// Semantic column type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Float,
    Text,
    Date,
}

/// One registered field: its column name, semantic kind, identifier flag,
/// and compile-time-checked accessor/assigner.
///
/// The assigner returns the value unchanged when its variant does not match
/// the field's registered kind, so the hydrator can surface the mismatch.
pub struct FieldDescriptor<T> {
    pub name: &'static str,
    pub kind: FieldKind,
    pub identifier: bool,
    pub get: fn(&T) -> SqlValue,
    pub set: fn(&mut T, SqlValue) -> Result<(), SqlValue>,
}

/// Registration trait for mappable record types.
///
/// Implement it with the [`record_fields!`](crate::record_fields) macro:
///
/// ```
/// use chrono::NaiveDate;
/// use record_map::{record_fields, FieldDescriptor, Record};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// pub struct Student {
///     pub id: i32,
///     pub name: String,
///     pub groupname: String,
///     pub dateofbirth: NaiveDate,
/// }
///
/// impl Record for Student {
///     fn type_name() -> &'static str {
///         "Student"
///     }
///
///     fn fields() -> &'static [FieldDescriptor<Self>] {
///         record_fields!(Student => [
///             #[id] id: Integer,
///             name: Text,
///             groupname: Text,
///             dateofbirth: Date,
///         ])
///     }
/// }
/// ```
pub trait Record: Default + Clone + Send + Sync + Unpin + 'static {
    /// The record type's name; the table name is its lower-cased form
    fn type_name() -> &'static str;

    /// Field table in declaration order
    fn fields() -> &'static [FieldDescriptor<Self>];
}

/// A field's extracted value, paired with its column name
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    pub name: &'static str,
    pub value: SqlValue,
}

/// Derived metadata for a record type: the validated field table, the
/// identifier, the table binding, and the prepared statement text for each
/// of the four operations.
#[derive(Clone)]
pub struct RecordDescriptor<T: Record> {
    fields: &'static [FieldDescriptor<T>],
    identifier_index: usize,
    table_name: String,
    insert_sql: String,
    select_by_id_sql: String,
    update_by_id_sql: String,
    delete_by_id_sql: String,
}

impl<T: Record> RecordDescriptor<T> {
    /// Derive the descriptor for `T`.
    ///
    /// Fails with a configuration error when the field table is empty, when
    /// no field (or more than one) is flagged as the identifier, or when a
    /// table or column name is not a safe SQL identifier.
    pub fn describe() -> Result<Self, MapperError> {
        let fields = T::fields();
        if fields.is_empty() {
            return Err(MapperError::configuration(format!(
                "record type '{}' registers no fields",
                T::type_name()
            )));
        }

        let mut identifier_index = None;
        for (index, field) in fields.iter().enumerate() {
            sql_builder::validate_identifier(field.name)?;
            if field.identifier {
                if identifier_index.is_some() {
                    return Err(MapperError::configuration(format!(
                        "record type '{}' flags more than one identifier field",
                        T::type_name()
                    )));
                }
                identifier_index = Some(index);
            }
        }
        let identifier_index = identifier_index.ok_or_else(|| {
            MapperError::configuration(format!(
                "record type '{}' has no field flagged as identifier",
                T::type_name()
            ))
        })?;

        let table_name = T::type_name().to_ascii_lowercase();
        sql_builder::validate_identifier(&table_name)?;

        let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
        let id_name = fields[identifier_index].name;
        let non_id_names: Vec<&str> = fields
            .iter()
            .filter(|f| !f.identifier)
            .map(|f| f.name)
            .collect();

        Ok(Self {
            fields,
            identifier_index,
            insert_sql: sql_builder::insert(&table_name, &names),
            select_by_id_sql: sql_builder::select_by_id(&table_name, id_name),
            update_by_id_sql: sql_builder::update_by_id(&table_name, &non_id_names, id_name),
            delete_by_id_sql: sql_builder::delete_by_id(&table_name, id_name),
            table_name,
        })
    }

    pub fn fields(&self) -> &'static [FieldDescriptor<T>] {
        self.fields
    }

    pub fn identifier(&self) -> &FieldDescriptor<T> {
        &self.fields[self.identifier_index]
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn insert_sql(&self) -> &str {
        &self.insert_sql
    }

    pub fn select_by_id_sql(&self) -> &str {
        &self.select_by_id_sql
    }

    pub fn update_by_id_sql(&self) -> &str {
        &self.update_by_id_sql
    }

    pub fn delete_by_id_sql(&self) -> &str {
        &self.delete_by_id_sql
    }

    /// Extract every field value in descriptor order; the result always has
    /// the same length and order as the field table
    pub fn extract(&self, record: &T) -> Vec<FieldValue> {
        self.fields
            .iter()
            .map(|field| FieldValue {
                name: field.name,
                value: (field.get)(record),
            })
            .collect()
    }

    /// Extract every non-identifier field value, for the update SET clause
    pub fn extract_without_identifier(&self, record: &T) -> Vec<FieldValue> {
        self.fields
            .iter()
            .filter(|field| !field.identifier)
            .map(|field| FieldValue {
                name: field.name,
                value: (field.get)(record),
            })
            .collect()
    }

    /// Extract the identifier field's value
    pub fn extract_identifier(&self, record: &T) -> SqlValue {
        (self.identifier().get)(record)
    }
}

impl<T: Record> fmt::Debug for RecordDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordDescriptor")
            .field("table_name", &self.table_name)
            .field("field_count", &self.fields.len())
            .field("identifier", &self.identifier().name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Student {
        id: i32,
        name: String,
        groupname: String,
        dateofbirth: NaiveDate,
    }

    impl Record for Student {
        fn type_name() -> &'static str {
            "Student"
        }

        fn fields() -> &'static [FieldDescriptor<Self>] {
            crate::record_fields!(Student => [
                #[id] id: Integer,
                name: Text,
                groupname: Text,
                dateofbirth: Date,
            ])
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Grade {
        id: i32,
        student_id: i32,
        score: f64,
    }

    impl Record for Grade {
        fn type_name() -> &'static str {
            "Grade"
        }

        fn fields() -> &'static [FieldDescriptor<Self>] {
            crate::record_fields!(Grade => [
                #[id] id: Integer,
                student_id: Integer,
                score: Float,
            ])
        }
    }

    #[derive(Debug, Clone, Default)]
    struct Orphan {
        name: String,
    }

    impl Record for Orphan {
        fn type_name() -> &'static str {
            "Orphan"
        }

        fn fields() -> &'static [FieldDescriptor<Self>] {
            crate::record_fields!(Orphan => [
                name: Text,
            ])
        }
    }

    #[derive(Debug, Clone, Default)]
    struct TwoHeaded {
        id: i32,
        alt_id: i32,
    }

    impl Record for TwoHeaded {
        fn type_name() -> &'static str {
            "TwoHeaded"
        }

        fn fields() -> &'static [FieldDescriptor<Self>] {
            crate::record_fields!(TwoHeaded => [
                #[id] id: Integer,
                #[id] alt_id: Integer,
            ])
        }
    }

    fn student() -> Student {
        Student {
            id: 12,
            name: "Bohdan Petrov".to_string(),
            groupname: "I-32".to_string(),
            dateofbirth: NaiveDate::from_ymd_opt(2000, 12, 12).unwrap(),
        }
    }

    #[test]
    fn descriptor_preserves_declaration_order() {
        let descriptor = RecordDescriptor::<Student>::describe().unwrap();
        let names: Vec<&str> = descriptor.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["id", "name", "groupname", "dateofbirth"]);
        assert_eq!(descriptor.identifier().name, "id");
        assert_eq!(descriptor.table_name(), "student");
    }

    #[test]
    fn descriptor_prepares_all_four_statements() {
        let descriptor = RecordDescriptor::<Student>::describe().unwrap();
        assert_eq!(
            descriptor.insert_sql(),
            "INSERT INTO student (id, name, groupname, dateofbirth) VALUES ($1, $2, $3, $4)"
        );
        assert_eq!(
            descriptor.select_by_id_sql(),
            "SELECT * FROM student WHERE id = $1"
        );
        assert_eq!(
            descriptor.update_by_id_sql(),
            "UPDATE student SET name = $1, groupname = $2, dateofbirth = $3 WHERE id = $4"
        );
        assert_eq!(
            descriptor.delete_by_id_sql(),
            "DELETE FROM student WHERE id = $1"
        );
    }

    #[test]
    fn missing_identifier_is_a_configuration_error() {
        let err = RecordDescriptor::<Orphan>::describe().unwrap_err();
        match err {
            MapperError::Configuration(message) => {
                assert!(message.contains("identifier"), "{}", message)
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_identifier_is_a_configuration_error() {
        let err = RecordDescriptor::<TwoHeaded>::describe().unwrap_err();
        assert!(matches!(err, MapperError::Configuration(_)));
    }

    #[test]
    fn extraction_aligns_with_field_table() {
        let descriptor = RecordDescriptor::<Student>::describe().unwrap();
        let values = descriptor.extract(&student());

        assert_eq!(values.len(), descriptor.fields().len());
        assert_eq!(values[0].value, SqlValue::Integer(12));
        assert_eq!(values[1].value, SqlValue::Text("Bohdan Petrov".to_string()));
        assert_eq!(values[2].value, SqlValue::Text("I-32".to_string()));
        assert_eq!(
            values[3].value,
            SqlValue::Date(NaiveDate::from_ymd_opt(2000, 12, 12).unwrap())
        );
    }

    #[test]
    fn default_record_extracts_zero_values() {
        let descriptor = RecordDescriptor::<Student>::describe().unwrap();
        let values = descriptor.extract(&Student::default());

        assert_eq!(values[0].value, SqlValue::Integer(0));
        assert_eq!(values[1].value, SqlValue::Text(String::new()));
        assert_eq!(values.len(), 4);
    }

    #[test]
    fn update_extraction_excludes_identifier() {
        let descriptor = RecordDescriptor::<Student>::describe().unwrap();
        let values = descriptor.extract_without_identifier(&student());

        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|fv| fv.name != "id"));
        assert_eq!(descriptor.extract_identifier(&student()), SqlValue::Integer(12));
    }

    #[test]
    fn float_fields_extract_and_assign() {
        let descriptor = RecordDescriptor::<Grade>::describe().unwrap();
        let score_field = descriptor
            .fields()
            .iter()
            .find(|f| f.name == "score")
            .unwrap();
        assert_eq!(score_field.kind, FieldKind::Float);

        let grade = Grade {
            id: 1,
            student_id: 12,
            score: 91.5,
        };
        let values = descriptor.extract(&grade);
        assert_eq!(values[2].value, SqlValue::Float(91.5));

        let mut hydrated = Grade::default();
        (score_field.set)(&mut hydrated, SqlValue::Float(88.25)).unwrap();
        assert_eq!(hydrated.score, 88.25);

        let rejected =
            (score_field.set)(&mut hydrated, SqlValue::Text("high".to_string())).unwrap_err();
        assert_eq!(rejected, SqlValue::Text("high".to_string()));
    }

    #[test]
    fn assigner_rejects_kind_mismatch() {
        let fields = Student::fields();
        let name_field = fields.iter().find(|f| f.name == "name").unwrap();

        let mut record = Student::default();
        let rejected = (name_field.set)(&mut record, SqlValue::Integer(5)).unwrap_err();
        assert_eq!(rejected, SqlValue::Integer(5));

        (name_field.set)(&mut record, SqlValue::Text("I-32".to_string())).unwrap();
        assert_eq!(record.name, "I-32");
    }

    #[test]
    fn assigner_maps_null_to_zero_value() {
        let fields = Student::fields();
        let name_field = fields.iter().find(|f| f.name == "name").unwrap();

        let mut record = student();
        (name_field.set)(&mut record, SqlValue::Null).unwrap();
        assert_eq!(record.name, "");
    }
}
