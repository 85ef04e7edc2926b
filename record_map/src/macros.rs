//! Declarative field registration
//!
//! `record_fields!` generates the `&'static [FieldDescriptor<T>]` table for
//! a record type from a compact field listing. `#[id]` flags the identifier
//! field. Each field's kind must match its Rust type (`Integer` = `i32`,
//! `Float` = `f64`, `Text` = `String`, `Date` = `chrono::NaiveDate`);
//! a mismatch is a compile error inside the generated accessors.

/// Build the field descriptor table for a record type.
///
/// ```
/// # use chrono::NaiveDate;
/// # use record_map::{record_fields, FieldDescriptor, Record};
/// # #[derive(Debug, Clone, Default)]
/// # pub struct Teacher { pub id: i32, pub name: String, pub dateofbirth: NaiveDate, pub subject_id: i32 }
/// impl Record for Teacher {
///     fn type_name() -> &'static str {
///         "Teacher"
///     }
///
///     fn fields() -> &'static [FieldDescriptor<Self>] {
///         record_fields!(Teacher => [
///             #[id] id: Integer,
///             name: Text,
///             dateofbirth: Date,
///             subject_id: Integer,
///         ])
///     }
/// }
/// ```
#[macro_export]
macro_rules! record_fields {
    (@kind Integer) => { $crate::FieldKind::Integer };
    (@kind Float) => { $crate::FieldKind::Float };
    (@kind Text) => { $crate::FieldKind::Text };
    (@kind Date) => { $crate::FieldKind::Date };

    (@flag) => { false };
    (@flag #[id]) => { true };

    (@get Integer, $field:expr) => { $crate::SqlValue::Integer($field) };
    (@get Float, $field:expr) => { $crate::SqlValue::Float($field) };
    (@get Text, $field:expr) => { $crate::SqlValue::Text($field.clone()) };
    (@get Date, $field:expr) => { $crate::SqlValue::Date($field) };

    (@set Integer, $slot:expr, $value:expr) => {
        match $value {
            $crate::SqlValue::Integer(v) => {
                $slot = v;
                Ok(())
            }
            $crate::SqlValue::Null => {
                $slot = Default::default();
                Ok(())
            }
            other => Err(other),
        }
    };
    (@set Float, $slot:expr, $value:expr) => {
        match $value {
            $crate::SqlValue::Float(v) => {
                $slot = v;
                Ok(())
            }
            $crate::SqlValue::Null => {
                $slot = Default::default();
                Ok(())
            }
            other => Err(other),
        }
    };
    (@set Text, $slot:expr, $value:expr) => {
        match $value {
            $crate::SqlValue::Text(v) => {
                $slot = v;
                Ok(())
            }
            $crate::SqlValue::Null => {
                $slot = Default::default();
                Ok(())
            }
            other => Err(other),
        }
    };
    (@set Date, $slot:expr, $value:expr) => {
        match $value {
            $crate::SqlValue::Date(v) => {
                $slot = v;
                Ok(())
            }
            $crate::SqlValue::Null => {
                $slot = Default::default();
                Ok(())
            }
            other => Err(other),
        }
    };

    ($record:ty => [ $( $(#[$marker:ident])? $fname:ident : $kind:ident ),+ $(,)? ]) => {{
        const FIELDS: &[$crate::FieldDescriptor<$record>] = &[
            $(
                $crate::FieldDescriptor {
                    name: stringify!($fname),
                    kind: $crate::record_fields!(@kind $kind),
                    identifier: $crate::record_fields!(@flag $(#[$marker])?),
                    get: |record: &$record| $crate::record_fields!(@get $kind, record.$fname),
                    set: |record: &mut $record, value| {
                        $crate::record_fields!(@set $kind, record.$fname, value)
                    },
                }
            ),+
        ];
        FIELDS
    }};
}
