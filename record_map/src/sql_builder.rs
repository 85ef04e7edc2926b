//! SQL statement construction
//!
//! This module builds the parametrized statement text for the four CRUD
//! operations. Table and field names come only from record descriptors,
//! never from external input; every data value is a `$n` placeholder.

use crate::errors::MapperError;

/// PostgreSQL identifier length limit
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Check that a table or column name is safe to splice into statement text
pub fn validate_identifier(name: &str) -> Result<(), MapperError> {
    if name.is_empty() {
        return Err(MapperError::configuration("SQL identifier cannot be empty"));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(MapperError::configuration(format!(
            "SQL identifier '{}' is too long: {} characters (max {})",
            name,
            name.len(),
            MAX_IDENTIFIER_LENGTH
        )));
    }

    let first_char = name.chars().next().ok_or_else(|| {
        MapperError::configuration("SQL identifier cannot be empty")
    })?;
    if !first_char.is_ascii_alphabetic() && first_char != '_' {
        return Err(MapperError::configuration(format!(
            "SQL identifier '{}' must start with a letter or underscore",
            name
        )));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(MapperError::configuration(format!(
            "SQL identifier '{}' contains invalid characters",
            name
        )));
    }

    Ok(())
}

/// `INSERT INTO t (a, b) VALUES ($1, $2)`, one placeholder per field in
/// descriptor order
pub fn insert(table: &str, field_names: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=field_names.len()).map(|i| format!("${}", i)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        field_names.join(", "),
        placeholders.join(", ")
    )
}

/// `SELECT * FROM t WHERE id = $1`
pub fn select_by_id(table: &str, id_name: &str) -> String {
    format!("SELECT * FROM {} WHERE {} = $1", table, id_name)
}

/// `UPDATE t SET a = $1, b = $2 WHERE id = $3`. The identifier is excluded
/// from the SET clause and bound as the final parameter
pub fn update_by_id(table: &str, field_names: &[&str], id_name: &str) -> String {
    let assignments: Vec<String> = field_names
        .iter()
        .enumerate()
        .map(|(i, field)| format!("{} = ${}", field, i + 1))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        table,
        assignments.join(", "),
        id_name,
        field_names.len() + 1
    )
}

/// `DELETE FROM t WHERE id = $1`
pub fn delete_by_id(table: &str, id_name: &str) -> String {
    format!("DELETE FROM {} WHERE {} = $1", table, id_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_places_one_placeholder_per_field() {
        let sql = insert("student", &["id", "name", "groupname", "dateofbirth"]);
        assert_eq!(
            sql,
            "INSERT INTO student (id, name, groupname, dateofbirth) VALUES ($1, $2, $3, $4)"
        );
        assert_eq!(sql.matches('$').count(), 4);
    }

    #[test]
    fn select_filters_on_identifier() {
        assert_eq!(
            select_by_id("student", "id"),
            "SELECT * FROM student WHERE id = $1"
        );
    }

    #[test]
    fn update_numbers_set_clause_then_identifier() {
        let sql = update_by_id("student", &["name", "groupname", "dateofbirth"], "id");
        assert_eq!(
            sql,
            "UPDATE student SET name = $1, groupname = $2, dateofbirth = $3 WHERE id = $4"
        );
    }

    #[test]
    fn update_set_placeholders_match_field_count() {
        let fields = ["name", "groupname", "dateofbirth"];
        let sql = update_by_id("student", &fields, "id");

        let set_clause = sql
            .split(" WHERE ")
            .next()
            .and_then(|s| s.split(" SET ").nth(1))
            .unwrap();
        assert_eq!(set_clause.matches('$').count(), fields.len());
        assert!(sql.ends_with(&format!("${}", fields.len() + 1)));
    }

    #[test]
    fn delete_filters_on_identifier() {
        assert_eq!(
            delete_by_id("student", "id"),
            "DELETE FROM student WHERE id = $1"
        );
    }

    #[test]
    fn identifier_validation() {
        assert!(validate_identifier("dateofbirth").is_ok());
        assert!(validate_identifier("_hidden").is_ok());
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("1st").is_err());
        assert!(validate_identifier("name; DROP TABLE student").is_err());
        assert!(validate_identifier(&"a".repeat(64)).is_err());
    }
}
