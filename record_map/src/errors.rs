use thiserror::Error;
use type_mapping::{SqlValue, ValueError};

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("Record configuration error: {0}")]
    Configuration(String),

    #[error("Database connection error: {source}")]
    Connection {
        #[source]
        source: sqlx::Error,
    },

    #[error("{operation} on table '{table}' failed: {source}")]
    Write {
        table: String,
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("update on table '{table}' matched no row with {id_field} = {id}")]
    UpdateWithoutMatch {
        table: String,
        id_field: &'static str,
        id: String,
    },

    #[error("read from table '{table}' failed: {source}")]
    Read {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to hydrate column '{column}' of table '{table}': {source}")]
    Hydration {
        table: String,
        column: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("column '{column}' of table '{table}' yielded a {found} value, which its registered kind does not accept")]
    HydrationMismatch {
        table: String,
        column: &'static str,
        found: &'static str,
    },

    #[error("Unsupported value type: {0}")]
    UnsupportedType(#[from] ValueError),
}

impl MapperError {
    pub fn configuration(message: impl Into<String>) -> Self {
        MapperError::Configuration(message.into())
    }

    /// Wrap a failed INSERT/UPDATE/DELETE, classifying connection-level
    /// failures separately from statement failures
    pub fn write(table: &str, operation: &'static str, source: sqlx::Error) -> Self {
        if is_connection_failure(&source) {
            return MapperError::Connection { source };
        }
        MapperError::Write {
            table: table.to_string(),
            operation,
            source,
        }
    }

    /// Wrap a failed SELECT, classifying connection-level failures separately
    pub fn read(table: &str, source: sqlx::Error) -> Self {
        if is_connection_failure(&source) {
            return MapperError::Connection { source };
        }
        MapperError::Read {
            table: table.to_string(),
            source,
        }
    }

    pub fn update_without_match(table: &str, id_field: &'static str, id: &SqlValue) -> Self {
        MapperError::UpdateWithoutMatch {
            table: table.to_string(),
            id_field,
            id: id.to_string(),
        }
    }

    pub fn hydration(table: &str, column: &'static str, source: sqlx::Error) -> Self {
        MapperError::Hydration {
            table: table.to_string(),
            column,
            source,
        }
    }

    pub fn hydration_mismatch(table: &str, column: &'static str, found: &SqlValue) -> Self {
        MapperError::HydrationMismatch {
            table: table.to_string(),
            column,
            found: found.variant_name(),
        }
    }
}

fn is_connection_failure(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
    )
}
