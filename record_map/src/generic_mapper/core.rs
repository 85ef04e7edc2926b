use crate::descriptor::{Record, RecordDescriptor};
use crate::errors::MapperError;
use crate::DbPool;

/// Generic mapping engine for one record type.
///
/// The descriptor is derived once at construction, so configuration errors
/// (a type with no identifier field) surface here, before any SQL is built.
/// Each operation acquires a connection from the pool for exactly one
/// statement and releases it on every exit path.
#[derive(Clone)]
pub struct GenericMapper<T: Record> {
    pub(crate) db_pool: DbPool,
    pub(crate) descriptor: RecordDescriptor<T>,
}

impl<T: Record> GenericMapper<T> {
    pub fn new(db_pool: DbPool) -> Result<Self, MapperError> {
        Ok(Self {
            db_pool,
            descriptor: RecordDescriptor::describe()?,
        })
    }

    /// The derived metadata for the bound record type
    pub fn descriptor(&self) -> &RecordDescriptor<T> {
        &self.descriptor
    }

    /// The table this mapper reads and writes
    pub fn table_name(&self) -> &str {
        self.descriptor.table_name()
    }
}

impl<T: Record> std::fmt::Debug for GenericMapper<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericMapper")
            .field("table", &self.descriptor.table_name())
            .field("identifier", &self.descriptor.identifier().name)
            .finish()
    }
}
