//! Generic mapper operation implementations
//!
//! This module implements the four CRUD operations for any registered
//! record type.

use async_trait::async_trait;
use type_mapping::SqlValue;

use super::core::GenericMapper;
use crate::binder::{bind_value, bind_values};
use crate::descriptor::Record;
use crate::errors::MapperError;
use crate::hydrate::hydrate_row;
use crate::traits::RecordCrud;

#[async_trait]
impl<T: Record> RecordCrud for GenericMapper<T> {
    type Model = T;

    async fn save(&self, record: &T) -> Result<u64, MapperError> {
        let sql = self.descriptor.insert_sql();
        tracing::debug!("[{}] insert: {}", self.table_name(), sql);

        let values = self.descriptor.extract(record);
        let query = bind_values(sqlx::query(sql), values.into_iter().map(|fv| fv.value));

        let result = query
            .execute(&self.db_pool)
            .await
            .map_err(|e| MapperError::write(self.table_name(), "insert", e))?;

        Ok(result.rows_affected())
    }

    async fn find_by_id(&self, id: SqlValue) -> Result<Option<T>, MapperError> {
        let sql = self.descriptor.select_by_id_sql();
        tracing::debug!("[{}] select: {}", self.table_name(), sql);

        let row = bind_value(sqlx::query(sql), id)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| MapperError::read(self.table_name(), e))?;

        row.map(|row| hydrate_row(&self.descriptor, &row)).transpose()
    }

    async fn update(&self, record: &T) -> Result<u64, MapperError> {
        let sql = self.descriptor.update_by_id_sql();
        tracing::debug!("[{}] update: {}", self.table_name(), sql);

        let id_value = self.descriptor.extract_identifier(record);
        let values = self.descriptor.extract_without_identifier(record);

        // SET values bind first, the identifier binds last
        let mut query = bind_values(sqlx::query(sql), values.into_iter().map(|fv| fv.value));
        query = bind_value(query, id_value.clone());

        let result = query
            .execute(&self.db_pool)
            .await
            .map_err(|e| MapperError::write(self.table_name(), "update", e))?;

        if result.rows_affected() == 0 {
            return Err(MapperError::update_without_match(
                self.table_name(),
                self.descriptor.identifier().name,
                &id_value,
            ));
        }

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: SqlValue) -> Result<u64, MapperError> {
        let sql = self.descriptor.delete_by_id_sql();
        tracing::debug!("[{}] delete: {}", self.table_name(), sql);

        let result = bind_value(sqlx::query(sql), id)
            .execute(&self.db_pool)
            .await
            .map_err(|e| MapperError::write(self.table_name(), "delete", e))?;

        Ok(result.rows_affected())
    }
}
