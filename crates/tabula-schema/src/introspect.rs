//! Live schema introspection.
//!
//! All reads go through the active dialect's catalog queries and row
//! decoders. Every call reads fresh state; nothing is cached, so a mutation
//! issued between two calls is always visible to the second.

use sqlx::{AnyPool, Row};
use tracing::debug;

use crate::column::ColumnDescriptor;
use crate::dialect::{ColumnQuery, Dialect};
use crate::error::{Result, SchemaError};

/// Read-only access to table and column metadata.
pub struct Introspector<'a> {
    pool: &'a AnyPool,
    dialect: &'a dyn Dialect,
}

impl<'a> Introspector<'a> {
    /// Creates an introspector over the given pool and dialect.
    #[must_use]
    pub fn new(pool: &'a AnyPool, dialect: &'a dyn Dialect) -> Self {
        Self { pool, dialect }
    }

    /// Lists all table names.
    pub async fn list_tables(&self) -> Result<Vec<String>> {
        let sql = self.dialect.list_tables_sql();
        debug!(sql = %sql, "listing tables");
        let rows = sqlx::query(sql)
            .fetch_all(self.pool)
            .await
            .map_err(|e| SchemaError::introspection(format!("failed to list tables: {e}")))?;
        rows.iter()
            .map(|row| self.dialect.table_name_from_row(row))
            .collect()
    }

    /// Lists the columns of `table` in the database's ordinal order.
    ///
    /// An empty result is not an error here; callers decide whether a table
    /// without columns is acceptable.
    pub async fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let query = self.dialect.list_columns_query(table)?;
        let rows = match query {
            ColumnQuery::Inline(sql) => {
                debug!(sql = %sql, "listing columns");
                sqlx::query(&sql).fetch_all(self.pool).await
            }
            ColumnQuery::Bound { sql, param } => {
                debug!(sql = %sql, "listing columns");
                sqlx::query(sql).bind(param).fetch_all(self.pool).await
            }
        }
        .map_err(|e| {
            SchemaError::introspection(format!("failed to list columns of '{table}': {e}"))
        })?;

        rows.iter()
            .map(|row| self.dialect.column_from_row(row))
            .collect()
    }

    /// Fetches the table's full definition text (MySQL only).
    pub async fn table_definition(&self, table: &str) -> Result<String> {
        let sql = self.dialect.table_definition_sql(table)?;
        debug!(sql = %sql, "fetching table definition");
        let row = sqlx::query(&sql)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| {
                SchemaError::introspection(format!(
                    "failed to read the definition of '{table}': {e}"
                ))
            })?
            .ok_or_else(|| {
                SchemaError::introspection(format!("table '{table}' has no definition"))
            })?;

        // SHOW CREATE TABLE: column 0 is the name, column 1 the definition.
        row.try_get::<String, _>(1).map_err(|e| {
            SchemaError::introspection(format!(
                "cannot decode the definition of '{table}': {e}"
            ))
        })
    }
}
