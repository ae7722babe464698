//! SQLite dialect.

use sqlx::any::AnyRow;
use sqlx::Row;

use super::{ColumnQuery, Dialect};
use crate::column::ColumnDescriptor;
use crate::error::{Result, SchemaError};

/// SQLite dialect.
///
/// SQLite cannot change a column's type in place and a rebuild-and-copy
/// emulation would be lossy, so that operation is reported as unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn list_tables_sql(&self) -> &'static str {
        "SELECT name FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name"
    }

    fn list_columns_query(&self, table: &str) -> Result<ColumnQuery> {
        Ok(ColumnQuery::Inline(format!(
            "PRAGMA table_info({})",
            self.quote_identifier(table)?
        )))
    }

    fn column_from_row(&self, row: &AnyRow) -> Result<ColumnDescriptor> {
        let decode = |e: sqlx::Error| {
            SchemaError::introspection(format!("cannot decode column metadata: {e}"))
        };
        let not_null: i64 = row.try_get("notnull").map_err(decode)?;
        Ok(ColumnDescriptor {
            name: row.try_get("name").map_err(decode)?,
            data_type: row.try_get("type").map_err(decode)?,
            nullable: not_null == 0,
            default: row.try_get("dflt_value").map_err(decode)?,
            extra: String::new(),
        })
    }

    fn create_table_sql(&self, table: &str) -> Result<String> {
        Ok(format!(
            "CREATE TABLE {} (\"id\" INTEGER PRIMARY KEY AUTOINCREMENT)",
            self.quote_identifier(table)?
        ))
    }

    fn supports_change_column_type(&self) -> bool {
        false
    }

    fn change_column_type_sql(
        &self,
        table: &str,
        column: &str,
        type_expr: &str,
    ) -> Result<String> {
        let _ = (table, column, type_expr);
        Err(SchemaError::Unsupported {
            dialect: self.name(),
            operation: "changing a column's type",
        })
    }

    fn type_suggestions(&self) -> &'static [&'static str] {
        &["INTEGER", "REAL", "TEXT", "BLOB", "NUMERIC"]
    }
}
