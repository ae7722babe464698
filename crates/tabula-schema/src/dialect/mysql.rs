//! MySQL/MariaDB dialect.

use sqlx::any::AnyRow;
use sqlx::Row;

use super::{ColumnQuery, Dialect};
use crate::column::ColumnDescriptor;
use crate::error::{Result, SchemaError};
use crate::validate::{ensure_identifier, ensure_type_expression};

/// MySQL/MariaDB dialect.
///
/// The only dialect with in-place column reordering: `ALTER TABLE` accepts
/// `MODIFY COLUMN ... FIRST/AFTER`, and `SHOW CREATE TABLE` exposes the
/// verbatim clause each `MODIFY` must repeat.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote_identifier(&self, name: &str) -> Result<String> {
        Ok(format!("`{}`", ensure_identifier(name)?))
    }

    fn list_tables_sql(&self) -> &'static str {
        // Native listing order is preserved on purpose.
        "SHOW TABLES"
    }

    fn list_columns_query(&self, table: &str) -> Result<ColumnQuery> {
        Ok(ColumnQuery::Inline(format!(
            "SHOW FULL COLUMNS FROM {}",
            self.quote_identifier(table)?
        )))
    }

    fn column_from_row(&self, row: &AnyRow) -> Result<ColumnDescriptor> {
        let decode = |e: sqlx::Error| {
            SchemaError::introspection(format!("cannot decode column metadata: {e}"))
        };
        let nullable: String = row.try_get("Null").map_err(decode)?;
        Ok(ColumnDescriptor {
            name: row.try_get("Field").map_err(decode)?,
            data_type: row.try_get("Type").map_err(decode)?,
            nullable: nullable.eq_ignore_ascii_case("YES"),
            default: row.try_get("Default").map_err(decode)?,
            extra: row.try_get("Extra").map_err(decode)?,
        })
    }

    fn create_table_sql(&self, table: &str) -> Result<String> {
        Ok(format!(
            "CREATE TABLE {} (`id` INT NOT NULL AUTO_INCREMENT PRIMARY KEY)",
            self.quote_identifier(table)?
        ))
    }

    fn change_column_type_sql(
        &self,
        table: &str,
        column: &str,
        type_expr: &str,
    ) -> Result<String> {
        Ok(format!(
            "ALTER TABLE {} MODIFY COLUMN {} {}",
            self.quote_identifier(table)?,
            self.quote_identifier(column)?,
            ensure_type_expression(type_expr)?
        ))
    }

    fn supports_reorder(&self) -> bool {
        true
    }

    fn table_definition_sql(&self, table: &str) -> Result<String> {
        Ok(format!(
            "SHOW CREATE TABLE {}",
            self.quote_identifier(table)?
        ))
    }

    fn type_suggestions(&self) -> &'static [&'static str] {
        &[
            "INT",
            "BIGINT",
            "VARCHAR(255)",
            "TEXT",
            "DATE",
            "DATETIME",
            "TIMESTAMP",
            "DECIMAL(10,2)",
            "FLOAT",
            "DOUBLE",
            "TINYINT(1)",
            "BLOB",
        ]
    }
}
