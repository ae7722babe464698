//! Database dialect adapters.
//!
//! Each dialect knows how to quote identifiers, introspect tables and
//! columns, and render the DDL verbs it supports. Everything that differs
//! between MySQL, PostgreSQL and SQLite lives behind the [`Dialect`] trait
//! so the planner never branches on the engine by hand.

mod mysql;
mod postgres;
mod sqlite;

pub use mysql::MySqlDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

use sqlx::any::AnyRow;
use sqlx::Row;

use crate::column::ColumnDescriptor;
use crate::error::{Result, SchemaError};
use crate::validate::{ensure_identifier, ensure_type_expression};

/// How a dialect lists the columns of one table.
#[derive(Debug, Clone)]
pub enum ColumnQuery {
    /// A complete statement with the validated table name already quoted in.
    Inline(String),
    /// A statement with one server-side bound parameter (the table name).
    Bound {
        /// Statement text with a placeholder.
        sql: &'static str,
        /// Value to bind.
        param: String,
    },
}

/// Database-specific SQL generation and row decoding.
///
/// `quote_identifier` re-validates its input and fails fast on anything the
/// validator rejects; the other builders go through it, so an invalid name
/// can never reach a statement even if a caller skipped its own check.
pub trait Dialect: Send + Sync {
    /// Returns the dialect name.
    fn name(&self) -> &'static str;

    /// Quotes an identifier, validating it first.
    fn quote_identifier(&self, name: &str) -> Result<String> {
        Ok(format!("\"{}\"", ensure_identifier(name)?))
    }

    /// Statement listing all table names.
    fn list_tables_sql(&self) -> &'static str;

    /// Query listing the columns of `table` in ordinal order.
    fn list_columns_query(&self, table: &str) -> Result<ColumnQuery>;

    /// Decodes one row of [`Dialect::list_tables_sql`] output.
    fn table_name_from_row(&self, row: &AnyRow) -> Result<String> {
        row.try_get::<String, _>(0)
            .map_err(|e| SchemaError::introspection(format!("cannot decode table name: {e}")))
    }

    /// Decodes one row of [`Dialect::list_columns_query`] output.
    fn column_from_row(&self, row: &AnyRow) -> Result<ColumnDescriptor>;

    /// Statement creating `table` with an auto-incrementing `id` primary key.
    fn create_table_sql(&self, table: &str) -> Result<String>;

    /// Statement renaming `old` to `new`.
    fn rename_table_sql(&self, old: &str, new: &str) -> Result<String> {
        Ok(format!(
            "ALTER TABLE {} RENAME TO {}",
            self.quote_identifier(old)?,
            self.quote_identifier(new)?
        ))
    }

    /// Statement adding `column` of `type_expr` to `table`.
    fn add_column_sql(&self, table: &str, column: &str, type_expr: &str) -> Result<String> {
        Ok(format!(
            "ALTER TABLE {} ADD COLUMN {} {}",
            self.quote_identifier(table)?,
            self.quote_identifier(column)?,
            ensure_type_expression(type_expr)?
        ))
    }

    /// Statement renaming column `old` to `new` on `table`.
    fn rename_column_sql(&self, table: &str, old: &str, new: &str) -> Result<String> {
        Ok(format!(
            "ALTER TABLE {} RENAME COLUMN {} TO {}",
            self.quote_identifier(table)?,
            self.quote_identifier(old)?,
            self.quote_identifier(new)?
        ))
    }

    /// Whether the dialect can change a column's type in place.
    fn supports_change_column_type(&self) -> bool {
        true
    }

    /// Statement changing `column` on `table` to `type_expr`.
    fn change_column_type_sql(&self, table: &str, column: &str, type_expr: &str)
        -> Result<String>;

    /// Whether the dialect can reorder columns in place.
    fn supports_reorder(&self) -> bool {
        false
    }

    /// Statement fetching the table's full definition text.
    fn table_definition_sql(&self, table: &str) -> Result<String> {
        let _ = table;
        Err(SchemaError::Unsupported {
            dialect: self.name(),
            operation: "reading the table definition",
        })
    }

    /// Column types offered to the presentation layer.
    fn type_suggestions(&self) -> &'static [&'static str];
}
