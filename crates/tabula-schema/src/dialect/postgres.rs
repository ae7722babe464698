//! PostgreSQL dialect.

use sqlx::any::AnyRow;
use sqlx::Row;

use super::{ColumnQuery, Dialect};
use crate::column::ColumnDescriptor;
use crate::error::{Result, SchemaError};
use crate::validate::{ensure_identifier, ensure_type_expression};

/// PostgreSQL dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "pgsql"
    }

    fn list_tables_sql(&self) -> &'static str {
        "SELECT tablename::text FROM pg_catalog.pg_tables \
         WHERE schemaname = 'public' ORDER BY tablename"
    }

    fn list_columns_query(&self, table: &str) -> Result<ColumnQuery> {
        // Bound parameter rather than interpolation; the name is validated
        // anyway so both layers have to fail for bad input to get through.
        ensure_identifier(table)?;
        Ok(ColumnQuery::Bound {
            sql: "SELECT column_name::text, data_type::text, is_nullable::text, \
                  column_default::text \
                  FROM information_schema.columns \
                  WHERE table_schema = 'public' AND table_name = $1 \
                  ORDER BY ordinal_position",
            param: table.to_string(),
        })
    }

    fn column_from_row(&self, row: &AnyRow) -> Result<ColumnDescriptor> {
        let decode = |e: sqlx::Error| {
            SchemaError::introspection(format!("cannot decode column metadata: {e}"))
        };
        let nullable: String = row.try_get(2).map_err(decode)?;
        Ok(ColumnDescriptor {
            name: row.try_get(0).map_err(decode)?,
            data_type: row.try_get(1).map_err(decode)?,
            nullable: nullable.eq_ignore_ascii_case("YES"),
            default: row.try_get(3).map_err(decode)?,
            extra: String::new(),
        })
    }

    fn create_table_sql(&self, table: &str) -> Result<String> {
        Ok(format!(
            "CREATE TABLE {} (\"id\" SERIAL PRIMARY KEY)",
            self.quote_identifier(table)?
        ))
    }

    fn change_column_type_sql(
        &self,
        table: &str,
        column: &str,
        type_expr: &str,
    ) -> Result<String> {
        // No USING clause: if the cast is not implicit the server rejects
        // the statement and the failure surfaces as an execution error.
        Ok(format!(
            "ALTER TABLE {} ALTER COLUMN {} TYPE {}",
            self.quote_identifier(table)?,
            self.quote_identifier(column)?,
            ensure_type_expression(type_expr)?
        ))
    }

    fn type_suggestions(&self) -> &'static [&'static str] {
        &[
            "INTEGER",
            "BIGINT",
            "VARCHAR(255)",
            "TEXT",
            "DATE",
            "TIMESTAMP",
            "NUMERIC(10,2)",
            "REAL",
            "DOUBLE PRECISION",
            "BOOLEAN",
            "BYTEA",
        ]
    }
}
