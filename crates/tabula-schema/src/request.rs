//! Mutation requests and results.

use serde::{Deserialize, Serialize};

/// A validated schema change request.
///
/// Each variant carries only identifiers and type expressions; the planner
/// validates every field before a statement is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum MutationRequest {
    /// Create a new table with an auto-incrementing `id` primary key.
    AddTable {
        /// Table name.
        name: String,
    },

    /// Rename a table. A no-op when both names are equal.
    RenameTable {
        /// Current table name.
        old_name: String,
        /// New table name.
        new_name: String,
    },

    /// Add a column to a table.
    AddColumn {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
        /// Column type expression (e.g. `VARCHAR(255)`).
        column_type: String,
    },

    /// Rename a column. A no-op when both names are equal.
    RenameColumn {
        /// Table name.
        table: String,
        /// Current column name.
        old_name: String,
        /// New column name.
        new_name: String,
    },

    /// Change a column's type.
    ChangeColumnType {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
        /// New type expression.
        column_type: String,
    },

    /// Reorder a table's columns (MySQL only).
    ReorderColumns {
        /// Table name.
        table: String,
        /// The complete requested column order.
        order: Vec<String>,
    },
}

impl MutationRequest {
    /// Creates an `AddTable` request.
    #[must_use]
    pub fn add_table(name: impl Into<String>) -> Self {
        Self::AddTable { name: name.into() }
    }

    /// Creates a `RenameTable` request.
    #[must_use]
    pub fn rename_table(old_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self::RenameTable {
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }

    /// Creates an `AddColumn` request.
    #[must_use]
    pub fn add_column(
        table: impl Into<String>,
        column: impl Into<String>,
        column_type: impl Into<String>,
    ) -> Self {
        Self::AddColumn {
            table: table.into(),
            column: column.into(),
            column_type: column_type.into(),
        }
    }

    /// Creates a `RenameColumn` request.
    #[must_use]
    pub fn rename_column(
        table: impl Into<String>,
        old_name: impl Into<String>,
        new_name: impl Into<String>,
    ) -> Self {
        Self::RenameColumn {
            table: table.into(),
            old_name: old_name.into(),
            new_name: new_name.into(),
        }
    }

    /// Creates a `ChangeColumnType` request.
    #[must_use]
    pub fn change_column_type(
        table: impl Into<String>,
        column: impl Into<String>,
        column_type: impl Into<String>,
    ) -> Self {
        Self::ChangeColumnType {
            table: table.into(),
            column: column.into(),
            column_type: column_type.into(),
        }
    }

    /// Creates a `ReorderColumns` request.
    #[must_use]
    pub fn reorder_columns(table: impl Into<String>, order: Vec<String>) -> Self {
        Self::ReorderColumns {
            table: table.into(),
            order,
        }
    }

    /// Returns a human-readable description of this request.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::AddTable { name } => format!("Create table '{name}'"),
            Self::RenameTable { old_name, new_name } => {
                format!("Rename table '{old_name}' to '{new_name}'")
            }
            Self::AddColumn { table, column, .. } => {
                format!("Add column '{column}' to table '{table}'")
            }
            Self::RenameColumn {
                table,
                old_name,
                new_name,
            } => format!("Rename column '{old_name}' to '{new_name}' in table '{table}'"),
            Self::ChangeColumnType { table, column, .. } => {
                format!("Change type of column '{column}' in table '{table}'")
            }
            Self::ReorderColumns { table, .. } => {
                format!("Reorder columns of table '{table}'")
            }
        }
    }
}

/// The single logical outcome of one mutation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResult {
    /// Whether the mutation succeeded.
    pub success: bool,
    /// Human-readable confirmation or failure message.
    pub message: String,
}

impl MutationResult {
    /// Creates a success result.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Creates a failure result.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
