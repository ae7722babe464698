//! View data for the schema overview page.
//!
//! Prepares everything the HTML layer renders: each table with its columns
//! in ordinal order, plus the dialect's type suggestions for the add-column
//! dropdown. No HTML is produced here.

use serde::Serialize;
use tabula_schema::column::ColumnDescriptor;
use tabula_schema::engine::SchemaEngine;

use crate::error::Result;

/// One table and its columns.
#[derive(Debug, Clone, Serialize)]
pub struct TableOverview {
    /// Table name.
    pub name: String,
    /// Columns in the database's ordinal order.
    pub columns: Vec<ColumnDescriptor>,
}

/// Everything the schema page needs for one render.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaOverview {
    /// All tables with their columns.
    pub tables: Vec<TableOverview>,
    /// Column types offered by the active dialect.
    pub type_suggestions: Vec<&'static str>,
}

/// Builds the overview by introspecting the live database.
pub async fn overview(engine: &SchemaEngine) -> Result<SchemaOverview> {
    let tables = engine
        .list_tables_with_columns()
        .await?
        .into_iter()
        .map(|(name, columns)| TableOverview { name, columns })
        .collect();
    Ok(SchemaOverview {
        tables,
        type_suggestions: engine.dialect().type_suggestions().to_vec(),
    })
}
