//! Column metadata snapshot.

use serde::{Deserialize, Serialize};

/// A read-only snapshot of one column, as reported by the database.
///
/// Rebuilt on every introspection pass; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name, in the server's own spelling.
    pub name: String,
    /// Data type as the server renders it (e.g. `varchar(255)`).
    pub data_type: String,
    /// Whether NULL values are accepted.
    pub nullable: bool,
    /// Default value, if one is defined.
    pub default: Option<String>,
    /// Extra attributes (e.g. MySQL's `auto_increment`), empty when none.
    pub extra: String,
}

impl ColumnDescriptor {
    /// Creates a descriptor with the given name and type and no constraints.
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable: true,
            default: None,
            extra: String::new(),
        }
    }
}
