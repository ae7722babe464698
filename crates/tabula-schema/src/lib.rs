//! Schema mutation engine for MySQL/MariaDB, PostgreSQL and SQLite.
//!
//! `tabula-schema` turns validated mutation requests ("add this column",
//! "rename this table", "reorder these columns") into dialect-correct DDL
//! and executes it against a live connection. No unvalidated input ever
//! reaches a SQL string: every identifier and type expression passes the
//! gates in [`validate`] before the dialect builders see it.
//!
//! # Architecture
//!
//! - **Validator** ([`validate`]) - pure identifier/type-expression gates
//! - **Dialect** ([`dialect`]) - per-engine quoting, introspection queries
//!   and DDL templates behind one trait
//! - **Introspector** ([`introspect`]) - reads live table/column metadata
//! - **Definition parser** ([`definition`]) - recovers each column's
//!   verbatim clause from MySQL's own table definition text
//! - **Planner** ([`planner`]) - request + introspected state to an ordered
//!   list of statements
//! - **Executor** ([`executor`]) - issues statements, wraps driver errors
//! - **Engine** ([`engine`]) - the facade tying the steps together
//!
//! # Example
//!
//! ```rust,ignore
//! use tabula_schema::prelude::*;
//!
//! let pool = sqlx::any::AnyPoolOptions::new()
//!     .connect("mysql://root@localhost/blog")
//!     .await?;
//! let engine = SchemaEngine::new(pool, DialectKind::MySql);
//!
//! let result = engine
//!     .apply(&MutationRequest::reorder_columns(
//!         "posts",
//!         vec!["id".into(), "created_at".into(), "title".into(), "body".into()],
//!     ))
//!     .await;
//! println!("{}", result.message);
//! ```

pub mod column;
pub mod config;
pub mod definition;
pub mod dialect;
pub mod engine;
pub mod error;
pub mod executor;
pub mod introspect;
pub mod planner;
pub mod request;
pub mod validate;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::column::ColumnDescriptor;
    pub use crate::config::DialectKind;
    pub use crate::dialect::{Dialect, MySqlDialect, PostgresDialect, SqliteDialect};
    pub use crate::engine::SchemaEngine;
    pub use crate::error::{Result, SchemaError};
    pub use crate::executor::MutationExecutor;
    pub use crate::introspect::Introspector;
    pub use crate::planner::MutationPlan;
    pub use crate::request::{MutationRequest, MutationResult};
}
