//! Dialect selection from configuration.

use std::fmt;

use crate::dialect::{Dialect, MySqlDialect, PostgresDialect, SqliteDialect};

/// The database engine the schema engine speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialectKind {
    /// MySQL or MariaDB.
    #[default]
    MySql,
    /// PostgreSQL.
    Postgres,
    /// SQLite.
    Sqlite,
}

impl DialectKind {
    /// Resolves a configuration value (`mysql` | `pgsql` | `sqlite`).
    ///
    /// Unknown or empty values fall back to MySQL.
    #[must_use]
    pub fn from_config_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pgsql" | "postgres" | "postgresql" => Self::Postgres,
            "sqlite" | "sqlite3" => Self::Sqlite,
            _ => Self::MySql,
        }
    }

    /// Resolves the dialect from a database URL scheme.
    ///
    /// Unknown schemes fall back to MySQL, matching
    /// [`DialectKind::from_config_value`].
    #[must_use]
    pub fn from_database_url(url: &str) -> Self {
        let scheme = url.split(':').next().unwrap_or_default();
        Self::from_config_value(scheme)
    }

    /// Returns the dialect adapter for this engine.
    #[must_use]
    pub fn dialect(self) -> Box<dyn Dialect> {
        match self {
            Self::MySql => Box::new(MySqlDialect::new()),
            Self::Postgres => Box::new(PostgresDialect::new()),
            Self::Sqlite => Box::new(SqliteDialect::new()),
        }
    }

    /// Returns the canonical configuration name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Postgres => "pgsql",
            Self::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
