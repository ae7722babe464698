//! tabula-admin CLI
//!
//! Command-line access to the schema mutation engine.

use clap::{Parser, Subcommand};
use sqlx::any::AnyPoolOptions;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use tabula_schema::prelude::*;

/// Schema administration for MySQL, PostgreSQL and SQLite.
#[derive(Parser)]
#[command(name = "tabula-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database URL.
    #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite:db.sqlite3")]
    database: String,

    /// Dialect override (mysql | pgsql | sqlite); derived from the
    /// database URL when not given.
    #[arg(long)]
    dialect: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all tables with their columns.
    Tables,

    /// List the columns of one table.
    Columns {
        /// Table name.
        table: String,
    },

    /// Create a table with an auto-incrementing `id` primary key.
    AddTable {
        /// Table name.
        name: String,
    },

    /// Rename a table.
    RenameTable {
        /// Current name.
        old_name: String,
        /// New name.
        new_name: String,
    },

    /// Add a column to a table.
    AddColumn {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
        /// Column type expression, e.g. VARCHAR(255).
        column_type: String,
    },

    /// Rename a column.
    RenameColumn {
        /// Table name.
        table: String,
        /// Current column name.
        old_name: String,
        /// New column name.
        new_name: String,
    },

    /// Change a column's type.
    ChangeType {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
        /// New type expression.
        column_type: String,
    },

    /// Reorder a table's columns (MySQL only). Give the complete order.
    Reorder {
        /// Table name.
        table: String,
        /// Column names in the requested order.
        #[arg(required = true, num_args = 1..)]
        columns: Vec<String>,
    },
}

impl Commands {
    fn request(self) -> Option<MutationRequest> {
        match self {
            Self::Tables | Self::Columns { .. } => None,
            Self::AddTable { name } => Some(MutationRequest::add_table(name)),
            Self::RenameTable { old_name, new_name } => {
                Some(MutationRequest::rename_table(old_name, new_name))
            }
            Self::AddColumn {
                table,
                column,
                column_type,
            } => Some(MutationRequest::add_column(table, column, column_type)),
            Self::RenameColumn {
                table,
                old_name,
                new_name,
            } => Some(MutationRequest::rename_column(table, old_name, new_name)),
            Self::ChangeType {
                table,
                column,
                column_type,
            } => Some(MutationRequest::change_column_type(table, column, column_type)),
            Self::Reorder { table, columns } => {
                Some(MutationRequest::reorder_columns(table, columns))
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let kind = cli.dialect.as_deref().map_or_else(
        || DialectKind::from_database_url(&cli.database),
        DialectKind::from_config_value,
    );

    // Connect to database
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(5)
        .connect(&cli.database)
        .await?;

    let engine = SchemaEngine::new(pool, kind);

    match cli.command {
        Commands::Tables => {
            for (table, columns) in engine.list_tables_with_columns().await? {
                println!("{table}");
                for column in columns {
                    println!("  {}", describe_column(&column));
                }
            }
        }
        Commands::Columns { table } => {
            for column in engine.list_columns(&table).await? {
                println!("{}", describe_column(&column));
            }
        }
        command => {
            if let Some(request) = command.request() {
                let result = engine.apply(&request).await;
                if !result.success {
                    anyhow::bail!(result.message);
                }
                println!("{}", result.message);
            }
        }
    }

    Ok(())
}

fn describe_column(column: &ColumnDescriptor) -> String {
    let mut parts = vec![column.name.clone(), column.data_type.clone()];
    if !column.nullable {
        parts.push("NOT NULL".to_string());
    }
    if let Some(default) = &column.default {
        parts.push(format!("DEFAULT {default}"));
    }
    if !column.extra.is_empty() {
        parts.push(column.extra.clone());
    }
    parts.join(" ")
}
