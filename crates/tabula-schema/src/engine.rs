//! The schema engine facade.

use sqlx::AnyPool;
use tracing::{debug, warn};

use crate::column::ColumnDescriptor;
use crate::config::DialectKind;
use crate::definition::parse_column_clauses;
use crate::dialect::Dialect;
use crate::error::{Result, SchemaError};
use crate::executor::MutationExecutor;
use crate::introspect::Introspector;
use crate::planner::{self, ReorderCheck};
use crate::request::{MutationRequest, MutationResult};

/// The sole mutating entry point over a live database.
///
/// Holds nothing but the shared connection pool and the dialect selected at
/// startup; every request re-introspects the state it needs, so two
/// consecutive mutations never see each other's stale metadata.
pub struct SchemaEngine {
    pool: AnyPool,
    dialect: Box<dyn Dialect>,
    executor: MutationExecutor,
}

impl SchemaEngine {
    /// Creates an engine over `pool` speaking the given dialect.
    #[must_use]
    pub fn new(pool: AnyPool, kind: DialectKind) -> Self {
        let executor = MutationExecutor::new(pool.clone());
        Self {
            pool,
            dialect: kind.dialect(),
            executor,
        }
    }

    /// Returns the active dialect.
    #[must_use]
    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    fn introspector(&self) -> Introspector<'_> {
        Introspector::new(&self.pool, self.dialect.as_ref())
    }

    /// Lists all table names.
    pub async fn list_tables(&self) -> Result<Vec<String>> {
        self.introspector().list_tables().await
    }

    /// Lists the columns of `table` in ordinal order.
    pub async fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        self.introspector().list_columns(table).await
    }

    /// Lists every table together with its columns, for rendering.
    pub async fn list_tables_with_columns(
        &self,
    ) -> Result<Vec<(String, Vec<ColumnDescriptor>)>> {
        let introspector = self.introspector();
        let mut tables = Vec::new();
        for name in introspector.list_tables().await? {
            let columns = introspector.list_columns(&name).await?;
            tables.push((name, columns));
        }
        Ok(tables)
    }

    /// Applies a mutation request, recovering every failure into a
    /// [`MutationResult`] message.
    pub async fn apply(&self, request: &MutationRequest) -> MutationResult {
        debug!(request = %request.description(), "applying mutation");
        match self.try_apply(request).await {
            Ok(message) => MutationResult::ok(message),
            Err(err) => {
                warn!(error = %err, "mutation failed");
                MutationResult::failure(err.to_string())
            }
        }
    }

    /// Applies a mutation request, surfacing typed errors.
    pub async fn try_apply(&self, request: &MutationRequest) -> Result<String> {
        match request {
            MutationRequest::AddTable { name } => {
                let plan = planner::plan_add_table(self.dialect(), name)?;
                self.executor.execute(&plan).await
            }

            MutationRequest::RenameTable { old_name, new_name } => {
                let plan = planner::plan_rename_table(self.dialect(), old_name, new_name)?;
                self.executor.execute(&plan).await
            }

            MutationRequest::AddColumn {
                table,
                column,
                column_type,
            } => {
                let current = self.existing_columns(table).await?;
                let plan = planner::plan_add_column(
                    self.dialect(),
                    table,
                    column,
                    column_type,
                    &current,
                )?;
                self.executor.execute(&plan).await
            }

            MutationRequest::RenameColumn {
                table,
                old_name,
                new_name,
            } => {
                // Rename-to-self needs no introspection; the planner
                // short-circuits before it looks at the column list.
                let current = if old_name == new_name {
                    Vec::new()
                } else {
                    self.existing_columns(table).await?
                };
                let plan = planner::plan_rename_column(
                    self.dialect(),
                    table,
                    old_name,
                    new_name,
                    &current,
                )?;
                self.executor.execute(&plan).await
            }

            MutationRequest::ChangeColumnType {
                table,
                column,
                column_type,
            } => {
                if !self.dialect.supports_change_column_type() {
                    return Err(SchemaError::Unsupported {
                        dialect: self.dialect.name(),
                        operation: "changing a column's type",
                    });
                }
                let current = self.existing_columns(table).await?;
                let plan = planner::plan_change_column_type(
                    self.dialect(),
                    table,
                    column,
                    column_type,
                    &current,
                )?;
                self.executor.execute(&plan).await
            }

            MutationRequest::ReorderColumns { table, order } => {
                self.reorder_columns(table, order).await
            }
        }
    }

    async fn reorder_columns(&self, table: &str, order: &[String]) -> Result<String> {
        if !self.dialect.supports_reorder() {
            return Err(SchemaError::Unsupported {
                dialect: self.dialect.name(),
                operation: "column reordering",
            });
        }
        planner::verify_reorder_payload(table, order)?;

        let current = self.existing_columns(table).await?;
        match planner::check_reorder_order(table, order, &current)? {
            ReorderCheck::UpToDate => Ok(planner::reorder_up_to_date_message(table)),
            ReorderCheck::OutOfOrder => {
                let definition = self.introspector().table_definition(table).await?;
                let clauses = parse_column_clauses(&definition);
                let plan = planner::plan_reorder(self.dialect(), table, order, &clauses)?;
                self.executor.execute(&plan).await
            }
        }
    }

    /// Introspects `table` and fails when it yields no columns.
    ///
    /// A zero-column result means the table does not exist (or the catalog
    /// cannot see it); either way no ALTER may be issued against it.
    async fn existing_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let columns = self.introspector().list_columns(table).await?;
        if columns.is_empty() {
            return Err(SchemaError::Introspection(format!(
                "table '{table}' does not exist or has no columns"
            )));
        }
        Ok(columns)
    }
}
