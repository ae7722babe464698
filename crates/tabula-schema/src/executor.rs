//! Mutation plan execution.

use sqlx::AnyPool;
use tracing::{debug, info};

use crate::error::Result;
use crate::planner::MutationPlan;

/// Executes mutation plans against the live connection.
///
/// DDL statements are dialect-native and typically auto-commit; the
/// executor issues them in plan order and stops at the first failure.
pub struct MutationExecutor {
    pool: AnyPool,
}

impl MutationExecutor {
    /// Creates a new executor over the given pool.
    #[must_use]
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Issues every statement of `plan`, returning its confirmation message.
    ///
    /// An empty plan succeeds without touching the database. Driver errors
    /// surface as [`crate::error::SchemaError::Execution`] with the
    /// server's own message.
    pub async fn execute(&self, plan: &MutationPlan) -> Result<String> {
        for sql in &plan.statements {
            debug!(sql = %sql, "executing DDL");
            sqlx::query(sql).execute(&self.pool).await?;
        }
        if !plan.statements.is_empty() {
            info!(statements = plan.statements.len(), "mutation applied");
        }
        Ok(plan.message.clone())
    }
}
