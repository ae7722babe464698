//! Mutation planning.
//!
//! Each request variant is turned into an ordered list of DDL statements
//! plus a confirmation message. Planning is pure: the engine introspects
//! first and hands the current state in, so every property of the plan can
//! be tested without a database.

use std::collections::HashMap;

use crate::column::ColumnDescriptor;
use crate::dialect::Dialect;
use crate::error::{Result, SchemaError};
use crate::validate::ensure_identifier;

/// An ordered list of statements implementing one mutation request.
///
/// A plan may be empty (rename-to-self, reorder to the current order);
/// executing an empty plan succeeds without touching the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationPlan {
    /// Statements to issue, in order.
    pub statements: Vec<String>,
    /// Confirmation message for a successful execution.
    pub message: String,
}

impl MutationPlan {
    fn new(statements: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            statements,
            message: message.into(),
        }
    }

    fn no_op(message: impl Into<String>) -> Self {
        Self::new(Vec::new(), message)
    }
}

/// Outcome of comparing a requested column order against the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderCheck {
    /// The table already has the requested order; nothing to do.
    UpToDate,
    /// The order differs and a plan is needed.
    OutOfOrder,
}

/// Plans table creation.
pub fn plan_add_table(dialect: &dyn Dialect, name: &str) -> Result<MutationPlan> {
    let statement = dialect.create_table_sql(name)?;
    Ok(MutationPlan::new(
        vec![statement],
        format!("Table '{name}' created"),
    ))
}

/// Plans a table rename. Renaming a table to itself is a no-op.
pub fn plan_rename_table(dialect: &dyn Dialect, old: &str, new: &str) -> Result<MutationPlan> {
    ensure_identifier(old)?;
    ensure_identifier(new)?;
    if old == new {
        return Ok(MutationPlan::no_op(format!(
            "Table '{old}' already has that name"
        )));
    }
    let statement = dialect.rename_table_sql(old, new)?;
    Ok(MutationPlan::new(
        vec![statement],
        format!("Table '{old}' renamed to '{new}'"),
    ))
}

/// Plans adding `column` to `table`.
pub fn plan_add_column(
    dialect: &dyn Dialect,
    table: &str,
    column: &str,
    type_expr: &str,
    current: &[ColumnDescriptor],
) -> Result<MutationPlan> {
    if find_column(current, column).is_some() {
        return Err(SchemaError::Validation(format!(
            "column '{column}' already exists in table '{table}'"
        )));
    }
    let statement = dialect.add_column_sql(table, column, type_expr)?;
    Ok(MutationPlan::new(
        vec![statement],
        format!("Column '{column}' added to table '{table}'"),
    ))
}

/// Plans a column rename. Renaming a column to itself is a no-op.
pub fn plan_rename_column(
    dialect: &dyn Dialect,
    table: &str,
    old: &str,
    new: &str,
    current: &[ColumnDescriptor],
) -> Result<MutationPlan> {
    ensure_identifier(old)?;
    ensure_identifier(new)?;
    if old == new {
        return Ok(MutationPlan::no_op(format!(
            "Column '{old}' already has that name"
        )));
    }
    if find_column(current, old).is_none() {
        return Err(unknown_column(table, old));
    }
    if find_column(current, new).is_some() {
        return Err(SchemaError::Validation(format!(
            "column '{new}' already exists in table '{table}'"
        )));
    }
    let statement = dialect.rename_column_sql(table, old, new)?;
    Ok(MutationPlan::new(
        vec![statement],
        format!("Column '{old}' renamed to '{new}' in table '{table}'"),
    ))
}

/// Plans changing the type of `column` on `table`.
pub fn plan_change_column_type(
    dialect: &dyn Dialect,
    table: &str,
    column: &str,
    type_expr: &str,
    current: &[ColumnDescriptor],
) -> Result<MutationPlan> {
    if find_column(current, column).is_none() {
        return Err(unknown_column(table, column));
    }
    let statement = dialect.change_column_type_sql(table, column, type_expr)?;
    Ok(MutationPlan::new(
        vec![statement],
        format!("Column '{column}' of table '{table}' changed to {type_expr}"),
    ))
}

/// Validates a reorder payload before any introspection happens.
///
/// The order list must be non-empty, every entry a valid identifier and no
/// name repeated (case-insensitively).
pub fn verify_reorder_payload(table: &str, order: &[String]) -> Result<()> {
    ensure_identifier(table)?;
    if order.is_empty() {
        return Err(SchemaError::validation("no column order given"));
    }
    let mut seen = Vec::with_capacity(order.len());
    for name in order {
        ensure_identifier(name)?;
        let lowered = name.to_lowercase();
        if seen.contains(&lowered) {
            return Err(SchemaError::Validation(format!(
                "column '{name}' appears more than once in the requested order"
            )));
        }
        seen.push(lowered);
    }
    Ok(())
}

/// Verifies the requested order is a permutation of the current columns.
///
/// Matching is case-insensitive; a requested name that no column carries,
/// or a column the request omits, fails the whole plan. Returns
/// [`ReorderCheck::UpToDate`] when the request equals the current order.
pub fn check_reorder_order(
    table: &str,
    order: &[String],
    current: &[ColumnDescriptor],
) -> Result<ReorderCheck> {
    let existing: Vec<String> = current.iter().map(|c| c.name.to_lowercase()).collect();

    for name in order {
        if !existing.contains(&name.to_lowercase()) {
            return Err(unknown_column(table, name));
        }
    }
    if order.len() != current.len() {
        let missing = current
            .iter()
            .find(|c| !order.iter().any(|n| n.eq_ignore_ascii_case(&c.name)))
            .map_or_else(String::new, |c| c.name.clone());
        return Err(SchemaError::Validation(format!(
            "requested order omits column '{missing}' of table '{table}'"
        )));
    }

    let unchanged = order
        .iter()
        .zip(current)
        .all(|(requested, column)| requested.eq_ignore_ascii_case(&column.name));
    if unchanged {
        Ok(ReorderCheck::UpToDate)
    } else {
        Ok(ReorderCheck::OutOfOrder)
    }
}

/// Builds the reorder plan from the parsed per-column clauses.
///
/// Emits one `MODIFY COLUMN <name> <clause> FIRST` for the first position
/// and `MODIFY COLUMN <name> <clause> AFTER <previous>` for each one after,
/// combined into a single multi-clause `ALTER TABLE` so the reorder is one
/// atomic statement. A requested column whose clause was not recovered
/// fails the whole plan: a definition the engine cannot reproduce verbatim
/// must never be re-issued.
pub fn plan_reorder(
    dialect: &dyn Dialect,
    table: &str,
    order: &[String],
    clauses: &HashMap<String, String>,
) -> Result<MutationPlan> {
    if clauses.is_empty() {
        return Err(SchemaError::Introspection(format!(
            "could not parse the definition of table '{table}'"
        )));
    }

    let mut modifications = Vec::with_capacity(order.len());
    let mut previous: Option<&str> = None;
    for name in order {
        let (spelling, clause) = clauses
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                SchemaError::Introspection(format!(
                    "definition of column '{name}' in table '{table}' could not be recovered"
                ))
            })?;
        let quoted = dialect.quote_identifier(spelling)?;
        let position = match previous {
            None => "FIRST".to_string(),
            Some(prev) => format!("AFTER {}", dialect.quote_identifier(prev)?),
        };
        modifications.push(format!("MODIFY COLUMN {quoted} {clause} {position}"));
        previous = Some(spelling.as_str());
    }

    let statement = format!(
        "ALTER TABLE {} {}",
        dialect.quote_identifier(table)?,
        modifications.join(", ")
    );
    Ok(MutationPlan::new(
        vec![statement],
        format!("Columns of table '{table}' reordered"),
    ))
}

/// Message for a reorder that matches the current order.
#[must_use]
pub fn reorder_up_to_date_message(table: &str) -> String {
    format!("Columns of table '{table}' are already in the requested order")
}

fn find_column<'a>(current: &'a [ColumnDescriptor], name: &str) -> Option<&'a ColumnDescriptor> {
    current.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

fn unknown_column(table: &str, column: &str) -> SchemaError {
    SchemaError::Validation(format!("unknown column '{column}' in table '{table}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::parse_column_clauses;
    use crate::dialect::MySqlDialect;

    fn posts_columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("id", "int"),
            ColumnDescriptor::new("title", "varchar(255)"),
            ColumnDescriptor::new("body", "text"),
            ColumnDescriptor::new("created_at", "timestamp"),
        ]
    }

    fn posts_clauses() -> HashMap<String, String> {
        parse_column_clauses(
            "CREATE TABLE `posts` (\n\
             \x20 `id` int NOT NULL AUTO_INCREMENT,\n\
             \x20 `title` varchar(255) NOT NULL,\n\
             \x20 `body` text,\n\
             \x20 `created_at` timestamp NOT NULL DEFAULT CURRENT_TIMESTAMP,\n\
             \x20 PRIMARY KEY (`id`)\n\
             ) ENGINE=InnoDB",
        )
    }

    fn order(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_rename_table_to_self_is_no_op() {
        let plan = plan_rename_table(&MySqlDialect::new(), "posts", "posts").unwrap();
        assert!(plan.statements.is_empty());
    }

    #[test]
    fn test_rename_column_to_self_is_no_op() {
        let plan =
            plan_rename_column(&MySqlDialect::new(), "posts", "title", "title", &posts_columns())
                .unwrap();
        assert!(plan.statements.is_empty());
    }

    #[test]
    fn test_add_column_rejects_existing_name() {
        let err = plan_add_column(
            &MySqlDialect::new(),
            "posts",
            "Title",
            "TEXT",
            &posts_columns(),
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::Validation(_)));
    }

    #[test]
    fn test_rename_column_requires_existing_source() {
        let err = plan_rename_column(
            &MySqlDialect::new(),
            "posts",
            "missing",
            "other",
            &posts_columns(),
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::Validation(_)));
    }

    #[test]
    fn test_change_column_type_requires_existing_column() {
        let err = plan_change_column_type(
            &MySqlDialect::new(),
            "posts",
            "missing",
            "TEXT",
            &posts_columns(),
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::Validation(_)));
    }

    #[test]
    fn test_reorder_payload_rejects_duplicates() {
        let err =
            verify_reorder_payload("posts", &order(&["id", "title", "ID"])).unwrap_err();
        assert!(matches!(err, SchemaError::Validation(_)));
    }

    #[test]
    fn test_reorder_payload_rejects_empty_and_invalid() {
        assert!(verify_reorder_payload("posts", &[]).is_err());
        assert!(verify_reorder_payload("posts", &order(&["id", "bad name"])).is_err());
        assert!(verify_reorder_payload("1posts", &order(&["id"])).is_err());
    }

    #[test]
    fn test_reorder_rejects_unknown_column() {
        let err = check_reorder_order(
            "posts",
            &order(&["id", "title", "body", "ghost"]),
            &posts_columns(),
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::Validation(_)));
    }

    #[test]
    fn test_reorder_rejects_omitted_column() {
        let err =
            check_reorder_order("posts", &order(&["id", "title", "body"]), &posts_columns())
                .unwrap_err();
        match err {
            SchemaError::Validation(message) => assert!(message.contains("created_at")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_reorder_detects_up_to_date() {
        let check = check_reorder_order(
            "posts",
            &order(&["id", "title", "body", "created_at"]),
            &posts_columns(),
        )
        .unwrap();
        assert_eq!(check, ReorderCheck::UpToDate);

        // Matching is case-insensitive.
        let check = check_reorder_order(
            "posts",
            &order(&["ID", "Title", "body", "created_at"]),
            &posts_columns(),
        )
        .unwrap();
        assert_eq!(check, ReorderCheck::UpToDate);
    }

    #[test]
    fn test_reorder_detects_out_of_order() {
        let check = check_reorder_order(
            "posts",
            &order(&["id", "created_at", "title", "body"]),
            &posts_columns(),
        )
        .unwrap();
        assert_eq!(check, ReorderCheck::OutOfOrder);
    }

    #[test]
    fn test_reorder_emits_single_combined_alter() {
        let plan = plan_reorder(
            &MySqlDialect::new(),
            "posts",
            &order(&["id", "created_at", "title", "body"]),
            &posts_clauses(),
        )
        .unwrap();

        assert_eq!(plan.statements.len(), 1);
        assert_eq!(
            plan.statements[0],
            "ALTER TABLE `posts` \
             MODIFY COLUMN `id` int NOT NULL AUTO_INCREMENT FIRST, \
             MODIFY COLUMN `created_at` timestamp NOT NULL DEFAULT CURRENT_TIMESTAMP AFTER `id`, \
             MODIFY COLUMN `title` varchar(255) NOT NULL AFTER `created_at`, \
             MODIFY COLUMN `body` text AFTER `title`"
        );
    }

    #[test]
    fn test_reorder_fails_when_clause_missing() {
        let mut clauses = posts_clauses();
        clauses.remove("created_at");
        let err = plan_reorder(
            &MySqlDialect::new(),
            "posts",
            &order(&["id", "created_at", "title", "body"]),
            &clauses,
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::Introspection(_)));
    }

    #[test]
    fn test_reorder_fails_on_empty_clause_map() {
        let err = plan_reorder(
            &MySqlDialect::new(),
            "posts",
            &order(&["id"]),
            &HashMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::Introspection(_)));
    }

    #[test]
    fn test_reorder_uses_server_spelling() {
        // Request uses a different case; the emitted clause keeps the
        // server's own spelling from the definition text.
        let plan = plan_reorder(
            &MySqlDialect::new(),
            "posts",
            &order(&["CREATED_AT", "id", "title", "body"]),
            &posts_clauses(),
        )
        .unwrap();
        assert!(plan.statements[0].contains("MODIFY COLUMN `created_at`"));
        assert!(plan.statements[0].contains("AFTER `created_at`"));
    }
}
