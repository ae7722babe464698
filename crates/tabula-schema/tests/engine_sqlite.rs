//! Engine round trips against in-memory SQLite.

use std::sync::Once;

use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use tabula_schema::prelude::*;

static DRIVERS: Once = Once::new();

async fn sqlite_pool() -> AnyPool {
    DRIVERS.call_once(sqlx::any::install_default_drivers);
    AnyPoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to create in-memory SQLite pool")
}

async fn sqlite_engine() -> SchemaEngine {
    SchemaEngine::new(sqlite_pool().await, DialectKind::Sqlite)
}

#[tokio::test]
async fn test_add_table_seeds_id_column() {
    let engine = sqlite_engine().await;

    let result = engine.apply(&MutationRequest::add_table("posts")).await;
    assert!(result.success, "{}", result.message);

    let tables = engine.list_tables().await.unwrap();
    assert_eq!(tables, vec!["posts"]);

    let columns = engine.list_columns("posts").await.unwrap();
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].name, "id");
    assert_eq!(columns[0].data_type, "INTEGER");
}

#[tokio::test]
async fn test_add_column_appends_last() {
    let engine = sqlite_engine().await;
    engine.apply(&MutationRequest::add_table("posts")).await;

    let result = engine
        .apply(&MutationRequest::add_column("posts", "status", "VARCHAR(255)"))
        .await;
    assert!(result.success, "{}", result.message);
    assert!(result.message.contains("status"));

    let columns = engine.list_columns("posts").await.unwrap();
    assert_eq!(columns.last().unwrap().name, "status");
}

#[tokio::test]
async fn test_add_column_to_missing_table_fails_before_alter() {
    let engine = sqlite_engine().await;

    let err = engine
        .try_apply(&MutationRequest::add_column("ghosts", "status", "TEXT"))
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::Introspection(_)));
    assert!(engine.list_tables().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_duplicate_column_is_rejected() {
    let engine = sqlite_engine().await;
    engine.apply(&MutationRequest::add_table("posts")).await;

    let err = engine
        .try_apply(&MutationRequest::add_column("posts", "ID", "TEXT"))
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::Validation(_)));
}

#[tokio::test]
async fn test_rename_table() {
    let engine = sqlite_engine().await;
    engine.apply(&MutationRequest::add_table("posts")).await;

    let result = engine
        .apply(&MutationRequest::rename_table("posts", "articles"))
        .await;
    assert!(result.success, "{}", result.message);

    let tables = engine.list_tables().await.unwrap();
    assert_eq!(tables, vec!["articles"]);
}

#[tokio::test]
async fn test_rename_table_to_self_is_no_op() {
    let engine = sqlite_engine().await;

    // Succeeds without a statement even though the table does not exist.
    let result = engine
        .apply(&MutationRequest::rename_table("posts", "posts"))
        .await;
    assert!(result.success, "{}", result.message);
}

#[tokio::test]
async fn test_rename_column() {
    let engine = sqlite_engine().await;
    engine.apply(&MutationRequest::add_table("posts")).await;
    engine
        .apply(&MutationRequest::add_column("posts", "title", "TEXT"))
        .await;

    let result = engine
        .apply(&MutationRequest::rename_column("posts", "title", "headline"))
        .await;
    assert!(result.success, "{}", result.message);

    let columns = engine.list_columns("posts").await.unwrap();
    assert!(columns.iter().any(|c| c.name == "headline"));
    assert!(!columns.iter().any(|c| c.name == "title"));
}

#[tokio::test]
async fn test_rename_column_to_self_is_no_op() {
    let engine = sqlite_engine().await;

    let result = engine
        .apply(&MutationRequest::rename_column("posts", "title", "title"))
        .await;
    assert!(result.success, "{}", result.message);
}

#[tokio::test]
async fn test_rename_missing_column_fails() {
    let engine = sqlite_engine().await;
    engine.apply(&MutationRequest::add_table("posts")).await;

    let err = engine
        .try_apply(&MutationRequest::rename_column("posts", "ghost", "spirit"))
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::Validation(_)));
}

#[tokio::test]
async fn test_change_column_type_unsupported_on_sqlite() {
    let engine = sqlite_engine().await;
    engine.apply(&MutationRequest::add_table("posts")).await;

    let err = engine
        .try_apply(&MutationRequest::change_column_type("posts", "id", "TEXT"))
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::Unsupported { .. }));
}

#[tokio::test]
async fn test_reorder_unsupported_on_sqlite() {
    let engine = sqlite_engine().await;
    engine.apply(&MutationRequest::add_table("posts")).await;

    // Rejected up front, payload validity notwithstanding.
    let err = engine
        .try_apply(&MutationRequest::reorder_columns(
            "posts",
            vec!["id".to_string()],
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::Unsupported { .. }));

    let err = engine
        .try_apply(&MutationRequest::reorder_columns("posts", Vec::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::Unsupported { .. }));
}

#[tokio::test]
async fn test_invalid_identifier_recovered_as_failure_message() {
    let engine = sqlite_engine().await;

    let result = engine
        .apply(&MutationRequest::add_table("1bad; DROP"))
        .await;
    assert!(!result.success);
    assert!(result.message.contains("invalid identifier"));
    assert!(engine.list_tables().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_tables_with_columns() {
    let engine = sqlite_engine().await;
    engine.apply(&MutationRequest::add_table("posts")).await;
    engine.apply(&MutationRequest::add_table("authors")).await;
    engine
        .apply(&MutationRequest::add_column("posts", "title", "TEXT"))
        .await;

    let tables = engine.list_tables_with_columns().await.unwrap();
    assert_eq!(tables.len(), 2);
    // SQLite listing is alphabetic.
    assert_eq!(tables[0].0, "authors");
    assert_eq!(tables[1].0, "posts");
    assert_eq!(tables[1].1.len(), 2);
}

#[tokio::test]
async fn test_execution_error_surfaces_server_message() {
    let engine = sqlite_engine().await;
    engine.apply(&MutationRequest::add_table("posts")).await;

    // Creating the same table again is rejected by the server itself.
    let err = engine
        .try_apply(&MutationRequest::add_table("posts"))
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::Execution(_)));
}
