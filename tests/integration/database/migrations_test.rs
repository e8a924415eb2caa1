//! Database migration tests
//!
//! Tests to ensure migrations run correctly and database schema is valid

use crate::common::database::{create_test_pool, run_migrations};

const TABLES: [&str; 7] = [
    "users",
    "friend_edges",
    "letters",
    "articles",
    "comments",
    "communities",
    "community_members",
];

#[tokio::test]
async fn test_migrations_run_successfully() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    let result = run_migrations(&pool).await;
    assert!(result.is_ok(), "Migrations should run successfully: {:?}", result);

    // a second run finds nothing left to apply
    let result = run_migrations(&pool).await;
    assert!(result.is_ok(), "Migrations should be re-runnable: {:?}", result);
}

#[tokio::test]
async fn test_tables_exist() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    run_migrations(&pool).await.unwrap();

    for table in TABLES {
        let result = sqlx::query(&format!("SELECT 1 FROM {} LIMIT 1", table))
            .execute(&pool)
            .await;
        assert!(result.is_ok(), "{} table should exist", table);
    }
}

#[tokio::test]
async fn test_friend_edges_constraints_exist() {
    let Some(pool) = create_test_pool().await else {
        return;
    };
    run_migrations(&pool).await.unwrap();

    let constraints: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT conname::text
        FROM pg_constraint
        WHERE conrelid = 'friend_edges'::regclass
        ORDER BY conname
        "#,
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(constraints.contains(&"friend_edges_pkey".to_string()));
    assert!(constraints.contains(&"friend_edges_canonical_order".to_string()));
}
