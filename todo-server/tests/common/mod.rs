#![allow(dead_code)]

//! Test infrastructure for todo-server API tests

use todo_server::AppState;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory SQLite needs a single connection so every statement
    // sees the same database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/todo-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Insert a task directly, bypassing the API
pub async fn create_test_task(pool: &SqlitePool, title: &str, description: &str) -> i64 {
    let result = sqlx::query("INSERT INTO tasks (title, description, completed) VALUES (?, ?, 0)")
        .bind(title)
        .bind(description)
        .execute(pool)
        .await
        .expect("Failed to create test task");

    result.last_insert_rowid()
}
