use jawnz_core::CommentEntity;

use chrono::{TimeZone, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    jawnz_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn sample_entity(user: &str, content: &str) -> CommentEntity {
    CommentEntity::new(
        format!("{}-id", user),
        user,
        content,
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
    )
}
