use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

// Per-user data volumes are tiny and every query is a point read or single
// upsert, so a small pool with a short acquire deadline is plenty.
pub async fn create_pool(database_url: &str) -> PgPool {
    PgPoolOptions::new()
        .min_connections(1)
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .idle_timeout(Duration::from_secs(600))
        .connect(database_url)
        .await
        .expect("Failed to create database pool")
}
