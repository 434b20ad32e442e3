//! Shared fixtures for database-backed tests.

use sqlx::PgPool;
use uuid::Uuid;

use crate::config::Config;

pub fn test_config() -> Config {
    Config {
        database_url: String::new(),
        host: "127.0.0.1".into(),
        port: 0,
        frontend_url: "http://localhost:5173".into(),
        jwt_secret: "test-secret".into(),
        jwt_ttl_secs: 3600,
    }
}

/// Insert a user row directly; the hash is never verified by these tests.
pub async fn seed_user(pool: &PgPool, email: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO users (id, name, email, password_hash) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind("Test User")
        .bind(email)
        .bind("unused-hash")
        .execute(pool)
        .await
        .unwrap();
    id
}
