use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

use crate::auth::{
    jwt::create_token,
    password::{hash_password, verify_password},
};
use crate::error::{AppError, AppResult};
use crate::models::user::{LoginRequest, LoginResponse, RegisterRequest, User};
use crate::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let pwd_hash = hash_password(&body.password)?;

    // The unique index on email arbitrates: concurrent registrations both
    // reach the insert and exactly one wins, no lookup-then-insert window.
    let result = sqlx::query(
        r#"
        INSERT INTO users (id, name, email, password_hash)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&body.name)
    .bind(&body.email)
    .bind(&pwd_hash)
    .execute(&state.db)
    .await;

    match result {
        Ok(_) => {}
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(AppError::Conflict("Email already registered".into()));
        }
        Err(e) => return Err(e.into()),
    }

    tracing::info!(email = %body.email, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully" })),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // Same 401 whether the email is unknown or the password is wrong.
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(&body.email)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid credentials".into()))?;

    if !verify_password(&body.password, &user.password_hash)? {
        return Err(AppError::Unauthorized("Invalid credentials".into()));
    }

    let token = create_token(user.id, &state.config)?;

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::PgPool;
    use std::sync::Arc;

    use crate::auth::rate_limit::RateLimitState;
    use crate::test_support::test_config;

    fn state_for(pool: PgPool) -> AppState {
        AppState {
            db: pool,
            config: Arc::new(test_config()),
            rate_limiter: RateLimitState::new(),
        }
    }

    fn register_body(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[sqlx::test]
    async fn duplicate_email_registers_exactly_once(pool: PgPool) {
        let state = state_for(pool.clone());

        let first = register(
            State(state.clone()),
            Json(register_body("Ana", "ana@example.com", "hunter22")),
        )
        .await;
        assert!(first.is_ok());

        let second = register(
            State(state),
            Json(register_body("Impostor", "ana@example.com", "other-pass")),
        )
        .await;
        assert!(matches!(second, Err(AppError::Conflict(_))));

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind("ana@example.com")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[sqlx::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable(pool: PgPool) {
        let state = state_for(pool);

        register(
            State(state.clone()),
            Json(register_body("Ana", "ana@example.com", "hunter22")),
        )
        .await
        .unwrap();

        let wrong_password = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "ana@example.com".into(),
                password: "not-her-password".into(),
            }),
        )
        .await;
        let unknown_email = login(
            State(state),
            Json(LoginRequest {
                email: "nobody@example.com".into(),
                password: "hunter22".into(),
            }),
        )
        .await;

        let (Err(AppError::Unauthorized(a)), Err(AppError::Unauthorized(b))) =
            (wrong_password, unknown_email)
        else {
            panic!("both login failures must be 401");
        };
        assert_eq!(a, b);
    }

    #[sqlx::test]
    async fn login_returns_token_and_profile_without_hash(pool: PgPool) {
        let state = state_for(pool);

        register(
            State(state.clone()),
            Json(register_body("Ana", "ana@example.com", "hunter22")),
        )
        .await
        .unwrap();

        let Json(resp) = login(
            State(state),
            Json(LoginRequest {
                email: "ana@example.com".into(),
                password: "hunter22".into(),
            }),
        )
        .await
        .unwrap();

        assert!(!resp.token.is_empty());
        assert_eq!(resp.user.email, "ana@example.com");
        let json = serde_json::to_value(&resp.user).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
