use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::todo::{CreateTodoRequest, TodoItem, UpdateTodoRequest};
use crate::AppState;

pub async fn create_todo(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateTodoRequest>,
) -> AppResult<(StatusCode, Json<TodoItem>)> {
    let text = body.text.filter(|t| !t.is_empty()).ok_or_else(|| {
        AppError::Validation("Todo text is required".into())
    })?;

    let todo = sqlx::query_as::<_, TodoItem>(
        r#"
        INSERT INTO todos (id, user_id, text)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(&text)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn list_todos(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<TodoItem>>> {
    let todos = sqlx::query_as::<_, TodoItem>(
        r#"
        SELECT * FROM todos
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(todos))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(todo_id): Path<Uuid>,
    Json(body): Json<UpdateTodoRequest>,
) -> AppResult<Json<TodoItem>> {
    // Absent and not-owned both fall through to the same 404.
    let todo = sqlx::query_as::<_, TodoItem>(
        r#"
        UPDATE todos SET completed = $3
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(todo_id)
    .bind(auth_user.id)
    .bind(body.completed)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("Todo not found".into()))?;

    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(todo_id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND user_id = $2")
        .bind(todo_id)
        .bind(auth_user.id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Todo not found".into()));
    }

    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}
