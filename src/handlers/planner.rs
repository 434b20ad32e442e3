use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::planner::{parse_time_of_day, CreatePlannerRequest, PlannerTask, TaskPriority};
use crate::AppState;

pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreatePlannerRequest>,
) -> AppResult<(StatusCode, Json<PlannerTask>)> {
    let (Some(text), Some(time), Some(priority)) = (body.text, body.time, body.priority) else {
        return Err(AppError::Validation("All fields are required".into()));
    };
    if text.is_empty() {
        return Err(AppError::Validation("All fields are required".into()));
    }

    let time_of_day = parse_time_of_day(&time)
        .ok_or_else(|| AppError::Validation("Invalid time value".into()))?;
    let priority = priority
        .parse::<TaskPriority>()
        .map_err(|_| AppError::Validation("Invalid priority value".into()))?;

    let task = sqlx::query_as::<_, PlannerTask>(
        r#"
        INSERT INTO planner_tasks (id, user_id, text, time_of_day, priority)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(&text)
    .bind(time_of_day)
    .bind(priority)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<PlannerTask>>> {
    // Day view ordering: time slot, not priority or insertion order.
    let tasks = sqlx::query_as::<_, PlannerTask>(
        r#"
        SELECT * FROM planner_tasks
        WHERE user_id = $1
        ORDER BY time_of_day ASC
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(tasks))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(task_id): Path<Uuid>,
) -> AppResult<Json<Value>> {
    let result = sqlx::query("DELETE FROM planner_tasks WHERE id = $1 AND user_id = $2")
        .bind(task_id)
        .bind(auth_user.id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Task not found".into()));
    }

    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
