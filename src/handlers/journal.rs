use axum::{extract::State, Extension, Json};
use chrono::Utc;
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::journal::{CreateJournalRequest, JournalEntry};
use crate::AppState;

pub async fn save_entry(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateJournalRequest>,
) -> AppResult<Json<JournalEntry>> {
    let (Some(lesson), Some(appreciation), Some(gratitude), Some(mood)) =
        (body.lesson, body.appreciation, body.gratitude, body.mood)
    else {
        return Err(AppError::Validation("All fields are required".into()));
    };
    if lesson.is_empty() || appreciation.is_empty() || gratitude.is_empty() || mood.is_empty() {
        return Err(AppError::Validation("All fields are required".into()));
    }

    let entry_date = body.date.unwrap_or_else(|| Utc::now().date_naive());

    // Same (user, day) upsert shape as moods; all four texts are replaced
    // together, created_at stays with the original submission.
    let entry = sqlx::query_as::<_, JournalEntry>(
        r#"
        INSERT INTO journal_entries (id, user_id, entry_date, lesson, appreciation, gratitude, mood)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (user_id, entry_date) DO UPDATE SET
            lesson = EXCLUDED.lesson,
            appreciation = EXCLUDED.appreciation,
            gratitude = EXCLUDED.gratitude,
            mood = EXCLUDED.mood
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(entry_date)
    .bind(&lesson)
    .bind(&appreciation)
    .bind(&gratitude)
    .bind(&mood)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(entry))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<JournalEntry>>> {
    let entries = sqlx::query_as::<_, JournalEntry>(
        r#"
        SELECT * FROM journal_entries
        WHERE user_id = $1
        ORDER BY entry_date DESC
        LIMIT 30
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(entries))
}
