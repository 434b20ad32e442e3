use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::mood::{CreateMoodRequest, MoodEntry, MoodLabel, MoodRangeQuery};
use crate::AppState;

pub async fn save_mood(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateMoodRequest>,
) -> AppResult<Json<MoodEntry>> {
    let (Some(mood), Some(date)) = (body.mood, body.date) else {
        return Err(AppError::Validation("Mood and date are required".into()));
    };

    let mood = mood
        .parse::<MoodLabel>()
        .map_err(|_| AppError::Validation("Invalid mood value".into()))?;

    // One entry per (user, day): a second submission for the same day
    // replaces the label in a single conditional write, keeping the row's
    // original created_at.
    let entry = sqlx::query_as::<_, MoodEntry>(
        r#"
        INSERT INTO moods (id, user_id, entry_date, mood)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, entry_date) DO UPDATE SET mood = EXCLUDED.mood
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(date)
    .bind(mood)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(entry))
}

pub async fn list_moods(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<MoodRangeQuery>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let (start, end) = resolve_range(&query, Utc::now().date_naive());

    let entries = sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT * FROM moods
        WHERE user_id = $1 AND entry_date BETWEEN $2 AND $3
        ORDER BY entry_date ASC
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .bind(end)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(entries))
}

/// Missing bounds both collapse to a single day: the start defaults to
/// today, the end defaults to the start.
fn resolve_range(query: &MoodRangeQuery, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = query.start_date.unwrap_or(today);
    let end = query.end_date.unwrap_or(start);
    (start, end)
}
