use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JournalEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub entry_date: NaiveDate,
    pub lesson: String,
    pub appreciation: String,
    pub gratitude: String,
    /// Free text here, unlike the closed mood-tracker labels.
    pub mood: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateJournalRequest {
    pub lesson: Option<String>,
    pub appreciation: Option<String>,
    pub gratitude: Option<String>,
    pub mood: Option<String>,
    pub date: Option<NaiveDate>,
}
