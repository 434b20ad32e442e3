use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The closed set of mood labels. Stored as a Postgres enum with the same
/// spelling as the API values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "mood_label")]
pub enum MoodLabel {
    Happy,
    Sad,
    Neutral,
    Angry,
    Loved,
}

impl FromStr for MoodLabel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Happy" => Ok(Self::Happy),
            "Sad" => Ok(Self::Sad),
            "Neutral" => Ok(Self::Neutral),
            "Angry" => Ok(Self::Angry),
            "Loved" => Ok(Self::Loved),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub entry_date: NaiveDate,
    pub mood: MoodLabel,
    pub created_at: DateTime<Utc>,
}

/// Fields are optional so missing ones surface as a 400 with a readable
/// message instead of a body-rejection. Any client-supplied user id is
/// dropped on deserialization; ownership always comes from the token.
#[derive(Debug, Deserialize)]
pub struct CreateMoodRequest {
    pub mood: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct MoodRangeQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
}
