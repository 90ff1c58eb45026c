use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Workout {
    pub id: i32,
    pub athlete_id: i32,
    pub name: String,
    pub sport_modality: String,
    /// Assigned by the store at creation, in UTC.
    pub created_at: NaiveDateTime,
}
