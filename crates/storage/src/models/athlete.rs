use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub id: i32,
    pub name: String,
    pub cpf: String,
    pub age: i32,
}
