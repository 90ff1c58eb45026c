use async_trait::async_trait;
use sqlx::PgPool;

use crate::Database;
use crate::dto::{common::ListParams, workout::CreateWorkoutRequest};
use crate::error::{Result, StorageError};
use crate::models::Workout;
use crate::repository::WorkoutStore;

pub struct WorkoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List workouts ordered by id
    pub async fn list(&self, params: ListParams) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, athlete_id, name, sport_modality, created_at
            FROM workout
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.sql_limit())
        .bind(params.sql_offset())
        .fetch_all(self.pool)
        .await?;

        Ok(workouts)
    }

    /// Find workout by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, athlete_id, name, sport_modality, created_at
            FROM workout
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("Workout"))?;

        Ok(workout)
    }

    pub async fn count_for_athlete(&self, athlete_id: i32) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::bigint FROM workout WHERE athlete_id = $1",
        )
        .bind(athlete_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// Create a new workout; `created_at` comes from the column default
    pub async fn create(&self, req: &CreateWorkoutRequest) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            INSERT INTO workout (athlete_id, name, sport_modality)
            VALUES ($1, $2, $3)
            RETURNING id, athlete_id, name, sport_modality, created_at
            "#,
        )
        .bind(req.athlete_id)
        .bind(&req.name)
        .bind(&req.sport_modality)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_foreign_key_violation() {
                StorageError::NotFound("Athlete")
            } else {
                e
            }
        })?;

        Ok(workout)
    }

    /// Update name and modality of an existing workout
    pub async fn update(&self, workout: &Workout) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            UPDATE workout
            SET name = $2,
                sport_modality = $3
            WHERE id = $1
            RETURNING id, athlete_id, name, sport_modality, created_at
            "#,
        )
        .bind(workout.id)
        .bind(&workout.name)
        .bind(&workout.sport_modality)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("Workout"))?;

        Ok(workout)
    }

    /// Delete a workout by ID
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM workout WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Workout"));
        }

        Ok(())
    }
}

#[async_trait]
impl WorkoutStore for Database {
    async fn list_workouts(&self, params: ListParams) -> Result<Vec<Workout>> {
        WorkoutRepository::new(self.pool()).list(params).await
    }

    async fn find_workout(&self, id: i32) -> Result<Workout> {
        WorkoutRepository::new(self.pool()).find_by_id(id).await
    }

    async fn count_workouts_for_athlete(&self, athlete_id: i32) -> Result<i64> {
        WorkoutRepository::new(self.pool())
            .count_for_athlete(athlete_id)
            .await
    }

    async fn insert_workout(&self, request: &CreateWorkoutRequest) -> Result<Workout> {
        WorkoutRepository::new(self.pool()).create(request).await
    }

    async fn update_workout(&self, workout: &Workout) -> Result<Workout> {
        WorkoutRepository::new(self.pool()).update(workout).await
    }

    async fn delete_workout(&self, id: i32) -> Result<()> {
        WorkoutRepository::new(self.pool()).delete(id).await
    }
}
