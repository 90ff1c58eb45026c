use async_trait::async_trait;
use sqlx::PgPool;

use crate::Database;
use crate::dto::{athlete::CreateAthleteRequest, common::ListParams};
use crate::error::{Result, StorageError};
use crate::models::Athlete;
use crate::repository::AthleteStore;

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List athletes ordered by id
    pub async fn list(&self, params: ListParams) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, name, cpf, age
            FROM athlete
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.sql_limit())
        .bind(params.sql_offset())
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, name, cpf, age
            FROM athlete
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("Athlete"))?;

        Ok(athlete)
    }

    pub async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, name, cpf, age
            FROM athlete
            WHERE cpf = $1
            "#,
        )
        .bind(cpf)
        .fetch_optional(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Create a new athlete
    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO athlete (name, cpf, age)
            VALUES ($1, $2, $3)
            RETURNING id, name, cpf, age
            "#,
        )
        .bind(&req.name)
        .bind(&req.cpf)
        .bind(req.age)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_unique_violation() {
                StorageError::ConstraintViolation(format!(
                    "An athlete with cpf {} already exists",
                    req.cpf
                ))
            } else {
                e
            }
        })?;

        Ok(athlete)
    }

    /// Update an existing athlete; the cpf is immutable
    pub async fn update(&self, athlete: &Athlete) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            UPDATE athlete
            SET name = $2,
                age = $3
            WHERE id = $1
            RETURNING id, name, cpf, age
            "#,
        )
        .bind(athlete.id)
        .bind(&athlete.name)
        .bind(athlete.age)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound("Athlete"))?;

        Ok(athlete)
    }

    /// Delete an athlete by ID
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM athlete WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(StorageError::from)
            .map_err(|e| {
                if e.is_foreign_key_violation() {
                    StorageError::ConstraintViolation(format!(
                        "Athlete {} still has workouts",
                        id
                    ))
                } else {
                    e
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound("Athlete"));
        }

        Ok(())
    }
}

#[async_trait]
impl AthleteStore for Database {
    async fn list_athletes(&self, params: ListParams) -> Result<Vec<Athlete>> {
        AthleteRepository::new(self.pool()).list(params).await
    }

    async fn find_athlete(&self, id: i32) -> Result<Athlete> {
        AthleteRepository::new(self.pool()).find_by_id(id).await
    }

    async fn find_athlete_by_cpf(&self, cpf: &str) -> Result<Option<Athlete>> {
        AthleteRepository::new(self.pool()).find_by_cpf(cpf).await
    }

    async fn insert_athlete(&self, request: &CreateAthleteRequest) -> Result<Athlete> {
        AthleteRepository::new(self.pool()).create(request).await
    }

    async fn update_athlete(&self, athlete: &Athlete) -> Result<Athlete> {
        AthleteRepository::new(self.pool()).update(athlete).await
    }

    async fn delete_athlete(&self, id: i32) -> Result<()> {
        AthleteRepository::new(self.pool()).delete(id).await
    }
}
