//! Store traits and their Postgres implementations.
//!
//! Handlers talk to `dyn Store`; [`crate::Database`] implements the traits with
//! one repository per table, [`crate::MemoryStore`] keeps everything in a map.

pub mod athlete;
pub mod workout;

use async_trait::async_trait;

use crate::dto::{athlete::CreateAthleteRequest, common::ListParams, workout::CreateWorkoutRequest};
use crate::error::Result;
use crate::models::{Athlete, Workout};

#[async_trait]
pub trait AthleteStore: Send + Sync {
    /// Athletes ordered by id.
    async fn list_athletes(&self, params: ListParams) -> Result<Vec<Athlete>>;

    /// Fails with `NotFound("Athlete")` when the id is unknown.
    async fn find_athlete(&self, id: i32) -> Result<Athlete>;

    async fn find_athlete_by_cpf(&self, cpf: &str) -> Result<Option<Athlete>>;

    /// Fails with `ConstraintViolation` when the cpf is already taken.
    async fn insert_athlete(&self, request: &CreateAthleteRequest) -> Result<Athlete>;

    /// Persists every mutable column of `athlete`.
    async fn update_athlete(&self, athlete: &Athlete) -> Result<Athlete>;

    /// Fails with `ConstraintViolation` while workouts still reference the athlete.
    async fn delete_athlete(&self, id: i32) -> Result<()>;
}

#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Workouts ordered by id.
    async fn list_workouts(&self, params: ListParams) -> Result<Vec<Workout>>;

    async fn find_workout(&self, id: i32) -> Result<Workout>;

    async fn count_workouts_for_athlete(&self, athlete_id: i32) -> Result<i64>;

    /// Assigns `id` and `created_at`. Fails with `NotFound("Athlete")` for an unknown owner.
    async fn insert_workout(&self, request: &CreateWorkoutRequest) -> Result<Workout>;

    async fn update_workout(&self, workout: &Workout) -> Result<Workout>;

    async fn delete_workout(&self, id: i32) -> Result<()>;
}

/// Everything the API needs from a backend.
pub trait Store: AthleteStore + WorkoutStore {}

impl<T> Store for T where T: AthleteStore + WorkoutStore {}
