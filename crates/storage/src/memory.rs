//! In-memory store with the same constraints as the Postgres schema.
//!
//! Backs the handler and service test suites.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::dto::{athlete::CreateAthleteRequest, common::ListParams, workout::CreateWorkoutRequest};
use crate::error::{Result, StorageError};
use crate::models::{Athlete, Workout};
use crate::repository::{AthleteStore, WorkoutStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    athletes: BTreeMap<i32, Athlete>,
    workouts: BTreeMap<i32, Workout>,
    last_athlete_id: i32,
    last_workout_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl AthleteStore for MemoryStore {
    async fn list_athletes(&self, params: ListParams) -> Result<Vec<Athlete>> {
        Ok(params.apply(self.tables().athletes.values().cloned()))
    }

    async fn find_athlete(&self, id: i32) -> Result<Athlete> {
        self.tables()
            .athletes
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound("Athlete"))
    }

    async fn find_athlete_by_cpf(&self, cpf: &str) -> Result<Option<Athlete>> {
        Ok(self
            .tables()
            .athletes
            .values()
            .find(|athlete| athlete.cpf == cpf)
            .cloned())
    }

    async fn insert_athlete(&self, request: &CreateAthleteRequest) -> Result<Athlete> {
        let mut tables = self.tables();

        if tables.athletes.values().any(|a| a.cpf == request.cpf) {
            return Err(StorageError::ConstraintViolation(format!(
                "An athlete with cpf {} already exists",
                request.cpf
            )));
        }

        tables.last_athlete_id += 1;
        let athlete = Athlete {
            id: tables.last_athlete_id,
            name: request.name.clone(),
            cpf: request.cpf.clone(),
            age: request.age,
        };
        tables.athletes.insert(athlete.id, athlete.clone());

        Ok(athlete)
    }

    async fn update_athlete(&self, athlete: &Athlete) -> Result<Athlete> {
        let mut tables = self.tables();
        let stored = tables
            .athletes
            .get_mut(&athlete.id)
            .ok_or(StorageError::NotFound("Athlete"))?;

        stored.name = athlete.name.clone();
        stored.age = athlete.age;

        Ok(stored.clone())
    }

    async fn delete_athlete(&self, id: i32) -> Result<()> {
        let mut tables = self.tables();

        if !tables.athletes.contains_key(&id) {
            return Err(StorageError::NotFound("Athlete"));
        }
        if tables.workouts.values().any(|w| w.athlete_id == id) {
            return Err(StorageError::ConstraintViolation(format!(
                "Athlete {} still has workouts",
                id
            )));
        }

        tables.athletes.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl WorkoutStore for MemoryStore {
    async fn list_workouts(&self, params: ListParams) -> Result<Vec<Workout>> {
        Ok(params.apply(self.tables().workouts.values().cloned()))
    }

    async fn find_workout(&self, id: i32) -> Result<Workout> {
        self.tables()
            .workouts
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound("Workout"))
    }

    async fn count_workouts_for_athlete(&self, athlete_id: i32) -> Result<i64> {
        let count = self
            .tables()
            .workouts
            .values()
            .filter(|w| w.athlete_id == athlete_id)
            .count();

        Ok(count as i64)
    }

    async fn insert_workout(&self, request: &CreateWorkoutRequest) -> Result<Workout> {
        let mut tables = self.tables();

        if !tables.athletes.contains_key(&request.athlete_id) {
            return Err(StorageError::NotFound("Athlete"));
        }

        tables.last_workout_id += 1;
        let workout = Workout {
            id: tables.last_workout_id,
            athlete_id: request.athlete_id,
            name: request.name.clone(),
            sport_modality: request.sport_modality.clone(),
            created_at: Utc::now().naive_utc(),
        };
        tables.workouts.insert(workout.id, workout.clone());

        Ok(workout)
    }

    async fn update_workout(&self, workout: &Workout) -> Result<Workout> {
        let mut tables = self.tables();
        let stored = tables
            .workouts
            .get_mut(&workout.id)
            .ok_or(StorageError::NotFound("Workout"))?;

        stored.name = workout.name.clone();
        stored.sport_modality = workout.sport_modality.clone();

        Ok(stored.clone())
    }

    async fn delete_workout(&self, id: i32) -> Result<()> {
        self.tables()
            .workouts
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound("Workout"))
    }
}
