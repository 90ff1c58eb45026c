//! Persistence layer for the Workout API.
//!
//! Holds the athlete/workout data model, the request and response DTOs with
//! their validation rules, the embedded schema migrations, and two store
//! implementations behind the [`AthleteStore`] / [`WorkoutStore`] traits:
//! [`Database`] (Postgres through sqlx) and [`MemoryStore`].

pub mod dto;
pub mod error;
pub mod memory;
pub mod migrations;
pub mod models;
pub mod repository;

use sqlx::{PgPool, postgres::PgPoolOptions};

pub use error::{Result, StorageError};
pub use memory::MemoryStore;
pub use repository::{AthleteStore, Store, WorkoutStore};

/// Default size of the Postgres connection pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Postgres-backed store. Cloning is cheap, the pool is shared.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Applies every embedded migration that has not run yet.
    pub async fn run_migrations(&self) -> Result<()> {
        migrations::run(&self.pool).await
    }
}
