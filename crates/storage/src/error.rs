use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Workout database query failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Workout schema migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The named entity does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A uniqueness or ownership rule between athletes and workouts was broken.
    #[error("Conflicting athlete/workout data: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}
