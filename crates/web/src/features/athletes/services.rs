use storage::{
    AthleteStore, WorkoutStore,
    dto::{
        athlete::{CreateAthleteRequest, UpdateAthleteRequest},
        common::ListParams,
    },
    error::{Result, StorageError},
    models::Athlete,
};

/// List athletes
pub async fn list_athletes<S>(store: &S, params: ListParams) -> Result<Vec<Athlete>>
where
    S: AthleteStore + ?Sized,
{
    store.list_athletes(params).await
}

/// Get athlete by id
pub async fn get_athlete<S>(store: &S, id: i32) -> Result<Athlete>
where
    S: AthleteStore + ?Sized,
{
    store.find_athlete(id).await
}

/// Create a new athlete, rejecting a cpf that is already registered
pub async fn create_athlete<S>(store: &S, request: &CreateAthleteRequest) -> Result<Athlete>
where
    S: AthleteStore + ?Sized,
{
    if store.find_athlete_by_cpf(&request.cpf).await?.is_some() {
        return Err(StorageError::ConstraintViolation(format!(
            "An athlete with cpf {} already exists",
            request.cpf
        )));
    }

    let athlete = store.insert_athlete(request).await?;
    tracing::info!(athlete_id = athlete.id, "Athlete created");

    Ok(athlete)
}

/// Apply a partial update to an athlete
pub async fn update_athlete<S>(
    store: &S,
    id: i32,
    request: &UpdateAthleteRequest,
) -> Result<Athlete>
where
    S: AthleteStore + ?Sized,
{
    let existing = store.find_athlete(id).await?;
    if request.is_empty() {
        return Ok(existing);
    }

    store.update_athlete(&request.apply(existing)).await
}

/// Delete an athlete that no longer owns any workout
pub async fn delete_athlete<S>(store: &S, id: i32) -> Result<()>
where
    S: AthleteStore + WorkoutStore + ?Sized,
{
    let athlete = store.find_athlete(id).await?;

    let workouts = store.count_workouts_for_athlete(athlete.id).await?;
    if workouts > 0 {
        return Err(StorageError::ConstraintViolation(format!(
            "Athlete {} still has {} workout(s)",
            athlete.id, workouts
        )));
    }

    store.delete_athlete(athlete.id).await?;
    tracing::info!(athlete_id = athlete.id, "Athlete deleted");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::{MemoryStore, dto::workout::CreateWorkoutRequest};

    fn ana() -> CreateAthleteRequest {
        CreateAthleteRequest {
            name: "Ana".to_string(),
            cpf: "12345678901".to_string(),
            age: 30,
        }
    }

    #[tokio::test]
    async fn test_create_echoes_fields_with_fresh_id() {
        let store = MemoryStore::new();

        let athlete = create_athlete(&store, &ana()).await.unwrap();

        assert_eq!(athlete.id, 1);
        assert_eq!(athlete.name, "Ana");
        assert_eq!(athlete.cpf, "12345678901");
        assert_eq!(athlete.age, 30);
    }

    #[tokio::test]
    async fn test_duplicate_cpf_conflicts_without_writing() {
        let store = MemoryStore::new();
        create_athlete(&store, &ana()).await.unwrap();

        let other = CreateAthleteRequest {
            name: "Bia".to_string(),
            ..ana()
        };
        let err = create_athlete(&store, &other).await.unwrap_err();

        assert!(matches!(err, StorageError::ConstraintViolation(_)));
        let athletes = list_athletes(&store, ListParams::default()).await.unwrap();
        assert_eq!(athletes.len(), 1);
        assert_eq!(athletes[0].name, "Ana");
    }

    #[tokio::test]
    async fn test_update_only_age() {
        let store = MemoryStore::new();
        let athlete = create_athlete(&store, &ana()).await.unwrap();

        let patch = UpdateAthleteRequest {
            age: Some(31),
            ..Default::default()
        };
        let updated = update_athlete(&store, athlete.id, &patch).await.unwrap();

        assert_eq!(updated.age, 31);
        assert_eq!(updated.name, "Ana");
        assert_eq!(updated.cpf, "12345678901");
        assert_eq!(get_athlete(&store, athlete.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_athlete() {
        let store = MemoryStore::new();

        let err = update_athlete(&store, 99, &UpdateAthleteRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::NotFound("Athlete")));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = MemoryStore::new();
        let athlete = create_athlete(&store, &ana()).await.unwrap();

        delete_athlete(&store, athlete.id).await.unwrap();

        assert!(get_athlete(&store, athlete.id).await.unwrap_err().is_not_found());
        assert!(delete_athlete(&store, athlete.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_is_blocked_by_workouts() {
        let store = MemoryStore::new();
        let athlete = create_athlete(&store, &ana()).await.unwrap();
        store
            .insert_workout(&CreateWorkoutRequest {
                athlete_id: athlete.id,
                name: "Run".to_string(),
                sport_modality: "Running".to_string(),
            })
            .await
            .unwrap();

        let err = delete_athlete(&store, athlete.id).await.unwrap_err();

        assert!(matches!(err, StorageError::ConstraintViolation(_)));
        assert!(get_athlete(&store, athlete.id).await.is_ok());
        assert_eq!(store.count_workouts_for_athlete(athlete.id).await.unwrap(), 1);
    }
}
