use storage::{
    AthleteStore, WorkoutStore,
    dto::{
        common::ListParams,
        workout::{CreateWorkoutRequest, UpdateWorkoutRequest},
    },
    error::Result,
    models::Workout,
};

/// List workouts
pub async fn list_workouts<S>(store: &S, params: ListParams) -> Result<Vec<Workout>>
where
    S: WorkoutStore + ?Sized,
{
    store.list_workouts(params).await
}

/// Get workout by id
pub async fn get_workout<S>(store: &S, id: i32) -> Result<Workout>
where
    S: WorkoutStore + ?Sized,
{
    store.find_workout(id).await
}

/// Create a workout for an existing athlete
pub async fn create_workout<S>(store: &S, request: &CreateWorkoutRequest) -> Result<Workout>
where
    S: AthleteStore + WorkoutStore + ?Sized,
{
    let athlete = store.find_athlete(request.athlete_id).await?;

    let workout = store.insert_workout(request).await?;
    tracing::info!(
        workout_id = workout.id,
        athlete_id = athlete.id,
        "Workout created"
    );

    Ok(workout)
}

/// Apply a partial update to a workout
pub async fn update_workout<S>(
    store: &S,
    id: i32,
    request: &UpdateWorkoutRequest,
) -> Result<Workout>
where
    S: WorkoutStore + ?Sized,
{
    let existing = store.find_workout(id).await?;
    if request.is_empty() {
        return Ok(existing);
    }

    store.update_workout(&request.apply(existing)).await
}

/// Delete a workout
pub async fn delete_workout<S>(store: &S, id: i32) -> Result<()>
where
    S: WorkoutStore + ?Sized,
{
    store.delete_workout(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::{MemoryStore, StorageError, dto::athlete::CreateAthleteRequest};

    async fn store_with_athlete() -> (MemoryStore, i32) {
        let store = MemoryStore::new();
        let athlete = store
            .insert_athlete(&CreateAthleteRequest {
                name: "Ana".to_string(),
                cpf: "12345678901".to_string(),
                age: 30,
            })
            .await
            .unwrap();
        (store, athlete.id)
    }

    fn run(athlete_id: i32) -> CreateWorkoutRequest {
        CreateWorkoutRequest {
            athlete_id,
            name: "Run".to_string(),
            sport_modality: "Running".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_sets_id_and_timestamp() {
        let (store, athlete_id) = store_with_athlete().await;
        let before = chrono::Utc::now().naive_utc();

        let workout = create_workout(&store, &run(athlete_id)).await.unwrap();

        assert_eq!(workout.id, 1);
        assert_eq!(workout.athlete_id, athlete_id);
        assert!(workout.created_at >= before);
        assert_eq!(get_workout(&store, workout.id).await.unwrap(), workout);
    }

    #[tokio::test]
    async fn test_unknown_athlete_writes_nothing() {
        let (store, athlete_id) = store_with_athlete().await;

        let err = create_workout(&store, &run(athlete_id + 1)).await.unwrap_err();

        assert!(matches!(err, StorageError::NotFound("Athlete")));
        assert!(list_workouts(&store, ListParams::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let (store, athlete_id) = store_with_athlete().await;
        let workout = create_workout(&store, &run(athlete_id)).await.unwrap();

        let patch = UpdateWorkoutRequest {
            name: Some("Long run".to_string()),
            ..Default::default()
        };
        let updated = update_workout(&store, workout.id, &patch).await.unwrap();

        assert_eq!(updated.name, "Long run");
        assert_eq!(updated.sport_modality, "Running");
        assert_eq!(updated.created_at, workout.created_at);
    }

    #[tokio::test]
    async fn test_missing_workout_is_not_found() {
        let (store, _) = store_with_athlete().await;

        let patch = UpdateWorkoutRequest::default();
        assert!(matches!(
            update_workout(&store, 5, &patch).await.unwrap_err(),
            StorageError::NotFound("Workout")
        ));
        assert!(delete_workout(&store, 5).await.unwrap_err().is_not_found());
        assert!(get_workout(&store, 5).await.unwrap_err().is_not_found());
    }
}
