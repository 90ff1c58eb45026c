use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Workout;

/// Workout as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutResponse {
    pub id: i32,
    pub athlete_id: i32,
    pub name: String,
    pub sport_modality: String,
    pub created_at: NaiveDateTime,
}

/// Request payload for creating a new workout
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutRequest {
    pub athlete_id: i32,

    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 50,
        message = "Sport modality must be between 1 and 50 characters"
    ))]
    pub sport_modality: String,
}

/// Request payload for a partial workout update
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateWorkoutRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: Option<String>,

    #[validate(length(
        min = 1,
        max = 50,
        message = "Sport modality must be between 1 and 50 characters"
    ))]
    pub sport_modality: Option<String>,
}

impl UpdateWorkoutRequest {
    /// Merges the supplied fields over `workout`. Owner and timestamp never change.
    pub fn apply(&self, workout: Workout) -> Workout {
        let Workout {
            id,
            athlete_id,
            name,
            sport_modality,
            created_at,
        } = workout;

        Workout {
            id,
            athlete_id,
            name: self.name.clone().unwrap_or(name),
            sport_modality: self.sport_modality.clone().unwrap_or(sport_modality),
            created_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.sport_modality.is_none()
    }
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id,
            athlete_id: workout.athlete_id,
            name: workout.name,
            sport_modality: workout.sport_modality,
            created_at: workout.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn morning_run() -> Workout {
        Workout {
            id: 7,
            athlete_id: 1,
            name: "Run".to_string(),
            sport_modality: "Running".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(6, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_create_request_bounds() {
        let ok = CreateWorkoutRequest {
            athlete_id: 1,
            name: "Run".to_string(),
            sport_modality: "Running".to_string(),
        };
        assert!(ok.validate().is_ok());

        let too_long = CreateWorkoutRequest {
            sport_modality: "r".repeat(51),
            ..ok.clone()
        };
        let errors = too_long.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("sport_modality"));

        let empty_name = CreateWorkoutRequest {
            name: String::new(),
            ..ok
        };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_apply_keeps_owner_and_timestamp() {
        let patch = UpdateWorkoutRequest {
            sport_modality: Some("Trail running".to_string()),
            ..Default::default()
        };
        let before = morning_run();
        let after = patch.apply(before.clone());

        assert_eq!(after.sport_modality, "Trail running");
        assert_eq!(after.name, before.name);
        assert_eq!(after.athlete_id, before.athlete_id);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let patch = UpdateWorkoutRequest::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply(morning_run()), morning_run());
    }

    #[test]
    fn test_created_at_serializes_as_iso_8601() {
        let json = serde_json::to_value(WorkoutResponse::from(morning_run())).unwrap();
        assert_eq!(json["created_at"], "2024-03-01T06:30:00");
    }
}
