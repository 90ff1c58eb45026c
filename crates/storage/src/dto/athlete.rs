use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::Athlete;

/// Number of digits in a CPF (Brazilian national identifier).
pub const CPF_LENGTH: usize = 11;

/// Athlete as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: i32,
    pub name: String,
    pub cpf: String,
    pub age: i32,
}

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_cpf"))]
    pub cpf: String,

    #[validate(range(min = 1, message = "Age must be greater than 0"))]
    pub age: i32,
}

/// Request payload for a partial athlete update. Absent fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: Option<String>,

    #[validate(range(min = 1, message = "Age must be greater than 0"))]
    pub age: Option<i32>,
}

impl UpdateAthleteRequest {
    /// Merges the supplied fields over `athlete`.
    pub fn apply(&self, athlete: Athlete) -> Athlete {
        let Athlete { id, name, cpf, age } = athlete;

        Athlete {
            id,
            name: self.name.clone().unwrap_or(name),
            cpf,
            age: self.age.unwrap_or(age),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}

pub fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if cpf.len() == CPF_LENGTH && cpf.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_cpf");
        error.message = Some(Cow::Borrowed("CPF must contain exactly 11 digits"));
        Err(error)
    }
}

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            id: athlete.id,
            name: athlete.name,
            cpf: athlete.cpf,
            age: athlete.age,
        }
    }
}
