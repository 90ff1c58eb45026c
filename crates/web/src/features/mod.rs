pub mod athletes;
pub mod health;
pub mod workouts;
