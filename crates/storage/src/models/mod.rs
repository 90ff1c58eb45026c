mod athlete;
mod workout;

pub use athlete::Athlete;
pub use workout::Workout;
