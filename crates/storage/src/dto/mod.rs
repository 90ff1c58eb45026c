pub mod athlete;
pub mod common;
pub mod workout;
