pub mod cli;
pub mod error;
pub mod packages;
pub mod report;
pub mod training;
pub mod types;
pub mod utils;

pub use error::WorkoutError;
pub use packages::{Package, read_package};
pub use training::Training;
pub use types::{Workout, WorkoutKind, WorkoutSummary};
