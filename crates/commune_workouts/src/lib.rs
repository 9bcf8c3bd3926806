// --- File: crates/commune_workouts/src/lib.rs ---
// Declare modules within this crate
pub mod demo;
pub mod error;
pub mod memory;
pub mod remote;
pub mod view;

pub use error::WorkoutError;
pub use memory::InMemoryWorkoutSource;
pub use remote::RemoteWorkoutSource;
pub use view::{load_workout_view, WorkoutView, EMPTY_HINT, EMPTY_TITLE, UNAVAILABLE_TITLE};
