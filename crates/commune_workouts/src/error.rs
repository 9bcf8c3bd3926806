// --- File: crates/commune_workouts/src/error.rs ---
use commune_calendar::CalendarError;
use commune_common::{external_service_error, CommuneError, StatusFailure};
use thiserror::Error;

/// Workout lookup errors.
#[derive(Error, Debug)]
pub enum WorkoutError {
    /// The key passed to a lookup is not a valid `YYYY-MM-DD` date
    #[error("Invalid workout date: {0}")]
    InvalidDate(#[from] CalendarError),

    /// Remote workouts were requested without an API base URL
    #[error("API_BASE_URL is not configured")]
    NotConfigured,

    /// The request could not be sent or the response not read
    #[error("Workout request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The workout API answered with a non-2xx status other than 404
    #[error("Failed to fetch workout: {0}")]
    Status(StatusFailure),

    /// The response body was not a workout record
    #[error("Failed to parse workout response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The in-memory store lock was poisoned by a panicking writer
    #[error("Workout store is unavailable")]
    StorePoisoned,
}

impl From<WorkoutError> for CommuneError {
    fn from(err: WorkoutError) -> Self {
        match err {
            WorkoutError::InvalidDate(e) => e.into(),
            WorkoutError::NotConfigured => {
                CommuneError::ConfigError("API_BASE_URL is not configured".to_string())
            }
            WorkoutError::Request(e) => {
                CommuneError::HttpError(format!("Workout request error: {}", e))
            }
            WorkoutError::Status(failure) => external_service_error("Workout API", failure.to_string()),
            WorkoutError::Parse(e) => {
                CommuneError::ParseError(format!("Workout response parse error: {}", e))
            }
            WorkoutError::StorePoisoned => {
                CommuneError::InternalError("Workout store lock poisoned".to_string())
            }
        }
    }
}
