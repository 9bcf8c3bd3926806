// --- File: crates/commune_profile/src/error.rs ---
use commune_common::{external_service_error, CommuneError, StatusFailure};
use thiserror::Error;

/// Profile fetch errors.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("API_BASE_URL is not configured")]
    NotConfigured,

    /// Non-2xx answer from `/me`, with the status code and body text
    #[error("Failed to fetch user profile: {0}")]
    Status(StatusFailure),

    #[error("Profile request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse user profile: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ProfileError {
    /// HTTP status of the failed fetch, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProfileError::Status(failure) => Some(failure.status),
            _ => None,
        }
    }
}

impl From<ProfileError> for CommuneError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NotConfigured => {
                CommuneError::ConfigError("API_BASE_URL is not configured".to_string())
            }
            ProfileError::Status(failure) => match failure.status {
                401 | 403 => CommuneError::AuthError(format!("Profile fetch rejected: {}", failure)),
                _ => external_service_error("Profile API", failure),
            },
            ProfileError::Request(e) => {
                CommuneError::HttpError(format!("Profile request error: {}", e))
            }
            ProfileError::Parse(e) => {
                CommuneError::ParseError(format!("Profile response parse error: {}", e))
            }
        }
    }
}
