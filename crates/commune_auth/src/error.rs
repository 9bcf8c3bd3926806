// --- File: crates/commune_auth/src/error.rs ---
use commune_common::CommuneError;
use thiserror::Error;

/// Auth errors.
///
/// Provider rejections keep the provider's own message; `classify` turns
/// that message into what the login or signup screen shows.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Form input failed client-side validation; the message is user-facing
    #[error("{0}")]
    Validation(String),

    /// The provider answered with an error status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The provider could not be reached
    #[error("Auth request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider's response did not have the expected shape
    #[error("Failed to parse auth response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required provider setting is missing
    #[error("Auth provider is not configured: {0}")]
    NotConfigured(String),

    /// The local credential store lock was poisoned
    #[error("Auth store is unavailable")]
    StorePoisoned,
}

impl AuthError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        AuthError::Rejected {
            status,
            message: message.into(),
        }
    }
}

impl From<AuthError> for CommuneError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(msg) => CommuneError::ValidationError(msg),
            AuthError::Rejected { status: 429, message } => CommuneError::RateLimitError(message),
            AuthError::Rejected { status, message } if status >= 500 => {
                commune_common::external_service_error("Auth provider", message)
            }
            AuthError::Rejected { message, .. } => CommuneError::AuthError(message),
            AuthError::Request(e) => CommuneError::HttpError(format!("Auth request error: {}", e)),
            AuthError::Parse(e) => {
                CommuneError::ParseError(format!("Auth response parse error: {}", e))
            }
            AuthError::NotConfigured(what) => {
                CommuneError::ConfigError(format!("Auth provider is not configured: {}", what))
            }
            AuthError::StorePoisoned => {
                CommuneError::InternalError("Auth store lock poisoned".to_string())
            }
        }
    }
}
