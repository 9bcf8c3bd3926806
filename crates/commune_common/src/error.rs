// --- File: crates/commune_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Commune errors.
///
/// Each crate keeps its own error enum and implements
/// `From<SpecificError> for CommuneError` so the shell can use `?` across crates.
#[derive(Error, Debug)]
pub enum CommuneError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during authentication
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to rate limiting
    #[error("Rate limited: {0}")]
    RateLimitError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, CommuneError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, CommuneError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, CommuneError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| CommuneError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, CommuneError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| CommuneError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<reqwest::Error> for CommuneError {
    fn from(err: reqwest::Error) -> Self {
        CommuneError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for CommuneError {
    fn from(err: serde_json::Error) -> Self {
        CommuneError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for CommuneError {
    fn from(err: std::io::Error) -> Self {
        CommuneError::InternalError(err.to_string())
    }
}

impl From<config::ConfigError> for CommuneError {
    fn from(err: config::ConfigError) -> Self {
        CommuneError::ConfigError(err.to_string())
    }
}

// Utility functions for error handling
pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> CommuneError {
    CommuneError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
