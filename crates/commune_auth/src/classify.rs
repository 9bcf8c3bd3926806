// --- File: crates/commune_auth/src/classify.rs ---
//! Maps provider failures to the messages shown on the login and signup
//! screens. The two screens classify differently and are kept apart.

use crate::error::AuthError;

pub const LOGIN_FALLBACK: &str = "Login failed. Please try again.";
pub const SIGNUP_FALLBACK: &str = "Cannot signup right now. Please contact admin or try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFailure {
    InvalidCredentials,
    EmailNotConfirmed,
    /// Any other non-empty message, shown as is.
    Other(String),
    Unknown,
}

impl LoginFailure {
    pub fn user_message(&self) -> String {
        match self {
            LoginFailure::InvalidCredentials => "Invalid email or password".to_string(),
            LoginFailure::EmailNotConfirmed => {
                "Please verify your email before logging in".to_string()
            }
            LoginFailure::Other(message) => message.clone(),
            LoginFailure::Unknown => LOGIN_FALLBACK.to_string(),
        }
    }
}

/// Case-sensitive substring match on the provider message.
pub fn classify_login_message(message: &str) -> LoginFailure {
    if message.contains("Invalid login credentials") {
        LoginFailure::InvalidCredentials
    } else if message.contains("Email not confirmed") {
        LoginFailure::EmailNotConfirmed
    } else if message.trim().is_empty() {
        LoginFailure::Unknown
    } else {
        LoginFailure::Other(message.to_string())
    }
}

pub fn classify_login_error(err: &AuthError) -> LoginFailure {
    classify_login_message(&err.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupFailure {
    ServerError,
    AlreadyRegistered,
    RateLimited,
    WeakPassword,
    ConfirmationPending,
    InvalidEmail,
    Unknown,
}

impl SignupFailure {
    pub fn user_message(&self) -> &'static str {
        match self {
            SignupFailure::ServerError | SignupFailure::Unknown => SIGNUP_FALLBACK,
            SignupFailure::AlreadyRegistered => {
                "An account with this email already exists. Please sign in instead."
            }
            SignupFailure::RateLimited => {
                "Too many signup attempts. Please try again in a few minutes."
            }
            SignupFailure::WeakPassword => {
                "Password does not meet requirements. Please use a stronger password."
            }
            SignupFailure::ConfirmationPending => {
                "Please check your email to confirm your account before signing in."
            }
            SignupFailure::InvalidEmail => "Please enter a valid email address",
        }
    }
}

/// Case-insensitive substring match, first category wins.
///
/// Confirmation and rate-limit messages are tested before the broad
/// "email"/"invalid" catch-all, otherwise they would never match.
pub fn classify_signup_message(message: &str) -> SignupFailure {
    let message = message.to_lowercase();
    let has = |needles: &[&str]| needles.iter().any(|needle| message.contains(needle));

    if has(&[
        "database",
        "db error",
        "internal server error",
        "500",
        "network",
        "connection",
    ]) {
        SignupFailure::ServerError
    } else if has(&["user already registered", "already registered", "email already"]) {
        SignupFailure::AlreadyRegistered
    } else if has(&["rate limit", "too many requests"]) {
        SignupFailure::RateLimited
    } else if has(&["password"]) {
        SignupFailure::WeakPassword
    } else if has(&["check your email", "email confirmation"]) {
        SignupFailure::ConfirmationPending
    } else if has(&["email", "invalid"]) {
        SignupFailure::InvalidEmail
    } else {
        SignupFailure::Unknown
    }
}

/// Validation errors already carry their screen message and are not
/// reclassified; everything else goes through `classify_signup_message`.
pub fn signup_error_message(err: &AuthError) -> String {
    match err {
        AuthError::Validation(message) => message.clone(),
        AuthError::Request(_) => SignupFailure::ServerError.user_message().to_string(),
        other => classify_signup_message(&other.to_string())
            .user_message()
            .to_string(),
    }
}

/// Same as `signup_error_message`, for the login screen.
pub fn login_error_message(err: &AuthError) -> String {
    match err {
        AuthError::Validation(message) => message.clone(),
        other => classify_login_error(other).user_message(),
    }
}
