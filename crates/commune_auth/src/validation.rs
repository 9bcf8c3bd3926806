// --- File: crates/commune_auth/src/validation.rs ---
//! Login and signup form checks, run before anything reaches a provider.

use commune_common::models::{Credentials, SignupRequest};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::AuthError;

pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks the login form. The email is trimmed, the password is passed on
/// as typed.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, AuthError> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(invalid("Please enter both email and password"));
    }
    if !is_valid_email(email) {
        return Err(invalid("Please enter a valid email address"));
    }
    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Raw signup form input.
#[derive(Clone, Default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Checks the signup form in screen order and reports the first problem.
pub fn validate_signup(form: &SignupForm) -> Result<SignupRequest, AuthError> {
    let full_name = form.full_name.trim();
    let email = form.email.trim();

    if full_name.is_empty() {
        return Err(invalid("Please enter your full name"));
    }
    if email.is_empty() {
        return Err(invalid("Please enter your email"));
    }
    if !is_valid_email(email) {
        return Err(invalid("Please enter a valid email address"));
    }
    if form.password.trim().is_empty() {
        return Err(invalid("Please enter a password"));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(invalid("Password must be at least 6 characters long"));
    }
    if form.password != form.confirm_password {
        return Err(invalid("Passwords do not match"));
    }

    Ok(SignupRequest {
        full_name: full_name.to_string(),
        email: email.to_string(),
        password: form.password.clone(),
    })
}

fn invalid(message: &str) -> AuthError {
    AuthError::Validation(message.to_string())
}
