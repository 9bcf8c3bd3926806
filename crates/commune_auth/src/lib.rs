// --- File: crates/commune_auth/src/lib.rs ---
// Declare modules within this crate
pub mod classify;
pub mod error;
pub mod local;
pub mod session;
pub mod supabase;
pub mod validation;
#[cfg(test)]
mod validation_test;

pub use classify::{
    classify_login_error, classify_login_message, classify_signup_message, login_error_message,
    signup_error_message, LoginFailure, SignupFailure,
};
pub use error::AuthError;
pub use local::LocalAuthProvider;
pub use session::{
    AuthState, Screen, SessionContext, SharedAuthProvider, SharedProfileService, SignupOutcome,
};
pub use supabase::SupabaseAuthProvider;
pub use validation::{is_valid_email, validate_login, validate_signup, SignupForm};
