// --- File: crates/commune_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! The workout source, the profile endpoint and the auth provider are
//! consumed through these traits so the calendar and session logic can be
//! driven by in-memory doubles in tests.

use std::future::Future;
use std::pin::Pin;

use crate::models::{Credentials, Session, SignupRequest, UserProfile, WorkoutRecord};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Looks up the workout scheduled for a day.
pub trait WorkoutSource: Send + Sync {
    /// Error type returned by lookups.
    type Error: std::error::Error + Send + Sync + 'static;

    /// `date_key` is an ISO `YYYY-MM-DD` date. `Ok(None)` means nothing is
    /// scheduled, which is not an error.
    fn lookup(&self, date_key: &str) -> BoxFuture<'_, Option<WorkoutRecord>, Self::Error>;
}

/// Fetches the profile of the user owning an access token.
pub trait ProfileService: Send + Sync {
    /// Error type returned by profile fetches.
    type Error: std::error::Error + Send + Sync + 'static;

    fn fetch_profile(&self, access_token: &str) -> BoxFuture<'_, UserProfile, Self::Error>;
}

/// Email/password authentication backend.
pub trait AuthProvider: Send + Sync {
    /// Error type returned by auth operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Exchange credentials for a session.
    fn login(&self, credentials: Credentials) -> BoxFuture<'_, Session, Self::Error>;

    /// Create an account. `Ok(None)` means the account exists but the
    /// provider requires email confirmation before a session is issued.
    fn signup(&self, request: SignupRequest) -> BoxFuture<'_, Option<Session>, Self::Error>;

    /// End a session.
    fn logout(&self, session: &Session) -> BoxFuture<'_, (), Self::Error>;

    /// Return a previously persisted session, if any.
    fn restore_session(&self) -> BoxFuture<'_, Option<Session>, Self::Error>;
}
