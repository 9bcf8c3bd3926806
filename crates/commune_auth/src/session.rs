// --- File: crates/commune_auth/src/session.rs ---
//! Session state shared by every screen.
//!
//! `SessionContext` is created once at start-up and passed to whoever needs
//! it. State changes are published on a `watch` channel; subscribers always
//! see the latest `AuthState`.

use std::sync::Arc;

use commune_common::models::{Session, UserProfile};
use commune_common::services::{AuthProvider, ProfileService};
use commune_profile::ProfileError;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::error::AuthError;
use crate::validation::{validate_login, validate_signup, SignupForm};

pub type SharedAuthProvider = Arc<dyn AuthProvider<Error = AuthError>>;
pub type SharedProfileService = Arc<dyn ProfileService<Error = ProfileError>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Start-up, before any stored session was checked.
    Loading,
    SignedOut,
    /// `profile` is `None` when the profile fetch failed or no backend is
    /// configured; the user stays signed in either way.
    SignedIn {
        session: Session,
        profile: Option<UserProfile>,
    },
}

/// The screen the shell should show for an `AuthState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Login,
    Home,
}

impl AuthState {
    pub fn screen(&self) -> Screen {
        match self {
            AuthState::Loading => Screen::Loading,
            AuthState::SignedOut => Screen::Login,
            AuthState::SignedIn { .. } => Screen::Home,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    SignedIn,
    /// The account exists but must be confirmed by email first.
    ConfirmationPending,
}

pub struct SessionContext {
    auth: SharedAuthProvider,
    profiles: Option<SharedProfileService>,
    state: watch::Sender<AuthState>,
}

impl SessionContext {
    pub fn new(auth: SharedAuthProvider, profiles: Option<SharedProfileService>) -> Self {
        let (state, _) = watch::channel(AuthState::Loading);
        Self {
            auth,
            profiles,
            state,
        }
    }

    /// Leaves `Loading`: signs in with a stored session if the provider has
    /// one, otherwise goes to `SignedOut`.
    pub async fn initialize(&self) -> AuthState {
        let restored = match self.auth.restore_session().await {
            Ok(session) => session,
            Err(err) => {
                warn!("could not restore session: {}", err);
                None
            }
        };

        match restored {
            Some(session) => {
                info!("restored session for {}", session.user.id);
                self.sign_in(session).await;
            }
            None => self.publish(AuthState::SignedOut),
        }
        self.snapshot()
    }

    /// Validates the form input and signs in.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let credentials = validate_login(email, password)?;
        let session = self.auth.login(credentials).await?;
        info!("user {} logged in", session.user.id);
        self.sign_in(session).await;
        Ok(())
    }

    pub async fn signup(&self, form: &SignupForm) -> Result<SignupOutcome, AuthError> {
        let request = validate_signup(form)?;
        match self.auth.signup(request).await? {
            Some(session) => {
                info!("user {} signed up", session.user.id);
                self.sign_in(session).await;
                Ok(SignupOutcome::SignedIn)
            }
            None => Ok(SignupOutcome::ConfirmationPending),
        }
    }

    /// Ends the current session. A provider failure leaves the user signed in.
    pub async fn logout(&self) -> Result<(), AuthError> {
        if let Some(session) = self.current_session() {
            self.auth.logout(&session).await.map_err(|err| {
                error!("logout failed: {}", err);
                err
            })?;
            info!("user {} logged out", session.user.id);
        }
        self.publish(AuthState::SignedOut);
        Ok(())
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    pub fn current_session(&self) -> Option<Session> {
        match &*self.state.borrow() {
            AuthState::SignedIn { session, .. } => Some(session.clone()),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<UserProfile> {
        match &*self.state.borrow() {
            AuthState::SignedIn { profile, .. } => profile.clone(),
            _ => None,
        }
    }

    pub fn active_screen(&self) -> Screen {
        self.state.borrow().screen()
    }

    /// Drops the context; subscribers see the channel close.
    pub fn shutdown(self) {
        info!("session context shut down");
    }

    async fn sign_in(&self, session: Session) {
        let profile = self.load_profile(&session).await;
        self.publish(AuthState::SignedIn { session, profile });
    }

    async fn load_profile(&self, session: &Session) -> Option<UserProfile> {
        let profiles = self.profiles.as_ref()?;
        match profiles.fetch_profile(&session.access_token).await {
            Ok(profile) => Some(profile),
            Err(err) => {
                error!("failed to load user profile: {}", err);
                None
            }
        }
    }

    fn publish(&self, next: AuthState) {
        self.state.send_replace(next);
    }
}
