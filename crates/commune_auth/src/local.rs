// --- File: crates/commune_auth/src/local.rs ---
//! Auth provider backed by an in-process credential store.
//!
//! Nothing leaves the process. Messages mirror the hosted provider's so the
//! same classifiers apply.

use std::collections::HashMap;
use std::sync::Mutex;

use commune_common::models::{AuthUser, Credentials, Session, SignupRequest};
use commune_common::services::{AuthProvider, BoxFuture};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::AuthError;

#[derive(Debug, Clone)]
struct LocalAccount {
    id: String,
    email: String,
    password: String,
}

#[derive(Debug, Default)]
pub struct LocalAuthProvider {
    /// Keyed by lower-cased email.
    accounts: Mutex<HashMap<String, LocalAccount>>,
    /// Stands in for persisted storage between app starts.
    stored_session: Mutex<Option<Session>>,
}

impl LocalAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account up front, e.g. a demo login.
    pub fn with_account(self, email: &str, password: &str) -> Self {
        if let Ok(mut accounts) = self.accounts.lock() {
            accounts.insert(email.to_lowercase(), new_account(email, password));
        }
        self
    }

    fn issue_session(&self, account: &LocalAccount) -> Result<Session, AuthError> {
        let session = Session {
            access_token: Uuid::new_v4().to_string(),
            refresh_token: None,
            expires_at: None,
            user: AuthUser {
                id: account.id.clone(),
                email: Some(account.email.clone()),
            },
        };
        *self.stored_session.lock().map_err(|_| AuthError::StorePoisoned)? = Some(session.clone());
        Ok(session)
    }
}

fn new_account(email: &str, password: &str) -> LocalAccount {
    LocalAccount {
        id: Uuid::new_v4().to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

impl AuthProvider for LocalAuthProvider {
    type Error = AuthError;

    fn login(&self, credentials: Credentials) -> BoxFuture<'_, Session, Self::Error> {
        Box::pin(async move {
            let account = {
                let accounts = self.accounts.lock().map_err(|_| AuthError::StorePoisoned)?;
                accounts
                    .get(&credentials.email.to_lowercase())
                    .filter(|account| account.password == credentials.password)
                    .cloned()
            };
            let account = account.ok_or_else(|| AuthError::rejected(400, "Invalid login credentials"))?;

            info!("local login for {}", account.email);
            self.issue_session(&account)
        })
    }

    fn signup(&self, request: SignupRequest) -> BoxFuture<'_, Option<Session>, Self::Error> {
        Box::pin(async move {
            let account = {
                let mut accounts = self.accounts.lock().map_err(|_| AuthError::StorePoisoned)?;
                let key = request.email.to_lowercase();
                if accounts.contains_key(&key) {
                    return Err(AuthError::rejected(422, "User already registered"));
                }
                let account = new_account(&request.email, &request.password);
                accounts.insert(key, account.clone());
                account
            };

            debug!("local account created for {} ({})", account.email, request.full_name);
            self.issue_session(&account).map(Some)
        })
    }

    fn logout(&self, session: &Session) -> BoxFuture<'_, (), Self::Error> {
        let user_id = session.user.id.clone();

        Box::pin(async move {
            let mut stored = self.stored_session.lock().map_err(|_| AuthError::StorePoisoned)?;
            if stored.as_ref().is_some_and(|s| s.user.id == user_id) {
                *stored = None;
            }
            Ok(())
        })
    }

    fn restore_session(&self) -> BoxFuture<'_, Option<Session>, Self::Error> {
        Box::pin(async move {
            let stored = self.stored_session.lock().map_err(|_| AuthError::StorePoisoned)?;
            Ok(stored.clone())
        })
    }
}
