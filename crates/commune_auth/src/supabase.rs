// --- File: crates/commune_auth/src/supabase.rs ---
//! Auth provider for a hosted GoTrue (Supabase) endpoint.
//!
//! Every request carries the project's anon key in an `apikey` header.
//! Sessions are kept in memory for `restore_session` until they expire.

use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};
use commune_common::http::{check_status, client::create_client, join_url, StatusFailure};
use commune_common::models::{AuthUser, Credentials, Session, SignupRequest};
use commune_common::services::{AuthProvider, BoxFuture};
use commune_config::{ApiConfig, AuthConfig};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::error::AuthError;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: Option<i64>,
    expires_at: Option<i64>,
    user: UserResponse,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    email: Option<String>,
}

/// GoTrue reports errors under different keys depending on the endpoint.
#[derive(Debug, Default, Deserialize)]
struct ErrorResponse {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl TokenResponse {
    fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
            .or_else(|| self.expires_in.map(|secs| now + Duration::seconds(secs)));
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: AuthUser {
                id: self.user.id,
                email: self.user.email,
            },
        }
    }
}

/// Pulls the human-readable message out of an error body, falling back to
/// the raw text.
fn rejection(failure: StatusFailure) -> AuthError {
    let parsed: ErrorResponse = serde_json::from_str(&failure.body).unwrap_or_default();
    let message = parsed
        .error_description
        .or(parsed.msg)
        .or(parsed.message)
        .or(parsed.error)
        .unwrap_or(failure.body);
    AuthError::rejected(failure.status, message)
}

#[derive(Debug)]
pub struct SupabaseAuthProvider {
    client: Client,
    url: String,
    anon_key: String,
    stored_session: Mutex<Option<Session>>,
}

impl SupabaseAuthProvider {
    pub fn new(client: Client, url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            anon_key: anon_key.into(),
            stored_session: Mutex::new(None),
        }
    }

    pub fn from_config(auth: &AuthConfig, api: &ApiConfig) -> Result<Self, AuthError> {
        let url = non_empty(auth.url.as_deref())
            .ok_or_else(|| AuthError::NotConfigured("auth.url".to_string()))?;
        let anon_key = non_empty(auth.anon_key.as_deref())
            .ok_or_else(|| AuthError::NotConfigured("auth.anon_key".to_string()))?;
        let client = create_client(api.timeout_secs, true)?;
        Ok(Self::new(client, url, anon_key))
    }

    async fn post_json(
        &self,
        path: &str,
        body: serde_json::Value,
        bearer: Option<&str>,
    ) -> Result<Response, AuthError> {
        let url = join_url(&self.url, path);
        debug!("auth request to {}", url);

        let mut request = self.client.post(&url).header("apikey", &self.anon_key).json(&body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        check_status(response).await.map_err(|failure| {
            warn!("auth provider returned {} for {}", failure.status, path);
            rejection(failure)
        })
    }

    fn remember(&self, session: Option<Session>) -> Result<(), AuthError> {
        *self.stored_session.lock().map_err(|_| AuthError::StorePoisoned)? = session;
        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl AuthProvider for SupabaseAuthProvider {
    type Error = AuthError;

    fn login(&self, credentials: Credentials) -> BoxFuture<'_, Session, Self::Error> {
        Box::pin(async move {
            let body = json!({ "email": credentials.email, "password": credentials.password });
            let response = self
                .post_json("auth/v1/token?grant_type=password", body, None)
                .await?;
            let token: TokenResponse = serde_json::from_str(&response.text().await?)?;
            let session = token.into_session(Utc::now());

            info!("signed in as {}", session.user.id);
            self.remember(Some(session.clone()))?;
            Ok(session)
        })
    }

    fn signup(&self, request: SignupRequest) -> BoxFuture<'_, Option<Session>, Self::Error> {
        Box::pin(async move {
            let body = json!({
                "email": request.email,
                "password": request.password,
                "data": { "full_name": request.full_name },
            });
            let response = self.post_json("auth/v1/signup", body, None).await?;
            let value: serde_json::Value = serde_json::from_str(&response.text().await?)?;

            // Without an access token the account waits for email confirmation
            if value.get("access_token").is_none() {
                info!("signup for {} awaits email confirmation", request.email);
                return Ok(None);
            }
            let token: TokenResponse = serde_json::from_value(value)?;
            let session = token.into_session(Utc::now());
            self.remember(Some(session.clone()))?;
            Ok(Some(session))
        })
    }

    fn logout(&self, session: &Session) -> BoxFuture<'_, (), Self::Error> {
        let access_token = session.access_token.clone();

        Box::pin(async move {
            self.post_json("auth/v1/logout", json!({}), Some(&access_token))
                .await?;
            self.remember(None)?;
            info!("signed out");
            Ok(())
        })
    }

    fn restore_session(&self) -> BoxFuture<'_, Option<Session>, Self::Error> {
        Box::pin(async move {
            let mut stored = self.stored_session.lock().map_err(|_| AuthError::StorePoisoned)?;
            let expired = stored
                .as_ref()
                .and_then(|s| s.expires_at)
                .is_some_and(|at| at <= Utc::now());
            if expired {
                debug!("stored session expired");
                *stored = None;
            }
            Ok(stored.clone())
        })
    }
}
