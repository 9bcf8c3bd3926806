// --- File: crates/commune_profile/src/client.rs ---
//! Client for the backend's `GET /me` endpoint.

use commune_common::http::{check_status, client::create_client, client::get_with_bearer, join_url};
use commune_common::models::UserProfile;
use commune_common::services::{BoxFuture, ProfileService};
use commune_config::ApiConfig;
use reqwest::Client;
use tracing::{debug, error};

use crate::error::ProfileError;

#[derive(Debug, Clone)]
pub struct ProfileClient {
    client: Client,
    /// `None` when the backend is not configured; every fetch then fails
    /// with `ProfileError::NotConfigured`.
    base_url: Option<String>,
}

impl ProfileClient {
    pub fn new(client: Client, base_url: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.filter(|url| !url.trim().is_empty()),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ProfileError> {
        let client = create_client(config.timeout_secs, true)?;
        Ok(Self::new(client, config.base_url.clone()))
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }
}

impl ProfileService for ProfileClient {
    type Error = ProfileError;

    fn fetch_profile(&self, access_token: &str) -> BoxFuture<'_, UserProfile, Self::Error> {
        let access_token = access_token.to_string();

        Box::pin(async move {
            let base_url = self.base_url.as_deref().ok_or(ProfileError::NotConfigured)?;
            let url = join_url(base_url, "me");
            debug!("fetching user profile from {}", url);

            let response = get_with_bearer(&self.client, &url, &access_token).await?;
            let response = check_status(response).await.map_err(|failure| {
                error!("profile fetch failed: {}", failure);
                ProfileError::Status(failure)
            })?;

            let body = response.text().await?;
            let profile: UserProfile = serde_json::from_str(&body)?;
            Ok(profile)
        })
    }
}
