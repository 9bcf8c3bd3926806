// --- File: crates/commune_workouts/src/remote.rs ---
//! Workouts served by the backend at `GET {base_url}/workouts/{YYYY-MM-DD}`.

use commune_calendar::CalendarDate;
use commune_common::http::{check_status, client::create_client, join_url};
use commune_common::models::WorkoutRecord;
use commune_common::services::{BoxFuture, WorkoutSource};
use commune_config::ApiConfig;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::WorkoutError;

#[derive(Debug, Clone)]
pub struct RemoteWorkoutSource {
    client: Client,
    base_url: String,
}

impl RemoteWorkoutSource {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Builds a source from the `[api]` section; fails when no base URL is set.
    pub fn from_config(config: &ApiConfig) -> Result<Self, WorkoutError> {
        let base_url = config
            .base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(WorkoutError::NotConfigured)?;
        let client = create_client(config.timeout_secs, true)?;
        Ok(Self::new(client, base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl WorkoutSource for RemoteWorkoutSource {
    type Error = WorkoutError;

    fn lookup(&self, date_key: &str) -> BoxFuture<'_, Option<WorkoutRecord>, Self::Error> {
        let parsed = CalendarDate::parse_iso(date_key);

        Box::pin(async move {
            let date = parsed?;
            let url = join_url(&self.base_url, &format!("workouts/{}", date.iso_key()));
            debug!("fetching workout from {}", url);

            let response = self.client.get(&url).send().await?;
            let response = match check_status(response).await {
                Ok(response) => response,
                Err(failure) if failure.is_not_found() => {
                    debug!("no workout scheduled for {}", date);
                    return Ok(None);
                }
                Err(failure) => {
                    warn!("workout API returned {} for {}", failure.status, date);
                    return Err(WorkoutError::Status(failure));
                }
            };

            let body = response.text().await?;
            let record: WorkoutRecord = serde_json::from_str(&body)?;
            Ok(Some(record))
        })
    }
}
