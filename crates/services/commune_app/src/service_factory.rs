// --- File: crates/services/commune_app/src/service_factory.rs ---
//! Builds the external collaborators selected by configuration.
//!
//! Each collaborator is created once and handed out as a shared trait
//! object, so the shell and its tests only ever see the traits.

use std::sync::Arc;

use commune_auth::{
    AuthError, LocalAuthProvider, SharedAuthProvider, SharedProfileService, SupabaseAuthProvider,
};
use commune_calendar::CalendarDate;
use commune_common::services::WorkoutSource;
use commune_common::CommuneError;
use commune_config::{AppConfig, AuthProviderKind, WorkoutSourceKind};
use commune_profile::ProfileClient;
use commune_workouts::{InMemoryWorkoutSource, RemoteWorkoutSource, WorkoutError};
use tracing::{info, warn};

pub type SharedWorkoutSource = Arc<dyn WorkoutSource<Error = WorkoutError>>;

pub struct CommuneServiceFactory {
    auth: SharedAuthProvider,
    profiles: Option<SharedProfileService>,
    workouts: SharedWorkoutSource,
}

impl CommuneServiceFactory {
    /// Creates every collaborator named in `config`. `today` anchors the
    /// demo workouts when the in-memory source is seeded.
    pub fn new(config: &AppConfig, today: CalendarDate) -> Result<Self, CommuneError> {
        Ok(Self {
            auth: Self::create_auth(config)?,
            profiles: Self::create_profiles(config)?,
            workouts: Self::create_workouts(config, today)?,
        })
    }

    /// A factory with explicitly supplied collaborators, for tests.
    pub fn with_services(
        auth: SharedAuthProvider,
        profiles: Option<SharedProfileService>,
        workouts: SharedWorkoutSource,
    ) -> Self {
        Self {
            auth,
            profiles,
            workouts,
        }
    }

    fn create_auth(config: &AppConfig) -> Result<SharedAuthProvider, AuthError> {
        match config.auth.provider {
            AuthProviderKind::Local => {
                info!("using local credential store for auth");
                Ok(Arc::new(LocalAuthProvider::new()))
            }
            AuthProviderKind::Supabase => {
                let provider = SupabaseAuthProvider::from_config(&config.auth, &config.api)?;
                info!("using hosted auth provider");
                Ok(Arc::new(provider))
            }
        }
    }

    fn create_profiles(config: &AppConfig) -> Result<Option<SharedProfileService>, CommuneError> {
        let client = ProfileClient::from_config(&config.api)?;
        if !client.is_configured() {
            warn!("API_BASE_URL is not set; profiles will not be loaded");
            return Ok(None);
        }
        Ok(Some(Arc::new(client)))
    }

    fn create_workouts(
        config: &AppConfig,
        today: CalendarDate,
    ) -> Result<SharedWorkoutSource, WorkoutError> {
        match config.workouts.source {
            WorkoutSourceKind::Memory if config.workouts.seed_demo => {
                info!("using in-memory workouts seeded around {}", today);
                Ok(Arc::new(InMemoryWorkoutSource::with_demo_seed(today)))
            }
            WorkoutSourceKind::Memory => {
                info!("using empty in-memory workouts");
                Ok(Arc::new(InMemoryWorkoutSource::new()))
            }
            WorkoutSourceKind::Remote => {
                let source = RemoteWorkoutSource::from_config(&config.api)?;
                info!("using remote workouts from {}", source.base_url());
                Ok(Arc::new(source))
            }
        }
    }

    pub fn auth(&self) -> SharedAuthProvider {
        self.auth.clone()
    }

    pub fn profiles(&self) -> Option<SharedProfileService> {
        self.profiles.clone()
    }

    pub fn workouts(&self) -> SharedWorkoutSource {
        self.workouts.clone()
    }
}
