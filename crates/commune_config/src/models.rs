// --- File: crates/commune_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Backend API Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend serving `/me` and `/workouts/{date}`.
    /// Loaded via COMMUNE__API__BASE_URL when not set in a file.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

// --- Auth Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthProviderKind {
    /// Local credential store, no network.
    #[default]
    Local,
    /// Hosted GoTrue/Supabase auth endpoint.
    Supabase,
}

// Holds non-secret auth config. The anon key is usually "secret_from_env".
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub provider: AuthProviderKind,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub anon_key: Option<String>, // AUTH_ANON_KEY
}

// --- Workout Source Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutSourceKind {
    #[default]
    Memory,
    Remote,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct WorkoutsConfig {
    #[serde(default)]
    pub source: WorkoutSourceKind,
    /// Seed the in-memory source with sample workouts around today.
    #[serde(default)]
    pub seed_demo: bool,
}

// --- Calendar Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    /// Minimum horizontal travel before a drag is treated as a week swipe.
    #[serde(default = "default_intent_px")]
    pub intent_px: f64,
    /// Release displacement that commits a week change.
    #[serde(default = "default_distance_px")]
    pub distance_px: f64,
    /// Release velocity (px/ms) that commits a week change.
    #[serde(default = "default_velocity")]
    pub velocity: f64,
}

fn default_intent_px() -> f64 {
    10.0
}

fn default_distance_px() -> f64 {
    50.0
}

fn default_velocity() -> f64 {
    0.5
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            intent_px: default_intent_px(),
            distance_px: default_distance_px(),
            velocity: default_velocity(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CalendarConfig {
    /// IANA zone name. Falls back to the host's local time when absent.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    #[serde(default)]
    pub swipe: SwipeConfig,
}

fn default_cooldown_ms() -> u64 {
    300
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: None,
            cooldown_ms: default_cooldown_ms(),
            swipe: SwipeConfig::default(),
        }
    }
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// When set, logs are also written to a daily rolling file here.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: None,
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub workouts: WorkoutsConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
