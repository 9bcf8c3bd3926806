use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::Path;
use tracing::debug;

pub mod env_vars;
pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources, later ones winning: `config/default.*`, `config/{RUN_ENV}.*`,
/// then `COMMUNE__SECTION__KEY` environment variables. The config directory
/// can be moved with `COMMUNE_CONFIG_DIR`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("COMMUNE_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    load_config_from(Path::new(&config_dir), &run_env)
}

/// Loads configuration from an explicit directory and run environment.
pub fn load_config_from(config_dir: &Path, run_env: &str) -> Result<AppConfig, ConfigError> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);
    let prefix = env_vars::get_config_prefix();

    debug!(
        "loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix(&prefix).separator(env_vars::CONFIG_SEPARATOR));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    apply_env_overrides_from_marker(raw_config)
}

/// Applies environment overrides based on "secret_from_env" markers in serialized config
pub fn apply_env_overrides_from_marker(config: AppConfig) -> Result<AppConfig, ConfigError> {
    let mut json = serde_json::to_value(&config)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;
    env_vars::inject_env_vars(&mut json);
    serde_json::from_value(json)
        .map_err(|err| ConfigError::Message(format!("failed to rebuild config: {err}")))
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The path is taken from `DOTENV_OVERRIDE`, then from a first command line
/// argument starting with `.env`, and defaults to `.env`. Loading happens once
/// per process; a missing file is not an error. Returns the path used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
