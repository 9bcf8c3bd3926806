//! Environment variable handling for the Commune client.
//!
//! Configuration keys map to `COMMUNE__SECTION__KEY`; values marked
//! `secret_from_env` in a config file are resolved from `SECTION_KEY`.

use std::env;

use serde_json::Value;
use tracing::warn;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "COMMUNE";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Marker value that asks for a secret to be read from the environment.
pub const SECRET_MARKER: &str = "secret_from_env";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// # Arguments
///
/// * `path` - The configuration path (e.g., "api.base_url")
///
/// # Returns
///
/// The environment variable name (e.g., "COMMUNE__API__BASE_URL")
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to an environment variable name
///
/// `auth.anon_key` becomes `AUTH_ANON_KEY`.
pub fn secret_path_to_env_var(path: &str) -> String {
    path.replace('.', SECRET_SEPARATOR).to_uppercase()
}

/// Get an environment variable for a configuration path
pub fn get_config_env_var(path: &str) -> Option<String> {
    env::var(config_path_to_env_var(path)).ok()
}

/// Get an environment variable for a secret path
pub fn get_secret_env_var(path: &str) -> Option<String> {
    env::var(secret_path_to_env_var(path)).ok()
}

/// Replace every `secret_from_env` string in `value` with its environment value.
///
/// Returns `true` if any value was replaced. Markers with no matching
/// variable are left untouched and logged.
pub fn inject_env_vars(value: &mut Value) -> bool {
    fn walk(path: Vec<String>, obj: &mut Value) -> bool {
        let mut replaced = false;

        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    let mut new_path = path.clone();
                    new_path.push(k.to_string());
                    replaced |= walk(new_path, v);
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let path_str = path.join(".");
                if let Some(env_val) = get_secret_env_var(&path_str) {
                    *s = env_val;
                    replaced = true;
                } else {
                    warn!(
                        "env var {} not found for {}",
                        secret_path_to_env_var(&path_str),
                        path_str
                    );
                }
            }
            _ => {}
        }

        replaced
    }

    walk(vec![], value)
}
