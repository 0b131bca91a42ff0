use std::path::PathBuf;

use crate::app_config::{
    AppConfig, Environment, PreferenceKeys, DEFAULT_FAVORITES_KEY, DEFAULT_FEATURE_FLAGS_KEY,
    DEFAULT_LAST_SELECTED_KEY,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(raw)
    };

    let env = parse_environment(&or_default("OKAERI_ENV", "development"))?;
    let log_level = or_default("OKAERI_LOG_LEVEL", "warn");
    let state_path = PathBuf::from(non_empty("OKAERI_STATE_PATH", "./okaeri-state.json")?);
    let categories_path = lookup("OKAERI_CATEGORIES_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let keys = PreferenceKeys {
        favorites: non_empty("OKAERI_FAVORITES_KEY", DEFAULT_FAVORITES_KEY)?,
        last_selected: non_empty("OKAERI_LAST_SELECTED_KEY", DEFAULT_LAST_SELECTED_KEY)?,
        feature_flags: non_empty("OKAERI_FEATURE_FLAGS_KEY", DEFAULT_FEATURE_FLAGS_KEY)?,
    };

    if keys.favorites == keys.last_selected
        || keys.favorites == keys.feature_flags
        || keys.last_selected == keys.feature_flags
    {
        return Err(ConfigError::Validation(
            "preference storage keys must be distinct".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        log_level,
        state_path,
        categories_path,
        keys,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "OKAERI_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
