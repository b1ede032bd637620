use crate::app_config::{AppConfig, Environment};
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
/// Decoupled from the real environment so tests can drive it from a
/// `HashMap` without `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // Blank values count as unset so an empty `GEMINI_API_KEY=` line in
    // `.env` does not produce a key that fails every request.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let env = parse_environment(&or_default("GROCER_ENV", "development"))?;
    let log_level = or_default("GROCER_LOG_LEVEL", "info");
    let gemini_api_key = optional("GEMINI_API_KEY");
    let gemini_model = or_default("GROCER_GEMINI_MODEL", "gemini-2.5-flash")
        .trim()
        .to_string();
    if gemini_model.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "GROCER_GEMINI_MODEL".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }
    let gemini_base_url = or_default(
        "GROCER_GEMINI_BASE_URL",
        "https://generativelanguage.googleapis.com/",
    );
    let lookup_timeout_secs = parse_u64("GROCER_LOOKUP_TIMEOUT_SECS", "30")?;
    if lookup_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "GROCER_LOOKUP_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("GROCER_USER_AGENT", "grocer/0.1 (price-lookup)");

    let default_location = or_default("GROCER_DEFAULT_LOCATION", "T. Nagar, Chennai")
        .trim()
        .to_string();
    if default_location.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "GROCER_DEFAULT_LOCATION".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }

    let catalog_path = optional("GROCER_CATALOG_PATH").map(PathBuf::from);

    Ok(AppConfig {
        env,
        log_level,
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        lookup_timeout_secs,
        user_agent,
        default_location,
        catalog_path,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "GROCER_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
