use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_CARTS_ENDPOINT: &str =
    "https://backend-challenge-fall-2018.herokuapp.com/carts.json";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
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
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; an empty environment yields the defaults.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    // Parsed as a URL when the carts client is built.
    let carts_endpoint = or_default("CARTCALC_CARTS_ENDPOINT", DEFAULT_CARTS_ENDPOINT);

    let log_level = or_default("CARTCALC_LOG_LEVEL", "warn");
    let user_agent = or_default("CARTCALC_USER_AGENT", "cartcalc/0.1");

    let request_timeout_secs = match lookup("CARTCALC_REQUEST_TIMEOUT_SECS") {
        Ok(raw) => Some(
            raw.parse::<u64>()
                .map_err(|e| invalid("CARTCALC_REQUEST_TIMEOUT_SECS", e.to_string()))?,
        ),
        Err(_) => None,
    };

    let max_pages = match lookup("CARTCALC_MAX_PAGES") {
        Ok(raw) => {
            let max = raw
                .parse::<u64>()
                .map_err(|e| invalid("CARTCALC_MAX_PAGES", e.to_string()))?;
            if max == 0 {
                return Err(invalid(
                    "CARTCALC_MAX_PAGES",
                    "must be at least 1".to_string(),
                ));
            }
            Some(max)
        }
        Err(_) => None,
    };

    Ok(AppConfig {
        carts_endpoint,
        log_level,
        user_agent,
        request_timeout_secs,
        max_pages,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
