use crate::app_config::{AppConfig, RetrySettings};
use crate::ConfigError;

pub const DEFAULT_SCHEDULE_URL: &str = "https://24hoursoflemons.com/schedule/#race";
pub const DEFAULT_SITE_ORIGIN: &str = "https://24hoursoflemons.com";
pub const DEFAULT_PLACES_URL: &str = "https://places.googleapis.com/v1/places:searchText";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if `GOOGLE_API_KEY` is missing or a value is invalid.
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
/// Returns `ConfigError` if `GOOGLE_API_KEY` is missing or a value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> { lookup(var).ok().filter(|v| !v.is_empty()) };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let google_api_key = require("GOOGLE_API_KEY")?;

    let log_level = or_default("RACECAL_LOG_LEVEL", "info");
    let schedule_url = or_default("RACECAL_SCHEDULE_URL", DEFAULT_SCHEDULE_URL);
    let site_origin = or_default("RACECAL_SITE_ORIGIN", DEFAULT_SITE_ORIGIN);
    let places_url = or_default("RACECAL_PLACES_URL", DEFAULT_PLACES_URL);
    let output_path = or_default("RACECAL_OUTPUT_PATH", "events.json").into();
    let request_timeout_secs = parse_u64("RACECAL_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "RACECAL_REQUEST_TIMEOUT_SECS",
            "timeout must be at least 1 second".to_string(),
        ));
    }

    let max_retries = parse_u32("RACECAL_MAX_RETRIES", "1")?;
    let backoff_factor = parse_backoff_factor(&or_default("RACECAL_BACKOFF_FACTOR", "20.0"))
        .map_err(|reason| invalid("RACECAL_BACKOFF_FACTOR", reason))?;
    let retry_statuses = parse_status_list(&or_default("RACECAL_RETRY_STATUSES", "500,502,504"))
        .map_err(|reason| invalid("RACECAL_RETRY_STATUSES", reason))?;

    Ok(AppConfig {
        google_api_key,
        log_level,
        schedule_url,
        site_origin,
        places_url,
        output_path,
        request_timeout_secs,
        retry: RetrySettings {
            max_retries,
            backoff_factor,
            retry_statuses,
        },
        proxy: optional("RACECAL_PROXY"),
        user_agent: optional("RACECAL_USER_AGENT"),
    })
}

/// Parses a non-negative, finite backoff factor in seconds.
fn parse_backoff_factor(raw: &str) -> Result<f64, String> {
    let value = raw.trim().parse::<f64>().map_err(|e| e.to_string())?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("backoff factor must be a non-negative number, got {raw}"));
    }
    Ok(value)
}

/// Parses a comma-separated list of HTTP status codes (`"500, 502,504"`).
///
/// An empty string yields an empty list, which disables status-based retries.
fn parse_status_list(raw: &str) -> Result<Vec<u16>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let code = s
                .parse::<u16>()
                .map_err(|e| format!("\"{s}\" is not a status code: {e}"))?;
            if (100..=599).contains(&code) {
                Ok(code)
            } else {
                Err(format!("{code} is outside the HTTP status range"))
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
