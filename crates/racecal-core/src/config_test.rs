use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("GOOGLE_API_KEY", "test-key");
    m
}

#[test]
fn build_app_config_fails_without_api_key() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GOOGLE_API_KEY"),
        "expected MissingEnvVar(GOOGLE_API_KEY), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_api_key_as_missing() {
    let mut map = HashMap::new();
    map.insert("GOOGLE_API_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(_))));
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).expect("config should load");
    assert_eq!(cfg.google_api_key, "test-key");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.schedule_url, DEFAULT_SCHEDULE_URL);
    assert_eq!(cfg.site_origin, DEFAULT_SITE_ORIGIN);
    assert_eq!(cfg.places_url, DEFAULT_PLACES_URL);
    assert_eq!(cfg.output_path, PathBuf::from("events.json"));
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.retry, RetrySettings::default());
    assert_eq!(cfg.retry.max_retries, 1);
    assert_eq!(cfg.retry.retry_statuses, vec![500, 502, 504]);
    assert!(cfg.proxy.is_none());
    assert!(cfg.user_agent.is_none());
}

#[test]
fn retry_overrides_are_applied() {
    let mut map = full_env();
    map.insert("RACECAL_MAX_RETRIES", "5");
    map.insert("RACECAL_BACKOFF_FACTOR", "0.5");
    map.insert("RACECAL_RETRY_STATUSES", "429, 503");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.retry.max_retries, 5);
    assert!((cfg.retry.backoff_factor - 0.5).abs() < f64::EPSILON);
    assert_eq!(cfg.retry.retry_statuses, vec![429, 503]);
}

#[test]
fn empty_retry_statuses_disables_status_retries() {
    let mut map = full_env();
    map.insert("RACECAL_RETRY_STATUSES", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.retry.retry_statuses.is_empty());
}

#[test]
fn invalid_max_retries_is_rejected() {
    let mut map = full_env();
    map.insert("RACECAL_MAX_RETRIES", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RACECAL_MAX_RETRIES"),
        "expected InvalidEnvVar(RACECAL_MAX_RETRIES), got: {result:?}"
    );
}

#[test]
fn zero_request_timeout_is_rejected() {
    let mut map = full_env();
    map.insert("RACECAL_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RACECAL_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(RACECAL_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn negative_backoff_factor_is_rejected() {
    let mut map = full_env();
    map.insert("RACECAL_BACKOFF_FACTOR", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RACECAL_BACKOFF_FACTOR"),
        "expected InvalidEnvVar(RACECAL_BACKOFF_FACTOR), got: {result:?}"
    );
}

#[test]
fn out_of_range_status_is_rejected() {
    let mut map = full_env();
    map.insert("RACECAL_RETRY_STATUSES", "500,999");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RACECAL_RETRY_STATUSES"),
        "expected InvalidEnvVar(RACECAL_RETRY_STATUSES), got: {result:?}"
    );
}

#[test]
fn proxy_and_user_agent_overrides() {
    let mut map = full_env();
    map.insert("RACECAL_PROXY", "http://proxy.local:3128");
    map.insert("RACECAL_USER_AGENT", "racecal-test/1.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.proxy.as_deref(), Some("http://proxy.local:3128"));
    assert_eq!(cfg.user_agent.as_deref(), Some("racecal-test/1.0"));
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = full_env();
    map.insert("GOOGLE_API_KEY", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret"), "{rendered}");
    assert!(rendered.contains("[redacted]"));
}
