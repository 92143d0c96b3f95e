use std::path::PathBuf;

/// Transport retry policy shared by the schedule fetch and geocoding calls.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrySettings {
    /// Additional attempts after the first one.
    pub max_retries: u32,
    /// Seconds; the wait before retry `n` is `backoff_factor * 2^(n-1)`.
    pub backoff_factor: f64,
    /// HTTP status codes that trigger a retry.
    pub retry_statuses: Vec<u16>,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_retries: 1,
            backoff_factor: 20.0,
            retry_statuses: vec![500, 502, 504],
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub google_api_key: String,
    pub log_level: String,
    pub schedule_url: String,
    pub site_origin: String,
    pub places_url: String,
    pub output_path: PathBuf,
    pub request_timeout_secs: u64,
    pub retry: RetrySettings,
    pub proxy: Option<String>,
    pub user_agent: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("schedule_url", &self.schedule_url)
            .field("site_origin", &self.site_origin)
            .field("places_url", &self.places_url)
            .field("output_path", &self.output_path)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("retry", &self.retry)
            .field("proxy", &self.proxy.as_ref().map(|_| "[redacted]"))
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
