//! Blocking HTTP transport shared by the schedule fetch and geocoding calls.
//!
//! Wraps a `reqwest::blocking::Client` configured with timeouts, an optional
//! proxy and user-agent, and applies the retry policy from
//! [`RetrySettings`] beneath every request.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Proxy;

use racecal_core::{AppConfig, RetrySettings};

use crate::error::ScraperError;
use crate::retry::retry_with_backoff;

pub const DEFAULT_USER_AGENT: &str = "racecal/0.1 (event-calendar)";

/// HTTP client plus retry policy.
///
/// A response whose status is in `retry_statuses`, and any connect, timeout or
/// request-level failure, is retried up to `max_retries` more times. The pipeline above this
/// layer never retries on its own.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    retry: RetrySettings,
}

impl HttpTransport {
    /// Builds a transport with the given timeout, optional `User-Agent`
    /// override, optional HTTPS proxy and retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the proxy URL is invalid or the
    /// underlying client cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: Option<&str>,
        proxy: Option<&str>,
        retry: RetrySettings,
    ) -> Result<Self, ScraperError> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT));

        if let Some(proxy) = proxy {
            builder = builder.proxy(Proxy::https(proxy)?);
        }

        Ok(Self {
            client: builder.build()?,
            retry,
        })
    }

    /// Builds a transport from the application config.
    ///
    /// # Errors
    ///
    /// See [`HttpTransport::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            config.request_timeout_secs,
            config.user_agent.as_deref(),
            config.proxy.as_deref(),
            config.retry.clone(),
        )
    }

    /// Sends the request produced by `build`, rebuilding and resending it for
    /// each retry.
    ///
    /// Returns the final response whatever its status; callers decide what a
    /// non-200 means for them.
    ///
    /// # Errors
    ///
    /// Returns the last `reqwest::Error` when every attempt failed at the
    /// transport level.
    pub fn send<F>(&self, build: F) -> Result<Response, reqwest::Error>
    where
        F: Fn(&Client) -> RequestBuilder,
    {
        retry_with_backoff(
            &self.retry,
            || build(&self.client).send(),
            |outcome| self.retry_reason(outcome),
        )
    }

    fn retry_reason(&self, outcome: &Result<Response, reqwest::Error>) -> Option<String> {
        match outcome {
            Ok(response) => {
                let status = response.status();
                self.retry
                    .retry_statuses
                    .contains(&status.as_u16())
                    .then(|| format!("HTTP {status} from {}", response.url()))
            }
            // `is_request` covers a connection dropped mid-exchange.
            Err(e) if e.is_connect() || e.is_timeout() || e.is_request() => Some(e.to_string()),
            Err(_) => None,
        }
    }
}
