//! Schedule page fetch.

use reqwest::header::ACCEPT;
use reqwest::StatusCode;

use crate::error::ScraperError;
use crate::transport::HttpTransport;

/// Fetches the schedule page and returns its HTML body.
///
/// Only HTTP 200 counts as success. The transport's retry policy applies
/// beneath this call; there is no further retry here.
///
/// # Errors
///
/// - [`ScraperError::UnexpectedStatus`]: any status other than 200, including
///   a retryable status that outlasted the retry budget.
/// - [`ScraperError::Http`]: network failure, or the body could not be read.
pub fn fetch_schedule(transport: &HttpTransport, url: &str) -> Result<String, ScraperError> {
    tracing::info!(url, "fetching schedule page");

    let response = transport.send(|client| {
        client
            .get(url)
            .header(ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
    })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(ScraperError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_owned(),
        });
    }

    let body = response.text()?;
    tracing::debug!(bytes = body.len(), "schedule page fetched");
    Ok(body)
}
