//! Blocking client for the Places API `places:searchText` endpoint.
//!
//! One POST per query, authenticated with an API key header and restricted by a
//! field mask to display name, formatted address and location. Retries come
//! from the shared [`HttpTransport`]; results are never cached.

use reqwest::header::{HeaderName, CONTENT_TYPE};
use reqwest::{StatusCode, Url};

use racecal_core::config::DEFAULT_PLACES_URL;
use racecal_core::Location;
use racecal_scraper::HttpTransport;

use crate::error::PlacesError;
use crate::resolver::{LocationResolver, Resolution};
use crate::types::{Place, SearchTextRequest, SearchTextResponse, FIELD_MASK};

const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-goog-api-key");
const FIELD_MASK_HEADER: HeaderName = HeaderName::from_static("x-goog-fieldmask");

/// Longest error body kept in [`PlacesError::UnexpectedStatus`].
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Client for text search against the Places API.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_endpoint`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    transport: HttpTransport,
    api_key: String,
    endpoint: Url,
}

impl std::fmt::Debug for PlacesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacesClient")
            .field("api_key", &"[redacted]")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl PlacesClient {
    /// Creates a client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Setup`] if `api_key` is blank.
    pub fn new(transport: HttpTransport, api_key: &str) -> Result<Self, PlacesError> {
        Self::with_endpoint(transport, api_key, DEFAULT_PLACES_URL)
    }

    /// Creates a client with a custom endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Setup`] if `api_key` is blank or `endpoint` is
    /// not a valid URL.
    pub fn with_endpoint(
        transport: HttpTransport,
        api_key: &str,
        endpoint: &str,
    ) -> Result<Self, PlacesError> {
        if api_key.trim().is_empty() {
            return Err(PlacesError::Setup("API key is empty".to_owned()));
        }
        let endpoint = Url::parse(endpoint)
            .map_err(|e| PlacesError::Setup(format!("invalid endpoint '{endpoint}': {e}")))?;

        Ok(Self {
            transport,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Searches for `query` and returns the first candidate as a [`Location`].
    ///
    /// Returns `Ok(None)` when the API answers 200 with no candidates.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure after transport retries.
    /// - [`PlacesError::UnexpectedStatus`] on any status other than 200.
    /// - [`PlacesError::Deserialize`] if the body is not the expected JSON.
    /// - [`PlacesError::MissingLocation`] if the first candidate has no
    ///   coordinates.
    pub fn search_text(&self, query: &str) -> Result<Option<Location>, PlacesError> {
        tracing::debug!(query, "searching places");
        let body = SearchTextRequest { text_query: query };

        let response = self.transport.send(|client| {
            client
                .post(self.endpoint.clone())
                .header(CONTENT_TYPE, "application/json")
                .header(API_KEY_HEADER, &self.api_key)
                .header(FIELD_MASK_HEADER, FIELD_MASK)
                .json(&body)
        })?;

        let status = response.status();
        let text = response.text()?;

        if status != StatusCode::OK {
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let parsed: SearchTextResponse =
            serde_json::from_str(&text).map_err(|e| PlacesError::Deserialize {
                context: format!("searchText(query={query})"),
                source: e,
            })?;

        let candidates = parsed.places.len();
        let Some(first) = parsed.places.into_iter().next() else {
            tracing::debug!(query, "places search returned no candidates");
            return Ok(None);
        };
        tracing::debug!(query, candidates, "places search matched");

        Place::into_location(first)
            .map(Some)
            .ok_or_else(|| PlacesError::MissingLocation {
                query: query.to_owned(),
            })
    }
}

impl LocationResolver for PlacesClient {
    fn resolve(&self, query: &str) -> Resolution {
        Resolution::from(self.search_text(query))
    }
}
