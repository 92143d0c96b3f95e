use thiserror::Error;

/// Errors returned by the Places text-search client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with something other than 200.
    #[error("Places API returned HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The first candidate came back without coordinates.
    #[error("first match for \"{query}\" has no location")]
    MissingLocation { query: String },

    #[error("invalid client setup: {0}")]
    Setup(String),
}
