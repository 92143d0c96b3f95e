use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}

/// Why a single schedule listing could not be turned into a [`crate::RawListing`].
///
/// These are per-entry failures; the run carries on with the next listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("listing has no .row element")]
    MissingRow,

    #[error("listing row has no cell at position {index}")]
    MissingCell { index: usize },

    #[error("course cell has no link")]
    MissingAnchor,

    #[error("course cell is empty")]
    EmptyCourse,

    #[error("link \"{href}\" cannot be resolved against the site origin: {reason}")]
    InvalidLink { href: String, reason: String },
}
