//! Schedule scraping for the race calendar.
//!
//! Owns the blocking HTTP transport (with its retry policy), the schedule page
//! fetch, and the pure parsing steps that turn page markup into raw listings,
//! event types and clean date text.

pub mod classify;
pub mod error;
pub mod extract;
pub mod schedule;
pub mod transport;

mod retry;

pub use classify::{classify_event_type, normalize_date_info};
pub use error::{ListingError, ScraperError};
pub use extract::{extract_listings, RawListing};
pub use schedule::fetch_schedule;
pub use transport::HttpTransport;
