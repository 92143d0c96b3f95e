//! Venue geocoding through the Places API text search.

pub mod client;
pub mod error;
pub mod resolver;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use resolver::{LocationResolver, Resolution};
