//! Event calendar records as written to the output JSON document.
//!
//! Field names on the wire are camelCase (`dateInfo`, `eventType`,
//! `eventCourse`) to match the published calendar format.

use serde::{Deserialize, Serialize};

/// Kind of listing, derived from the listing's link path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Race,
    Rally,
    Unknown,
}

impl EventType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Race => "race",
            EventType::Rally => "rally",
            EventType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl GeoCoordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// `true` when both latitude and longitude are known.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}

/// A resolved venue: coordinates plus the geocoder's address and display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub coordinates: Option<GeoCoordinates>,
    pub address: Option<String>,
    pub name: Option<String>,
}

impl Location {
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.coordinates.is_some_and(|c| c.is_complete())
    }
}

/// One scheduled event.
///
/// `name` is the dedup key within a run. `location` is attached at most once,
/// through [`Event::with_location`], after a successful resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub url: String,
    pub name: String,
    pub date_info: String,
    pub event_type: EventType,
    pub event_course: String,
    pub location: Option<Location>,
}

impl Event {
    #[must_use]
    pub fn new(
        url: String,
        name: String,
        date_info: String,
        event_type: EventType,
        event_course: String,
    ) -> Self {
        Self {
            url,
            name,
            date_info,
            event_type,
            event_course,
            location: None,
        }
    }

    /// Consumes the event and returns it with `location` attached.
    #[must_use]
    pub fn with_location(self, location: Location) -> Self {
        Self {
            location: Some(location),
            ..self
        }
    }
}
