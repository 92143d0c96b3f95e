//! Wire types for the Places API `places:searchText` endpoint.
//!
//! Only the fields named in [`FIELD_MASK`] are modelled; everything is optional
//! because the API omits empty fields rather than sending nulls.

use serde::{Deserialize, Serialize};

use racecal_core::{GeoCoordinates, Location};

/// Response fields requested via the `X-Goog-FieldMask` header.
pub const FIELD_MASK: &str = "places.displayName,places.formattedAddress,places.location";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextRequest<'a> {
    pub text_query: &'a str,
}

/// `{"places": [...]}`; an empty match set comes back as `{}`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchTextResponse {
    #[serde(default)]
    pub places: Vec<Place>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub display_name: Option<LocalizedText>,
    pub formatted_address: Option<String>,
    pub location: Option<LatLng>,
}

#[derive(Debug, Deserialize)]
pub struct LocalizedText {
    pub text: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    /// Converts the candidate into a [`Location`], or `None` when it carries
    /// no coordinates.
    #[must_use]
    pub fn into_location(self) -> Option<Location> {
        let LatLng {
            latitude,
            longitude,
        } = self.location?;
        Some(Location {
            coordinates: Some(GeoCoordinates::new(latitude, longitude)),
            address: self.formatted_address,
            name: self.display_name.map(|d| d.text),
        })
    }
}
