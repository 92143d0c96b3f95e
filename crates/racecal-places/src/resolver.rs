//! Course name → [`Location`] resolution outcome and the trait the pipeline
//! calls through.

use racecal_core::Location;

use crate::error::PlacesError;

/// Outcome of resolving one course name.
///
/// `NoMatch` means the API answered and found nothing; `ApiError` means the
/// call itself failed. Both drop the event, but they are logged and counted
/// separately.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(Location),
    NoMatch,
    ApiError(String),
}

impl Resolution {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

impl From<Result<Option<Location>, PlacesError>> for Resolution {
    fn from(result: Result<Option<Location>, PlacesError>) -> Self {
        match result {
            Ok(Some(location)) => Resolution::Found(location),
            Ok(None) => Resolution::NoMatch,
            Err(e) => Resolution::ApiError(e.to_string()),
        }
    }
}

/// Anything that can turn a free-text course name into a location.
///
/// Implementations must not panic or abort on a bad query; every failure is
/// reported through [`Resolution`].
pub trait LocationResolver {
    fn resolve(&self, query: &str) -> Resolution;
}

impl<R: LocationResolver + ?Sized> LocationResolver for &R {
    fn resolve(&self, query: &str) -> Resolution {
        (**self).resolve(query)
    }
}

#[cfg(test)]
mod tests {
    use racecal_core::GeoCoordinates;

    use super::*;

    #[test]
    fn some_location_is_found() {
        let location = Location {
            coordinates: Some(GeoCoordinates::new(1.0, 2.0)),
            address: None,
            name: None,
        };
        let resolution = Resolution::from(Ok::<_, PlacesError>(Some(location.clone())));
        assert_eq!(resolution, Resolution::Found(location));
        assert!(resolution.is_found());
    }

    #[test]
    fn none_is_no_match() {
        assert_eq!(Resolution::from(Ok::<_, PlacesError>(None)), Resolution::NoMatch);
    }

    #[test]
    fn error_is_api_error_with_detail() {
        let resolution = Resolution::from(Err::<Option<Location>, _>(PlacesError::UnexpectedStatus {
            status: 500,
            body: "backend down".to_owned(),
        }));
        match resolution {
            Resolution::ApiError(detail) => {
                assert!(detail.contains("500"), "{detail}");
                assert!(detail.contains("backend down"), "{detail}");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }
}
