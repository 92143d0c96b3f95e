//! Schedule → calendar orchestration.
//!
//! One synchronous pass over the page's listings, in page order:
//!
//! 1. Skip listings that failed to parse.
//! 2. Classify by link path; skip rallies and unknown types.
//! 3. Strip the entry-status suffix from the date.
//! 4. Skip names already seen this run (first listing wins).
//! 5. Build the [`Event`].
//! 6. Resolve its course; keep it only if a location was found.
//!
//! Nothing here is fatal per listing. The only run-level failures are building
//! the clients and fetching the schedule page, both in [`run`].

use std::collections::HashSet;

use anyhow::Context;
use reqwest::Url;

use racecal_core::{AppConfig, Event, EventType};
use racecal_places::{LocationResolver, PlacesClient, Resolution};
use racecal_scraper::{
    classify_event_type, extract_listings, fetch_schedule, normalize_date_info, HttpTransport,
};

/// Per-run counters, logged when the run completes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub listings: usize,
    pub malformed: usize,
    pub rallies_skipped: usize,
    pub unknown_skipped: usize,
    pub duplicates_skipped: usize,
    pub resolved: usize,
    pub no_match: usize,
    pub resolution_errors: usize,
}

impl RunSummary {
    pub(crate) fn log(&self) {
        tracing::info!(
            listings = self.listings,
            malformed = self.malformed,
            rallies_skipped = self.rallies_skipped,
            unknown_skipped = self.unknown_skipped,
            duplicates_skipped = self.duplicates_skipped,
            resolved = self.resolved,
            no_match = self.no_match,
            resolution_errors = self.resolution_errors,
            "calendar run complete"
        );
    }
}

#[derive(Debug)]
pub(crate) struct PipelineOutput {
    pub events: Vec<Event>,
    pub summary: RunSummary,
}

/// Fetches the schedule page and builds the resolved event list.
///
/// # Errors
///
/// Fails if the transport or Places client cannot be built, the site origin
/// is not a URL, or the schedule fetch does not return HTTP 200.
pub(crate) fn run(config: &AppConfig) -> anyhow::Result<PipelineOutput> {
    let origin = Url::parse(&config.site_origin)
        .with_context(|| format!("invalid site origin '{}'", config.site_origin))?;
    let transport = HttpTransport::from_config(config).context("failed to build HTTP transport")?;
    let places = PlacesClient::with_endpoint(
        transport.clone(),
        &config.google_api_key,
        &config.places_url,
    )
    .context("failed to build Places client")?;

    let html = fetch_schedule(&transport, &config.schedule_url)
        .context("failed to fetch schedule page")?;

    Ok(build_events(&html, &origin, &places))
}

/// Turns schedule markup into the final event list using `resolver` for
/// locations. Output order is page order.
pub(crate) fn build_events<R: LocationResolver>(
    html: &str,
    origin: &Url,
    resolver: &R,
) -> PipelineOutput {
    let mut summary = RunSummary::default();
    let mut seen_names: HashSet<String> = HashSet::new();
    let mut events = Vec::new();

    for (index, parsed) in extract_listings(html).into_iter().enumerate() {
        summary.listings += 1;

        let parsed = parsed.and_then(|listing| {
            let url = listing.event_url(origin)?;
            Ok((listing, url))
        });
        let (listing, url) = match parsed {
            Ok(pair) => pair,
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed listing");
                summary.malformed += 1;
                continue;
            }
        };

        match classify_event_type(&listing.link_path) {
            EventType::Race => {}
            EventType::Rally => {
                tracing::debug!(name = %listing.name, "skipping rally");
                summary.rallies_skipped += 1;
                continue;
            }
            EventType::Unknown => {
                tracing::debug!(
                    name = %listing.name,
                    link = %listing.link_path,
                    "skipping listing of unknown type"
                );
                summary.unknown_skipped += 1;
                continue;
            }
        }

        let date_info = normalize_date_info(&listing.date_text).to_owned();

        if !seen_names.insert(listing.name.clone()) {
            tracing::debug!(name = %listing.name, "skipping duplicate listing");
            summary.duplicates_skipped += 1;
            continue;
        }

        let event = Event::new(
            url,
            listing.name,
            date_info,
            EventType::Race,
            listing.course,
        );

        match resolver.resolve(&event.event_course) {
            Resolution::Found(location) if location.has_coordinates() => {
                tracing::debug!(name = %event.name, course = %event.event_course, "event resolved");
                summary.resolved += 1;
                events.push(event.with_location(location));
            }
            Resolution::Found(_) => {
                tracing::warn!(
                    name = %event.name,
                    course = %event.event_course,
                    "dropping event: resolved location has no coordinates"
                );
                summary.resolution_errors += 1;
            }
            Resolution::NoMatch => {
                tracing::info!(
                    name = %event.name,
                    course = %event.event_course,
                    "dropping event: no place matched course"
                );
                summary.no_match += 1;
            }
            Resolution::ApiError(detail) => {
                tracing::warn!(
                    name = %event.name,
                    course = %event.event_course,
                    error = %detail,
                    "dropping event: place lookup failed"
                );
                summary.resolution_errors += 1;
            }
        }
    }

    PipelineOutput { events, summary }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
