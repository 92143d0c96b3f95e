//! Pure helpers that turn raw listing text into typed fields.

use racecal_core::EventType;

/// Derives the event type from a listing's link path.
///
/// `"race"` is checked before `"rally"`, so a path containing both is a race.
#[must_use]
pub fn classify_event_type(link_path: &str) -> EventType {
    if link_path.contains("race") {
        EventType::Race
    } else if link_path.contains("rally") {
        EventType::Rally
    } else {
        EventType::Unknown
    }
}

/// Strips the trailing entry-status blurb from a date cell.
///
/// Returns everything before the first `"Entry"`, untouched otherwise.
/// Surrounding whitespace is kept.
#[must_use]
pub fn normalize_date_info(text: &str) -> &str {
    match text.find("Entry") {
        Some(pos) => &text[..pos],
        None => text,
    }
}
