//! Schedule page markup → raw listings.
//!
//! All knowledge of the page's layout lives here. Each listing block is a
//! `div.container.mb-20.d-none.d-md-flex` whose first `.row` holds three
//! `div.col-sm` cells, read by position:
//!
//! | cell | content                               |
//! |------|---------------------------------------|
//! | 0    | course name, with a link to the event |
//! | 1    | date text, sometimes with entry status |
//! | 2    | event name                            |
//!
//! A block that does not match that shape yields a [`ListingError`] for that
//! block only.

use std::sync::LazyLock;

use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use crate::error::ListingError;

static LISTING: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.container.mb-20.d-none.d-md-flex").expect("valid listing selector")
});
static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".row").expect("valid row selector"));
static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.col-sm").expect("valid cell selector"));
static LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid link selector"));

/// The text fields of one listing, trimmed but otherwise as found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListing {
    pub course: String,
    pub link_path: String,
    pub date_text: String,
    pub name: String,
}

impl RawListing {
    /// Resolves `link_path` against the site origin.
    ///
    /// Relative paths are joined onto `origin`; absolute links pass through.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::InvalidLink`] when the join fails.
    pub fn event_url(&self, origin: &Url) -> Result<String, ListingError> {
        origin
            .join(&self.link_path)
            .map(String::from)
            .map_err(|e| ListingError::InvalidLink {
                href: self.link_path.clone(),
                reason: e.to_string(),
            })
    }
}

/// Parses every listing block on the page, in page order.
///
/// Never fails as a whole: a page without listings yields an empty `Vec`.
#[must_use]
pub fn extract_listings(html: &str) -> Vec<Result<RawListing, ListingError>> {
    let document = Html::parse_document(html);
    document.select(&LISTING).map(parse_listing).collect()
}

fn parse_listing(block: ElementRef<'_>) -> Result<RawListing, ListingError> {
    let row = block.select(&ROW).next().ok_or(ListingError::MissingRow)?;
    let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();
    let cell = |index: usize| {
        cells
            .get(index)
            .copied()
            .ok_or(ListingError::MissingCell { index })
    };

    let course_cell = cell(0)?;
    let date_cell = cell(1)?;
    let name_cell = cell(2)?;

    let link_path = course_cell
        .select(&LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .ok_or(ListingError::MissingAnchor)?
        .to_owned();

    let course = element_text(course_cell);
    if course.is_empty() {
        return Err(ListingError::EmptyCourse);
    }

    Ok(RawListing {
        course,
        link_path,
        date_text: element_text(date_cell),
        name: element_text(name_cell),
    })
}

/// Concatenated descendant text, trimmed.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
