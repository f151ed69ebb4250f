//! Prefecture name to page identifier resolution via the index page dropdown.

use scraper::{ElementRef, Html};
use tenki_core::PrefectureOption;

use crate::error::ScraperError;
use crate::selectors;
use crate::text::text_content;

/// Identifier carried by an option. An option without a `value` attribute
/// submits its text, so fall back to that.
fn option_id(option: ElementRef<'_>) -> String {
    option
        .value()
        .attr("value")
        .map_or_else(|| text_content(option), str::to_owned)
}

/// Every prefecture listed in the index page dropdown, in document order.
#[must_use]
pub fn prefecture_options(document: &Html) -> Vec<PrefectureOption> {
    document
        .select(&selectors::PREFECTURE_OPTION)
        .map(|option| PrefectureOption {
            name: text_content(option),
            id: option_id(option),
        })
        .collect()
}

/// Resolves `prefecture` against the option texts of the index page and
/// returns the first exact match's identifier. The identifier is not checked
/// for reachability.
///
/// # Errors
///
/// Returns [`ScraperError::PrefectureNotFound`] if no option text equals
/// `prefecture`.
pub fn resolve_prefecture_id(document: &Html, prefecture: &str) -> Result<String, ScraperError> {
    document
        .select(&selectors::PREFECTURE_OPTION)
        .find(|option| text_content(*option) == prefecture)
        .map(option_id)
        .ok_or_else(|| ScraperError::PrefectureNotFound {
            prefecture: prefecture.to_owned(),
        })
}

#[cfg(test)]
#[path = "prefecture_test.rs"]
mod tests;
