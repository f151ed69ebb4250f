//! Extraction of a complete forecast record from detail-page markup.

use scraper::Html;
use tenki_core::{DailyForecast, WeatherResult};

use crate::area::{list_area_labels, locate_daily_blocks};
use crate::daily::parse_daily_block;
use crate::error::ScraperError;
use crate::selectors;
use crate::text::{extract_lines, extract_text};

/// Builds the forecast record for `area` from a detail page.
///
/// Caption and overview are optional. Day-blocks with nothing to report are
/// dropped; the rest keep their day order.
///
/// # Errors
///
/// - [`ScraperError::AreaNotFound`] if no heading matches `area`.
/// - [`ScraperError::DailyBlockMissing`] if the heading is followed by fewer
///   than three day-blocks.
pub fn parse_detail_page(
    markup: &str,
    prefecture: &str,
    area: &str,
) -> Result<WeatherResult, ScraperError> {
    let document = Html::parse_document(markup);
    let root = document.root_element();

    let caption = extract_text(root, &selectors::CAPTION).filter(|c| !c.is_empty());
    let overview = extract_lines(root, &selectors::OVERVIEW).filter(|lines| !lines.is_empty());

    let daily: Vec<DailyForecast> = locate_daily_blocks(&document, area)?
        .into_iter()
        .map(parse_daily_block)
        .filter(|day| !day.is_empty())
        .collect();
    tracing::debug!(prefecture, area, days = daily.len(), "parsed day-blocks");

    let mut result = WeatherResult::new(prefecture, area);
    result.caption = caption;
    result.overview = overview;
    result.daily = (!daily.is_empty()).then_some(daily);
    Ok(result)
}

/// Area labels present on a detail page, in document order.
#[must_use]
pub fn area_labels(markup: &str) -> Vec<String> {
    list_area_labels(&Html::parse_document(markup))
}

#[cfg(test)]
#[path = "detail_test.rs"]
mod tests;
