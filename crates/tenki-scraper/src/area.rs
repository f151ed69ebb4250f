//! Locating an area's day-blocks on the detail page.
//!
//! Each area starts with a heading row whose cell carries the `th-area`
//! class; the three rows that follow it hold today, tomorrow, and the day
//! after.

use scraper::{ElementRef, Html};

use crate::error::ScraperError;
use crate::selectors;
use crate::text::text_content;

/// Number of day-blocks that follow every area heading.
pub const DAYS_PER_AREA: usize = 3;

/// Text of the heading's first child element, which holds the area label.
fn heading_label(heading: ElementRef<'_>) -> Option<String> {
    heading
        .children()
        .find_map(ElementRef::wrap)
        .map(text_content)
}

fn next_element_sibling(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

/// Finds the first heading labelled exactly `area` and returns the three
/// day-blocks that follow its row, in day order.
///
/// # Errors
///
/// - [`ScraperError::AreaNotFound`] if no heading carries the label.
/// - [`ScraperError::DailyBlockMissing`] if fewer than three sibling rows
///   follow the heading.
pub fn locate_daily_blocks<'a>(
    document: &'a Html,
    area: &str,
) -> Result<Vec<ElementRef<'a>>, ScraperError> {
    let heading = document
        .select(&selectors::AREA_HEADING)
        .find(|heading| heading_label(*heading).as_deref() == Some(area))
        .ok_or_else(|| ScraperError::AreaNotFound {
            area: area.to_owned(),
        })?;

    let mut next = heading
        .parent()
        .and_then(ElementRef::wrap)
        .and_then(next_element_sibling);

    let mut blocks = Vec::with_capacity(DAYS_PER_AREA);
    for _ in 0..DAYS_PER_AREA {
        let day = next.ok_or_else(|| ScraperError::DailyBlockMissing {
            area: area.to_owned(),
        })?;
        blocks.push(day);
        next = next_element_sibling(day);
    }

    tracing::debug!(area, blocks = blocks.len(), "located day-blocks");
    Ok(blocks)
}

/// Labels of every area heading in document order, without duplicates.
#[must_use]
pub fn list_area_labels(document: &Html) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for label in document
        .select(&selectors::AREA_HEADING)
        .filter_map(heading_label)
    {
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

#[cfg(test)]
#[path = "area_test.rs"]
mod tests;
