//! Rain-probability table parsing.
//!
//! The table is a flat run of cells: time label, percentage, time label,
//! percentage, and so on. Neighbouring slots that report the same percentage
//! are folded into one interval.

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;
use tenki_core::RainInterval;

use crate::selectors;
use crate::text::text_content;

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+%").expect("valid percent regex"));

/// Parses the rain table of one day-block.
///
/// Returns an empty `Vec` when the block has no rain table or no cell pair
/// carries a percentage.
#[must_use]
pub fn parse_rain_table(day: ElementRef<'_>) -> Vec<RainInterval> {
    let cells: Vec<String> = day
        .select(&selectors::RAIN_CELL)
        .map(|cell| text_content(cell).trim().to_owned())
        .collect();
    fold_rain_cells(&cells)
}

/// Folds alternating `label, value` cells into rain intervals.
///
/// Pairs whose value does not contain `<digits>%` are skipped and leave the
/// merge state untouched. A trailing label without a value is ignored.
#[must_use]
pub fn fold_rain_cells<S: AsRef<str>>(cells: &[S]) -> Vec<RainInterval> {
    let mut intervals: Vec<RainInterval> = Vec::new();

    for pair in cells.chunks_exact(2) {
        let time = pair[0].as_ref().trim();
        let percent = pair[1].as_ref().trim();
        if !PERCENT_RE.is_match(percent) {
            continue;
        }

        match intervals.last_mut() {
            Some(last) if last.percent == percent => {
                last.time = merge_time_range(&last.time, time);
            }
            _ => intervals.push(RainInterval {
                time: time.to_owned(),
                percent: percent.to_owned(),
            }),
        }
    }

    intervals
}

/// Joins the first three characters of `current` (start and separator) with
/// the last two characters of `next` (its end).
///
/// Assumes fixed-width `"HH-HH"` style labels; other widths produce garbled
/// ranges, same as the site-native behaviour.
pub(crate) fn merge_time_range(current: &str, next: &str) -> String {
    let tail_len = next.chars().count().saturating_sub(2);
    current
        .chars()
        .take(3)
        .chain(next.chars().skip(tail_len))
        .collect()
}

#[cfg(test)]
#[path = "rain_test.rs"]
mod tests;
