//! Parsing of a single day-block.

use scraper::ElementRef;
use tenki_core::{DailyForecast, Temperature};

use crate::rain::parse_rain_table;
use crate::selectors;
use crate::text::extract_text;

/// Extracts forecast text, rain intervals, and the min/max temperature pair
/// from one day-block. Groups that are missing or empty stay `None`; callers
/// drop the day entirely when [`DailyForecast::is_empty`] holds.
#[must_use]
pub fn parse_daily_block(day: ElementRef<'_>) -> DailyForecast {
    let forecast = non_empty_text(day, &selectors::FORECAST);

    let rain = parse_rain_table(day);
    let rain = (!rain.is_empty()).then_some(rain);

    let temp = Temperature {
        min: non_empty_text(day, &selectors::TEMP_MIN),
        max: non_empty_text(day, &selectors::TEMP_MAX),
    };
    let temp = (!temp.is_empty()).then_some(temp);

    DailyForecast {
        forecast,
        rain,
        temp,
    }
}

fn non_empty_text(day: ElementRef<'_>, locator: &scraper::Selector) -> Option<String> {
    extract_text(day, locator).filter(|text| !text.is_empty())
}

#[cfg(test)]
#[path = "daily_test.rs"]
mod tests;
