//! CSS locators for the forecast site's markup.
//!
//! The site's class names and element nesting are the only coupling between
//! the extraction code and the page layout; keep them all here.

use std::sync::LazyLock;

use scraper::Selector;

/// Options of the prefecture dropdown on the index page.
pub const PREFECTURE_OPTION_CSS: &str = "select[name='elfukenlist']>option";
/// Forecast table caption on the detail page.
pub const CAPTION_CSS: &str = "caption";
/// Free-text weather overview on the detail page.
pub const OVERVIEW_CSS: &str = ".textframe";
/// Area heading cells; the first child element carries the area label.
pub const AREA_HEADING_CSS: &str = ".th-area";
/// Forecast text inside a day-block.
pub const FORECAST_CSS: &str = ".info";
pub const TEMP_MIN_CSS: &str = ".min";
pub const TEMP_MAX_CSS: &str = ".max";
/// Data cells of a day-block's rain table, label and value alternating.
pub const RAIN_CELL_CSS: &str = "table[class='rain']>tbody>tr>td";

fn compile(css: &'static str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

pub(crate) static PREFECTURE_OPTION: LazyLock<Selector> =
    LazyLock::new(|| compile(PREFECTURE_OPTION_CSS));
pub(crate) static CAPTION: LazyLock<Selector> = LazyLock::new(|| compile(CAPTION_CSS));
pub(crate) static OVERVIEW: LazyLock<Selector> = LazyLock::new(|| compile(OVERVIEW_CSS));
pub(crate) static AREA_HEADING: LazyLock<Selector> =
    LazyLock::new(|| compile(AREA_HEADING_CSS));
pub(crate) static FORECAST: LazyLock<Selector> = LazyLock::new(|| compile(FORECAST_CSS));
pub(crate) static TEMP_MIN: LazyLock<Selector> = LazyLock::new(|| compile(TEMP_MIN_CSS));
pub(crate) static TEMP_MAX: LazyLock<Selector> = LazyLock::new(|| compile(TEMP_MAX_CSS));
pub(crate) static RAIN_CELL: LazyLock<Selector> = LazyLock::new(|| compile(RAIN_CELL_CSS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_locators_compile() {
        for css in [
            PREFECTURE_OPTION_CSS,
            CAPTION_CSS,
            OVERVIEW_CSS,
            AREA_HEADING_CSS,
            FORECAST_CSS,
            TEMP_MIN_CSS,
            TEMP_MAX_CSS,
            RAIN_CELL_CSS,
        ] {
            assert!(Selector::parse(css).is_ok(), "selector failed to parse: {css}");
        }
    }
}
