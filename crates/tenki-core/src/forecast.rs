//! Value types produced by forecast extraction.
//!
//! Every optional field is skipped during serialization when unset, so a
//! rendered record never carries `null` or empty placeholders.

use serde::{Deserialize, Serialize};

/// Prefecture and area labels, both matched verbatim against page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub prefecture: String,
    pub area: String,
}

impl ForecastRequest {
    #[must_use]
    pub fn new(prefecture: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            prefecture: prefecture.into(),
            area: area.into(),
        }
    }
}

/// One entry of the prefecture dropdown on the index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefectureOption {
    /// Visible option text, e.g. `"奈良県"`.
    pub name: String,
    /// Page identifier taken from the option's `value` attribute.
    pub id: String,
}

/// A rain-probability bucket. `time` is the source label, or a merged
/// `"start-end"` range when neighbouring buckets share the same `percent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RainInterval {
    pub time: String,
    pub percent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

impl Temperature {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// One day's forecast for an area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyForecast {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain: Option<Vec<RainInterval>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<Temperature>,
}

impl DailyForecast {
    /// `true` when none of the three field groups was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forecast.is_none() && self.rain.is_none() && self.temp.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub prefecture: String,
    pub area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<Vec<String>>,
    /// At most three entries (today, tomorrow, the day after), empty days dropped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily: Option<Vec<DailyForecast>>,
}

impl WeatherResult {
    #[must_use]
    pub fn new(prefecture: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            prefecture: prefecture.into(),
            area: area.into(),
            caption: None,
            overview: None,
            daily: None,
        }
    }
}

#[cfg(test)]
#[path = "forecast_test.rs"]
mod tests;
