pub mod area;
pub mod client;
pub mod daily;
pub mod detail;
pub mod error;
pub mod loader;
pub mod prefecture;
pub mod rain;
pub mod selectors;
pub mod text;

pub use client::WeatherClient;
pub use detail::{area_labels, parse_detail_page};
pub use error::ScraperError;
pub use loader::{HttpPageLoader, PageLoader};
pub use prefecture::{prefecture_options, resolve_prefecture_id};
pub use tenki_core::{
    DailyForecast, ForecastRequest, PrefectureOption, RainInterval, Temperature, WeatherResult,
};
