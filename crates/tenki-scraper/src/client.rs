//! Public forecast lookup: prefecture resolution, detail page fetch, and
//! extraction composed into one call.

use reqwest::Url;
use scraper::Html;
use tenki_core::{AppConfig, ForecastRequest, PrefectureOption, WeatherResult};

use crate::detail::{area_labels, parse_detail_page};
use crate::error::ScraperError;
use crate::loader::{HttpPageLoader, PageLoader};
use crate::prefecture::{prefecture_options, resolve_prefecture_id};

/// Client for the regional forecast site.
///
/// Holds no per-call state: every lookup fetches the index page and then
/// the detail page, so concurrent calls are independent.
pub struct WeatherClient<L = HttpPageLoader> {
    loader: L,
    base_url: String,
}

impl WeatherClient<HttpPageLoader> {
    /// Creates a client with an HTTP loader built from `config`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] if the HTTP client cannot be constructed.
    /// - [`ScraperError::InvalidBaseUrl`] if `config.base_url` is not a URL.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::with_loader(HttpPageLoader::from_config(config)?, &config.base_url)
    }
}

impl<L: PageLoader> WeatherClient<L> {
    /// Creates a client over a custom loader (a mock server in tests).
    ///
    /// The base URL is normalised to end with exactly one `/` so detail pages
    /// resolve to `base_url + id + ".html"`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    pub fn with_loader(loader: L, base_url: &str) -> Result<Self, ScraperError> {
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        Url::parse(&normalised).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            loader,
            base_url: normalised,
        })
    }

    /// Index page URL, always ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn detail_url(&self, prefecture_id: &str) -> String {
        format!("{}{prefecture_id}.html", self.base_url)
    }

    /// Fetches the index page and resolves `prefecture` to its page identifier.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::PrefectureNotFound`] if no dropdown option matches.
    /// - Transport errors from the loader.
    pub async fn resolve_prefecture(&self, prefecture: &str) -> Result<String, ScraperError> {
        let markup = self.loader.fetch(&self.base_url).await?;
        let id = resolve_prefecture_id(&Html::parse_document(&markup), prefecture)?;
        tracing::debug!(prefecture, id = %id, "resolved prefecture");
        Ok(id)
    }

    /// Lists every prefecture offered by the index page.
    ///
    /// # Errors
    ///
    /// Transport errors from the loader.
    pub async fn list_prefectures(&self) -> Result<Vec<PrefectureOption>, ScraperError> {
        let markup = self.loader.fetch(&self.base_url).await?;
        Ok(prefecture_options(&Html::parse_document(&markup)))
    }

    /// Lists the area labels on a prefecture's detail page.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::PrefectureNotFound`] if the prefecture does not resolve.
    /// - Transport errors from the loader.
    pub async fn list_areas(&self, prefecture: &str) -> Result<Vec<String>, ScraperError> {
        let id = self.resolve_prefecture(prefecture).await?;
        let markup = self.loader.fetch(&self.detail_url(&id)).await?;
        Ok(area_labels(&markup))
    }

    /// Fetches and extracts the three-day forecast for `area` of `prefecture`.
    ///
    /// Performs two sequential fetches (index page, then detail page); any
    /// failure aborts the call.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::PrefectureNotFound`] if the prefecture does not resolve.
    /// - [`ScraperError::AreaNotFound`] if the detail page has no such area.
    /// - [`ScraperError::DailyBlockMissing`] if the area has fewer than three
    ///   day-blocks.
    /// - [`ScraperError::Http`] / [`ScraperError::UnexpectedStatus`] from the loader.
    pub async fn get_weather(
        &self,
        prefecture: &str,
        area: &str,
    ) -> Result<WeatherResult, ScraperError> {
        let id = self.resolve_prefecture(prefecture).await?;
        let markup = self.loader.fetch(&self.detail_url(&id)).await?;
        parse_detail_page(&markup, prefecture, area)
    }

    /// [`Self::get_weather`] for a [`ForecastRequest`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_weather`].
    pub async fn get_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<WeatherResult, ScraperError> {
        self.get_weather(&request.prefecture, &request.area).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
