//! Page fetching. Extraction only ever sees the returned markup.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tenki_core::AppConfig;

use crate::error::ScraperError;

/// Fetches raw page markup for a URL.
///
/// Implementations own transport concerns such as timeouts. A failed fetch
/// is terminal for the call that issued it.
pub trait PageLoader {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, ScraperError>> + Send;
}

/// [`PageLoader`] backed by `reqwest`. No retries are attempted.
#[derive(Debug, Clone)]
pub struct HttpPageLoader {
    client: Client,
}

impl HttpPageLoader {
    /// Creates a loader with the given request timeout, connect timeout, and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Self::new(
            config.request_timeout_secs,
            config.connect_timeout_secs,
            &config.user_agent,
        )
    }
}

impl PageLoader for HttpPageLoader {
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx response.
    /// - [`ScraperError::Http`] on network, TLS, or body decoding failure.
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}
