use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("specified prefecture \"{prefecture}\" was not found")]
    PrefectureNotFound { prefecture: String },

    #[error("specified area \"{area}\" was not found")]
    AreaNotFound { area: String },

    #[error("daily weather element of specified area \"{area}\" was not found")]
    DailyBlockMissing { area: String },
}

impl ScraperError {
    /// `true` for failures raised by the page loader rather than by extraction.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::UnexpectedStatus { .. })
    }
}
