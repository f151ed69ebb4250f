/// Default index page of the regional forecast site.
pub const DEFAULT_BASE_URL: &str = "http://www.jma.go.jp/jp/yoho/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Index page URL. Detail pages live at `base_url + id + ".html"`.
    pub base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: "info".to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: "tenki/0.1 (forecast-extraction)".to_string(),
        }
    }
}
