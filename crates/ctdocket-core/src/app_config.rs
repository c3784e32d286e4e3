/// Runtime configuration for a scrape run, loaded from `CTDOCKET_*`
/// environment variables by [`crate::config::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// WebDriver endpoint the browser session connects to (geckodriver or a
    /// Selenium grid).
    pub webdriver_url: String,
    /// Root of the court portal. The search page and `LoadDocket.aspx` detail
    /// URLs are built from this.
    pub base_url: String,
    pub headless: bool,
    /// Explicit page-load timeout applied to the WebDriver session.
    pub page_load_timeout_secs: u64,
    /// Implicit element-wait timeout applied to the WebDriver session.
    pub implicit_wait_secs: u64,
    /// Upper bound of the uniformly random politeness delay inserted between
    /// detail-page fetches.
    pub detail_delay_max_ms: u64,
    pub log_level: String,
}
