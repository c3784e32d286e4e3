use chrono::NaiveDate;
use thiserror::Error;

use ctdocket_core::CoreError;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("query date {date} is in the past; the portal only accepts today or later")]
    PastQueryDate { date: NaiveDate },

    /// Domain-level input rejection (unknown category, inverted date range).
    #[error(transparent)]
    Query(#[from] CoreError),

    #[error("element not found: {locator}")]
    MissingElement { locator: String },

    #[error("could not parse filing date \"{text}\": {source}")]
    DateParse {
        text: String,
        #[source]
        source: chrono::format::ParseError,
    },

    #[error("webdriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),
}
