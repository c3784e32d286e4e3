pub mod browser;
pub mod collect;
pub mod detail;
pub mod docket;
pub mod error;
pub mod fragment;
pub mod pagination;
pub mod portal;
pub mod query;
pub mod webdriver;

pub use browser::{BrowserSession, Locator, PageElement};
pub use collect::{collect_cases, get_court_cases, scrape_day, scrape_range};
pub use error::ScrapeError;
pub use webdriver::DriverSession;
