//! WebDriver-backed implementation of the browser capability traits.
//!
//! Talks to a geckodriver (or Selenium grid) endpoint via `thirtyfour`.
//! The session applies explicit page-load and implicit-wait timeouts from
//! config at connect time, and [`DriverSession::quit`] is infallible on the
//! caller's side so release always happens, success or error.

use std::time::Duration;

use thirtyfour::error::WebDriverError;
use thirtyfour::{By, DesiredCapabilities, WebDriver, WebElement};

use ctdocket_core::AppConfig;

use crate::browser::{BrowserSession, Locator, PageElement};
use crate::error::ScrapeError;

/// An exclusive browser session against the court portal.
pub struct DriverSession {
    driver: WebDriver,
}

impl DriverSession {
    /// Connects to the configured WebDriver endpoint and applies timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::WebDriver`] when the endpoint is unreachable
    /// or rejects the session.
    pub async fn connect(config: &AppConfig) -> Result<Self, ScrapeError> {
        let mut caps = DesiredCapabilities::firefox();
        if config.headless {
            caps.set_headless()?;
        }
        let driver = WebDriver::new(&config.webdriver_url, caps).await?;
        driver
            .set_page_load_timeout(Duration::from_secs(config.page_load_timeout_secs))
            .await?;
        driver
            .set_implicit_wait_timeout(Duration::from_secs(config.implicit_wait_secs))
            .await?;
        tracing::debug!(webdriver_url = %config.webdriver_url, "webdriver session established");
        Ok(DriverSession { driver })
    }

    /// Ends the session and closes the browser. A failed quit is logged,
    /// never propagated, so the scrape result reaches the caller intact.
    pub async fn quit(self) {
        if let Err(error) = self.driver.quit().await {
            tracing::warn!(error = %error, "failed to quit webdriver session");
        }
    }
}

fn to_by(locator: &Locator) -> By {
    match locator {
        Locator::Id(id) => By::Id(id.as_str()),
        Locator::Css(css) => By::Css(css.as_str()),
        Locator::Tag(tag) => By::Tag(tag.as_str()),
    }
}

/// Maps "not found" onto the scraper's structural error; everything else
/// stays a transport error.
fn find_error(locator: &Locator, error: WebDriverError) -> ScrapeError {
    match error {
        WebDriverError::NoSuchElement(_) => ScrapeError::MissingElement {
            locator: locator.to_string(),
        },
        other => ScrapeError::WebDriver(other),
    }
}

impl BrowserSession for DriverSession {
    type Element = WebElement;

    async fn goto(&self, url: &str) -> Result<(), ScrapeError> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn find(&self, locator: &Locator) -> Result<WebElement, ScrapeError> {
        self.driver
            .find(to_by(locator))
            .await
            .map_err(|e| find_error(locator, e))
    }

    async fn find_all(&self, locator: &Locator) -> Result<Vec<WebElement>, ScrapeError> {
        Ok(self.driver.find_all(to_by(locator)).await?)
    }
}

impl PageElement for WebElement {
    async fn find(&self, locator: &Locator) -> Result<WebElement, ScrapeError> {
        WebElement::find(self, to_by(locator))
            .await
            .map_err(|e| find_error(locator, e))
    }

    async fn find_all(&self, locator: &Locator) -> Result<Vec<WebElement>, ScrapeError> {
        Ok(WebElement::find_all(self, to_by(locator)).await?)
    }

    async fn text(&self) -> Result<String, ScrapeError> {
        Ok(WebElement::text(self).await?)
    }

    async fn attr(&self, name: &str) -> Result<Option<String>, ScrapeError> {
        Ok(WebElement::attr(self, name).await?)
    }

    async fn inner_html(&self) -> Result<String, ScrapeError> {
        Ok(WebElement::inner_html(self).await?)
    }

    async fn click(&self) -> Result<(), ScrapeError> {
        Ok(WebElement::click(self).await?)
    }

    async fn send_keys(&self, keys: &str) -> Result<(), ScrapeError> {
        Ok(WebElement::send_keys(self, keys).await?)
    }

    async fn clear(&self) -> Result<(), ScrapeError> {
        Ok(WebElement::clear(self).await?)
    }
}
