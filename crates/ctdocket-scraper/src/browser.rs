//! Capability traits over the browser automation layer.
//!
//! The scraping algorithms (query submission, pagination walking, docket
//! collection, detail extraction) are written against these traits rather
//! than against a WebDriver client directly, so the whole flow can be driven
//! by an in-memory fake in tests. The production implementation lives in
//! [`crate::webdriver`].
//!
//! No `Send` bounds anywhere: the collection flow is strictly sequential,
//! one remote interaction in flight at a time.

use std::fmt;

use crate::error::ScrapeError;

/// Element addressing understood by both the WebDriver backend and the test
/// fake. Only the selector forms the scraper actually uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Id(String),
    Css(String),
    Tag(String),
}

impl Locator {
    pub fn id(value: impl Into<String>) -> Self {
        Locator::Id(value.into())
    }

    pub fn css(value: impl Into<String>) -> Self {
        Locator::Css(value.into())
    }

    pub fn tag(value: impl Into<String>) -> Self {
        Locator::Tag(value.into())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(id) => write!(f, "#{id}"),
            Locator::Css(css) => write!(f, "{css}"),
            Locator::Tag(tag) => write!(f, "<{tag}>"),
        }
    }
}

/// A handle to one element on the current page.
///
/// `find`/`find_all` search this element's subtree only. `find` fails with
/// [`ScrapeError::MissingElement`] when nothing matches; `find_all` returns
/// an empty vec instead.
#[allow(async_fn_in_trait)]
pub trait PageElement: Sized {
    async fn find(&self, locator: &Locator) -> Result<Self, ScrapeError>;
    async fn find_all(&self, locator: &Locator) -> Result<Vec<Self>, ScrapeError>;

    /// Rendered text of the element including descendants, as the browser
    /// reports it.
    async fn text(&self) -> Result<String, ScrapeError>;

    /// Attribute value, `None` when the attribute is absent.
    async fn attr(&self, name: &str) -> Result<Option<String>, ScrapeError>;

    /// Serialized markup of the element's children. Used with
    /// [`crate::fragment::own_text`] to read only top-level text nodes.
    async fn inner_html(&self) -> Result<String, ScrapeError>;

    async fn click(&self) -> Result<(), ScrapeError>;
    async fn send_keys(&self, keys: &str) -> Result<(), ScrapeError>;
    async fn clear(&self) -> Result<(), ScrapeError>;
}

/// One live browser session pointed at the court portal.
#[allow(async_fn_in_trait)]
pub trait BrowserSession {
    type Element: PageElement;

    async fn goto(&self, url: &str) -> Result<(), ScrapeError>;
    async fn find(&self, locator: &Locator) -> Result<Self::Element, ScrapeError>;
    async fn find_all(&self, locator: &Locator) -> Result<Vec<Self::Element>, ScrapeError>;
}
