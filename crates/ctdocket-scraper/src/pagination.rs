//! Results-grid pagination via ASP.NET postback directives.
//!
//! The portal paginates server-side: each page-number cell in the pager strip
//! carries a link whose `href` is a postback directive naming the target
//! page. The cell for the page currently displayed renders as plain text,
//! and long result sets interleave ellipsis cells, so the next page is found
//! by an explicit page-number match, never by cell position.
//!
//! ## Directive format
//!
//! Numbered page link:
//! ```text
//! javascript:__doPostBack('ctl00$ContentPlaceHolder1$gvCourtEventsResults','Page$3')
//! ```
//!
//! Ellipsis cell (jumps ten pages; still a `Page$N` directive):
//! ```text
//! javascript:__doPostBack('ctl00$ContentPlaceHolder1$gvCourtEventsResults','Page$11')
//! ```

use crate::browser::{BrowserSession, Locator, PageElement};
use crate::error::ScrapeError;
use crate::portal;

/// Parses a postback directive and extracts the page number it targets.
///
/// Returns `None` if:
/// - the directive has no `Page$` argument (sort/select postbacks),
/// - no digits follow `Page$`.
#[must_use]
pub fn target_page_number(directive: &str) -> Option<u32> {
    let start = directive.find("Page$")? + "Page$".len();
    let digits: &str = directive[start..]
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or("");
    digits.parse().ok()
}

/// Reads the pager strip of the results grid: the `td` cells of the nested
/// table inside the grid's pager row.
///
/// Single-page result sets render no pager row at all; that comes back as an
/// empty vec, which the walker treats as "no further pages". A missing
/// results grid, by contrast, is a structural failure and propagates.
///
/// # Errors
///
/// Returns [`ScrapeError::MissingElement`] when the results grid itself is
/// absent.
pub async fn pager_cells<S: BrowserSession>(
    session: &S,
) -> Result<Vec<S::Element>, ScrapeError> {
    let grid = session.find(&Locator::id(portal::RESULTS_TABLE)).await?;
    let Some(pager_row) = grid
        .find_all(&Locator::css(portal::PAGER_ROW))
        .await?
        .into_iter()
        .next()
    else {
        return Ok(Vec::new());
    };
    let Some(strip) = pager_row
        .find_all(&Locator::tag("table"))
        .await?
        .into_iter()
        .next()
    else {
        return Ok(Vec::new());
    };
    strip.find_all(&Locator::tag("td")).await
}

/// Finds the control that advances from `current_page` (1-indexed) to the
/// following page, or `None` when `current_page` is the last one.
///
/// Cells without a link (the current page's plain-text cell) and links whose
/// directive encodes some other page (ellipsis jumps) are skipped, not
/// errors.
///
/// # Errors
///
/// Propagates browser failures from reading the cells.
pub async fn next_page_control<E: PageElement>(
    cells: Vec<E>,
    current_page: u32,
) -> Result<Option<E>, ScrapeError> {
    let wanted = current_page + 1;
    for cell in cells {
        let Some(link) = cell
            .find_all(&Locator::tag("a"))
            .await?
            .into_iter()
            .next()
        else {
            continue;
        };
        let Some(href) = link.attr("href").await? else {
            continue;
        };
        if target_page_number(&href) == Some(wanted) {
            return Ok(Some(link));
        }
    }
    Ok(None)
}
