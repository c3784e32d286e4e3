//! Docket-number collection across all result pages.
//!
//! Walks the results grid page by page, harvesting the docket number from
//! every case row, until the pagination walker reports no next page. The
//! accumulator is an ordered set: duplicates across pages collapse, and
//! iteration order is stable for the caller.

use std::collections::BTreeSet;

use crate::browser::{BrowserSession, Locator, PageElement};
use crate::error::ScrapeError;
use crate::pagination;
use crate::portal;

/// Collects the unique docket numbers of every case in the current result
/// set, across all pages.
///
/// Must be called with a results grid on screen (the caller has already
/// ruled out the no-events page).
///
/// # Errors
///
/// A missing results grid or a case row without its docket link is a
/// structural failure for the whole collection call; there is no
/// partial-page recovery.
pub async fn collect_docket_ids<S: BrowserSession>(
    session: &S,
) -> Result<BTreeSet<String>, ScrapeError> {
    let mut ids = BTreeSet::new();
    let mut current_page = 1u32;

    loop {
        scan_result_rows(session, &mut ids).await?;

        let cells = pagination::pager_cells(session).await?;
        let Some(control) = pagination::next_page_control(cells, current_page).await? else {
            break;
        };
        control.click().await?;
        current_page += 1;
        tracing::debug!(current_page, collected = ids.len(), "advanced to next results page");
    }

    Ok(ids)
}

/// Harvests docket numbers from the result rows of the page on screen.
///
/// The grid stripes rows across two classes; both are scanned, and the first
/// link in each row carries the docket number as its text.
async fn scan_result_rows<S: BrowserSession>(
    session: &S,
    ids: &mut BTreeSet<String>,
) -> Result<(), ScrapeError> {
    let grid = session.find(&Locator::id(portal::RESULTS_TABLE)).await?;

    for row_class in portal::ROW_CLASSES {
        for row in grid.find_all(&Locator::css(row_class)).await? {
            let Some(link) = row
                .find_all(&Locator::tag("a"))
                .await?
                .into_iter()
                .next()
            else {
                return Err(ScrapeError::MissingElement {
                    locator: format!("a inside {row_class}"),
                });
            };
            let text = link.text().await?;
            let docket_no = text.trim();
            if !docket_no.is_empty() {
                ids.insert(docket_no.to_string());
            }
        }
    }
    Ok(())
}
