//! Date-search form submission.
//!
//! The portal only answers for today or future dates, so validation happens
//! before any element is touched. Submission itself is all side effect:
//! clear and fill the date field, pick the category when it isn't the
//! default, click submit, and let the postback replace the page.

use chrono::NaiveDate;

use ctdocket_core::CaseCategory;

use crate::browser::{BrowserSession, Locator, PageElement};
use crate::error::ScrapeError;
use crate::portal;

/// Rejects dates the portal cannot answer for.
///
/// `today` is threaded in rather than read from the clock so the policy is
/// testable on any day.
///
/// # Errors
///
/// Returns [`ScrapeError::PastQueryDate`] when `date` is before `today`.
pub fn validate_query_date(date: NaiveDate, today: NaiveDate) -> Result<(), ScrapeError> {
    if date < today {
        return Err(ScrapeError::PastQueryDate { date });
    }
    Ok(())
}

/// Fills and submits the date-search form on the currently loaded search
/// page.
///
/// Success is implicit in subsequent page state: after the postback the
/// session shows either the results grid or the no-events indicator.
///
/// # Errors
///
/// - [`ScrapeError::PastQueryDate`] — `date` is before `today`; nothing is
///   touched in the browser.
/// - [`ScrapeError::MissingElement`] — the form markup changed underneath us.
pub async fn submit_date_query<S: BrowserSession>(
    session: &S,
    date: NaiveDate,
    category: CaseCategory,
    today: NaiveDate,
) -> Result<(), ScrapeError> {
    validate_query_date(date, today)?;

    tracing::debug!(%date, %category, "submitting date query");

    let date_field = session.find(&Locator::id(portal::DATE_FIELD)).await?;
    date_field.clear().await?;
    date_field
        .send_keys(&date.format(portal::DATE_FMT).to_string())
        .await?;

    // Civil is the dropdown's default; only family queries change it.
    if category == CaseCategory::Family {
        let dropdown = session
            .find(&Locator::id(portal::CATEGORY_DROPDOWN))
            .await?;
        dropdown
            .find(&Locator::css(portal::FAMILY_OPTION))
            .await?
            .click()
            .await?;
    }

    session
        .find(&Locator::id(portal::SUBMIT_BUTTON))
        .await?
        .click()
        .await?;
    Ok(())
}
