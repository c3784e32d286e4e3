//! Collection orchestration: one day, or a span of days, into case records.
//!
//! The flow is strictly sequential: submit the query, gather docket
//! numbers, then fetch detail pages one at a time with a randomized
//! politeness delay in between. A failed detail fetch degrades to a
//! placeholder record; a failed query or a structurally broken results page
//! aborts the day's collection.

use std::collections::BTreeSet;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use rand::Rng;

use ctdocket_core::{AppConfig, CaseCategory, CaseRecord, DateRange};

use crate::browser::{BrowserSession, Locator};
use crate::detail;
use crate::docket;
use crate::error::ScrapeError;
use crate::portal;
use crate::query;
use crate::webdriver::DriverSession;

/// Collects every court case on the portal's calendar for one day.
///
/// Steps: load the search page, submit the date query, return immediately on
/// the no-events indicator, otherwise walk all result pages for docket
/// numbers and fetch each docket's detail page. A detail fetch that fails
/// yields a placeholder record carrying only the docket number, so the
/// batch never loses an identifier it has seen.
///
/// Records come back in the docket-id set's iteration order.
///
/// # Errors
///
/// - [`ScrapeError::PastQueryDate`] — `date` is before `today`.
/// - [`ScrapeError::MissingElement`] — the search form or results grid
///   markup changed; fatal for the day, nothing is returned.
pub async fn get_court_cases<S: BrowserSession>(
    session: &S,
    config: &AppConfig,
    date: NaiveDate,
    category: CaseCategory,
    today: NaiveDate,
) -> Result<Vec<CaseRecord>, ScrapeError> {
    query::validate_query_date(date, today)?;

    session.goto(&portal::search_url(&config.base_url)).await?;
    query::submit_date_query(session, date, category, today).await?;

    if no_events_shown(session).await? {
        tracing::debug!(%date, "portal reports no court events");
        return Ok(Vec::new());
    }

    let ids = docket::collect_docket_ids(session).await?;
    tracing::debug!(%date, count = ids.len(), "collected docket numbers");

    let mut records = Vec::with_capacity(ids.len());
    for (i, docket_no) in ids.iter().enumerate() {
        if i > 0 {
            politeness_delay(config.detail_delay_max_ms).await;
        }
        match detail::extract_case_detail(session, &config.base_url, docket_no).await {
            Ok(record) => records.push(record),
            Err(error) => {
                tracing::warn!(
                    docket_no = %docket_no,
                    error = %error,
                    "detail extraction failed; emitting placeholder record"
                );
                records.push(CaseRecord::placeholder(docket_no.clone()));
            }
        }
    }
    Ok(records)
}

/// Collects cases for every day in `range`, union-ed into a set.
///
/// Exact duplicates across days (a case listed on multiple calendars)
/// collapse through the record's full-field ordering.
///
/// # Errors
///
/// Propagates the first failing day; days already collected are discarded.
pub async fn collect_cases<S: BrowserSession>(
    session: &S,
    config: &AppConfig,
    range: DateRange,
    category: CaseCategory,
    today: NaiveDate,
) -> Result<BTreeSet<CaseRecord>, ScrapeError> {
    let mut cases = BTreeSet::new();
    for day in range.days() {
        cases.extend(get_court_cases(session, config, day, category, today).await?);
    }
    Ok(cases)
}

/// One-day collection that owns the browser session: connect, scrape, and
/// always quit, on success and on error alike.
///
/// # Errors
///
/// See [`get_court_cases`]; additionally any WebDriver connect failure.
pub async fn scrape_day(
    config: &AppConfig,
    date: NaiveDate,
    category: CaseCategory,
) -> Result<Vec<CaseRecord>, ScrapeError> {
    let today = Local::now().date_naive();
    let session = DriverSession::connect(config).await?;
    let result = get_court_cases(&session, config, date, category, today).await;
    session.quit().await;
    result
}

/// Range collection that owns the browser session. See [`collect_cases`].
///
/// # Errors
///
/// See [`collect_cases`]; additionally any WebDriver connect failure.
pub async fn scrape_range(
    config: &AppConfig,
    range: DateRange,
    category: CaseCategory,
) -> Result<BTreeSet<CaseRecord>, ScrapeError> {
    let today = Local::now().date_naive();
    let session = DriverSession::connect(config).await?;
    let result = collect_cases(&session, config, range, category, today).await;
    session.quit().await;
    result
}

/// True when the page shows the no-events indicator instead of the results
/// grid.
async fn no_events_shown<S: BrowserSession>(session: &S) -> Result<bool, ScrapeError> {
    let labels = session
        .find_all(&Locator::id(portal::NO_EVENTS_LABEL))
        .await?;
    Ok(!labels.is_empty())
}

/// Uniformly random pause between detail fetches, bounding request rate
/// against the portal.
async fn politeness_delay(max_ms: u64) {
    if max_ms == 0 {
        return;
    }
    let wait_ms = rand::rng().random_range(0..=max_ms);
    tokio::time::sleep(Duration::from_millis(wait_ms)).await;
}
