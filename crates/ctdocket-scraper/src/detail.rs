//! Per-case detail-page extraction.
//!
//! Each docket has a deterministic detail URL (`LoadDocket.aspx?DocketNo=`),
//! the one place the scraper navigates by constructed URL instead of clicks.
//! The page yields the case type, filing date, court location, and the party
//! table. Field markup is uneven: the filing-date label nests extra elements
//! around the date text, and party rows identify their cells only through
//! autogenerated id suffixes.

use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;

use ctdocket_core::{CaseRecord, PartyInfo, PartyRole};

use crate::browser::{BrowserSession, Locator, PageElement};
use crate::error::ScrapeError;
use crate::fragment;
use crate::portal;

/// Query-value encoding for the docket number: space and the reserved query
/// delimiters. Docket numbers are plain `AAA-CC-NN-NNNNNNN-S` strings in
/// practice.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'?');

/// Builds the detail-page URL for a docket number.
#[must_use]
pub fn detail_url(base_url: &str, docket_no: &str) -> String {
    let encoded = utf8_percent_encode(docket_no, QUERY_VALUE);
    format!(
        "{}{}?DocketNo={encoded}",
        base_url.trim_end_matches('/'),
        portal::DETAIL_PATH
    )
}

/// Loads a docket's detail page and extracts it into a [`CaseRecord`].
///
/// # Errors
///
/// Any missing label, unparseable filing date, or browser failure is
/// returned as-is; the aggregation layer decides whether that degrades to a
/// placeholder record or aborts.
pub async fn extract_case_detail<S: BrowserSession>(
    session: &S,
    base_url: &str,
    docket_no: &str,
) -> Result<CaseRecord, ScrapeError> {
    session.goto(&detail_url(base_url, docket_no)).await?;

    let case_type = read_trimmed_label(session, portal::CASE_TYPE_LABEL).await?;
    let date_filed = read_filing_date(session).await?;
    let court_location = read_trimmed_label(session, portal::LOCATION_LABEL).await?;
    let parties = extract_parties(session).await?;

    Ok(CaseRecord {
        case_number: docket_no.to_string(),
        case_type: Some(case_type),
        date_filed: Some(date_filed),
        parties,
        court_location: Some(court_location),
    })
}

async fn read_trimmed_label<S: BrowserSession>(
    session: &S,
    label_id: &str,
) -> Result<String, ScrapeError> {
    let label = session.find(&Locator::id(label_id)).await?;
    Ok(label.text().await?.trim().to_string())
}

/// The filing-date label nests markup around the date, so only its top-level
/// text nodes are read before parsing.
async fn read_filing_date<S: BrowserSession>(session: &S) -> Result<NaiveDate, ScrapeError> {
    let label = session.find(&Locator::id(portal::FILE_DATE_LABEL)).await?;
    let inner = label.inner_html().await?;
    parse_filed_date(&inner)
}

/// Parses the filing date out of the date label's inner HTML.
///
/// # Errors
///
/// Returns [`ScrapeError::DateParse`] when the top-level text is not an
/// `%m/%d/%Y` date.
pub fn parse_filed_date(inner_html: &str) -> Result<NaiveDate, ScrapeError> {
    let text = fragment::own_text(inner_html);
    NaiveDate::parse_from_str(&text, portal::DATE_FMT)
        .map_err(|source| ScrapeError::DateParse { text, source })
}

/// Walks the parties table, one [`PartyInfo`] per non-header row.
async fn extract_parties<S: BrowserSession>(
    session: &S,
) -> Result<Vec<PartyInfo>, ScrapeError> {
    let table = session.find(&Locator::id(portal::PARTIES_TABLE)).await?;
    let rows = table.find_all(&Locator::tag("tr")).await?;

    let mut parties = Vec::new();
    for row in rows.iter().skip(1) {
        parties.push(party_from_row(row).await?);
    }
    Ok(parties)
}

/// Classifies a party row's labelled cells by their id suffix. The id prefix
/// is an autogenerated container path that varies per row and is ignored.
/// Cells that never appear leave their field `None`; a row with no
/// party-number cell defaults to [`PartyRole::Other`].
async fn party_from_row<E: PageElement>(row: &E) -> Result<PartyInfo, ScrapeError> {
    let mut role = PartyRole::Other;
    let mut name = None;
    let mut attorney = None;

    for cell in row.find_all(&Locator::css("[id]")).await? {
        let Some(id) = cell.attr("id").await? else {
            continue;
        };
        if id.ends_with(portal::PARTY_NO_SUFFIX) {
            if let Some(code) = parse_party_code(&cell.text().await?) {
                role = PartyRole::from_code(code);
            }
        } else if id.ends_with(portal::ATTORNEY_SUFFIX) {
            attorney = attorney_first_line(&cell.text().await?);
        } else if id.ends_with(portal::PARTY_NAME_SUFFIX) {
            let text = cell.text().await?;
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                name = Some(trimmed.to_string());
            }
        }
    }

    Ok(PartyInfo {
        role,
        name,
        attorney,
    })
}

/// Pulls the role letter out of a party-number cell (`P-01`, `D-02`, ...).
fn parse_party_code(text: &str) -> Option<char> {
    let re = Regex::new(r"^\s*([A-Za-z])-\d+").expect("valid regex");
    re.captures(text)?.get(1)?.as_str().chars().next()
}

/// First line of the attorney block with the `Attorney:` prefix stripped.
/// Later lines carry juris numbers and firm addresses and are dropped.
fn attorney_first_line(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let stripped = trimmed.strip_prefix("Attorney:").unwrap_or(trimmed).trim();
    let first = stripped.lines().next().map(str::trim).unwrap_or("");
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}
