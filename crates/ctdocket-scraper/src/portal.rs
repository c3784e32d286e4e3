//! Element ids and URL paths for the Connecticut civil inquiry portal.
//!
//! Everything here is coupled to one court's markup. The grid ids, row
//! classes, and label suffixes below come straight from the rendered ASP.NET
//! pages; if the portal is re-themed, this module is where the breakage
//! lands.

/// Path of the date-search form, relative to the configured base URL.
pub const SEARCH_PATH: &str = "/CourtEventsSearchByDate.aspx";

/// Path of the per-case detail page. The docket number goes in the
/// `DocketNo` query parameter; this is the only URL the scraper constructs
/// itself.
pub const DETAIL_PATH: &str = "/LoadDocket.aspx";

/// Date format the portal renders and accepts (month/day/year).
pub const DATE_FMT: &str = "%m/%d/%Y";

// -- search form ------------------------------------------------------------

pub const DATE_FIELD: &str = "ctl00_ContentPlaceHolder1_txtDate";
pub const SUBMIT_BUTTON: &str = "ctl00_ContentPlaceHolder1_btnSubmit";

/// Case-category dropdown. Civil is the portal's default selection, so only
/// family queries touch it.
pub const CATEGORY_DROPDOWN: &str = "ctl00_ContentPlaceHolder1_ddlCaseCategory";

/// The `Family` option inside [`CATEGORY_DROPDOWN`].
pub const FAMILY_OPTION: &str = "option[value='FA']";

// -- results grid -----------------------------------------------------------

pub const RESULTS_TABLE: &str = "ctl00_ContentPlaceHolder1_gvCourtEventsResults";

/// Shown instead of the results grid when the day has no court events.
pub const NO_EVENTS_LABEL: &str = "ctl00_ContentPlaceHolder1_lblNoEvents";

/// Result-row classes. The striping is purely visual; both carry case links.
pub const ROW_CLASSES: [&str; 2] = ["tr.grdRow", "tr.grdRowAlt"];

/// Row hosting the pager strip (a nested table of page-number cells).
pub const PAGER_ROW: &str = "tr.grdBorder";

// -- detail page ------------------------------------------------------------

pub const CASE_TYPE_LABEL: &str = "ctl00_ContentPlaceHolder1_lblCaseType";
pub const FILE_DATE_LABEL: &str = "ctl00_ContentPlaceHolder1_lblFileDate";
pub const LOCATION_LABEL: &str = "ctl00_ContentPlaceHolder1_lblCourtLocation";
pub const PARTIES_TABLE: &str = "ctl00_ContentPlaceHolder1_gvParties";

/// Id suffixes of the labels inside each parties-table row. The prefix is an
/// autogenerated container path (`..._gvParties_ctl02_`) that varies per row;
/// classification goes by suffix only.
pub const PARTY_NO_SUFFIX: &str = "lblPartyNo";
pub const PARTY_NAME_SUFFIX: &str = "lblPartyName";
pub const ATTORNEY_SUFFIX: &str = "lblAttorneyInfo";

/// Builds the search-form URL for the configured portal root.
#[must_use]
pub fn search_url(base_url: &str) -> String {
    format!("{}{SEARCH_PATH}", base_url.trim_end_matches('/'))
}
