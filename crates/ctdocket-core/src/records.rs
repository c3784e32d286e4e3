//! Domain types for collected court-case data.
//!
//! A [`CaseRecord`] is an immutable snapshot of one docket as scraped from the
//! portal's detail page. Records are built once per collection run, held in
//! memory, and handed to the caller; nothing here persists or mutates them.
//!
//! Every field except the docket number is optional: a record with only
//! `case_number` set is the degraded form emitted when detail extraction
//! failed for that docket, so callers always learn which identifiers were
//! seen.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Role a party plays in a case, derived from the single-letter code in the
/// portal's party-number cell (`P-01`, `D-02`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyRole {
    Plaintiff,
    Defendant,
    /// Any code letter other than `P` or `D` (intervenors, interested
    /// parties, committee appointments, ...).
    Other,
}

impl PartyRole {
    /// Maps a party-number code letter to a role. Unrecognized letters are
    /// [`PartyRole::Other`], never an error.
    #[must_use]
    pub fn from_code(code: char) -> Self {
        match code.to_ascii_uppercase() {
            'P' => PartyRole::Plaintiff,
            'D' => PartyRole::Defendant,
            _ => PartyRole::Other,
        }
    }
}

/// One party row from a case detail page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PartyInfo {
    pub role: PartyRole,
    /// Party name as displayed; `None` when the name cell was absent.
    pub name: Option<String>,
    /// First line of the attorney block, with the `Attorney:` prefix
    /// stripped. Later lines carry juris numbers and addresses and are not
    /// captured.
    pub attorney: Option<String>,
}

/// A single court case, keyed by docket number.
///
/// Ordering and hashing cover every field so that range collections can
/// union days into a set and collapse exact duplicates.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CaseRecord {
    /// Docket number. Always present; records are emitted even when the
    /// detail page could not be scraped.
    pub case_number: String,
    pub case_type: Option<String>,
    pub date_filed: Option<NaiveDate>,
    pub parties: Vec<PartyInfo>,
    pub court_location: Option<String>,
}

impl CaseRecord {
    /// The degraded record substituted when detail extraction fails: only the
    /// docket number is populated.
    #[must_use]
    pub fn placeholder(case_number: impl Into<String>) -> Self {
        CaseRecord {
            case_number: case_number.into(),
            case_type: None,
            date_filed: None,
            parties: Vec::new(),
            court_location: None,
        }
    }
}

/// Case category filter accepted by the portal's search form.
///
/// The portal offers more categories in its dropdown; only these two are
/// supported here, matching the search form's documented surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseCategory {
    #[default]
    Civil,
    Family,
}

impl FromStr for CaseCategory {
    type Err = CoreError;

    /// Parses a category string. Matching is case-insensitive and ignores
    /// surrounding whitespace; anything other than `civil` or `family` is
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "civil" => Ok(CaseCategory::Civil),
            "family" => Ok(CaseCategory::Family),
            other => Err(CoreError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for CaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseCategory::Civil => write!(f, "civil"),
            CaseCategory::Family => write!(f, "family"),
        }
    }
}

/// An inclusive span of calendar days for range collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds a validated range.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDateRange`] when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, CoreError> {
        if start > end {
            return Err(CoreError::InvalidDateRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Iterates every day in the range, both endpoints included.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}
