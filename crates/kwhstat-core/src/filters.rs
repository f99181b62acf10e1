//! Date range filtering for interval records
//!
//! A [`DateRange`] is an inclusive start/end window over calendar dates. Each
//! bound remembers how it was supplied so chart titles can show either the
//! literal date or "Not Set".
//!
//! # Examples
//!
//! ```
//! use kwhstat_core::filters::DateRange;
//! use chrono::NaiveDate;
//!
//! let range = DateRange::from_cli(Some("2023-11-01"), Some("2023-11-30")).unwrap();
//! assert!(range.contains(&NaiveDate::from_ymd_opt(2023, 11, 30).unwrap()));
//! assert!(!range.contains(&NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()));
//! assert_eq!(range.start_label(), "Start Date: 2023-11-01");
//! ```

use crate::error::{KwhstatError, Result};
use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

const NOT_SET: &str = "Not Set";

/// Inclusive calendar window used to select records
///
/// `start <= end` is not enforced: a swapped range is valid and admits
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First admitted date
    pub start: NaiveDate,
    /// Last admitted date
    pub end: NaiveDate,
    start_text: String,
    end_text: String,
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new()
    }
}

impl DateRange {
    /// Range with both bounds unset
    ///
    /// The start falls back to 1960-01-01 and the end to one year from today.
    pub fn new() -> Self {
        let start = NaiveDate::from_ymd_opt(1960, 1, 1).unwrap_or(NaiveDate::MIN);
        let today = Local::now().date_naive();
        let end = today.checked_add_days(Days::new(365)).unwrap_or(NaiveDate::MAX);

        Self {
            start,
            end,
            start_text: NOT_SET.to_string(),
            end_text: NOT_SET.to_string(),
        }
    }

    /// Set the start bound
    pub fn with_start(mut self, date: NaiveDate) -> Self {
        self.start = date;
        self.start_text = date.format("%Y-%m-%d").to_string();
        self
    }

    /// Set the end bound
    pub fn with_end(mut self, date: NaiveDate) -> Self {
        self.end = date;
        self.end_text = date.format("%Y-%m-%d").to_string();
        self
    }

    /// Build a range from optional `YYYY-MM-DD` strings
    ///
    /// Malformed strings are rejected rather than treated as unset.
    pub fn from_cli(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let mut range = Self::new();

        if let Some(text) = start {
            range.start = parse_date(text)?;
            range.start_text = text.to_string();
        }
        if let Some(text) = end {
            range.end = parse_date(text)?;
            range.end_text = text.to_string();
        }

        Ok(range)
    }

    /// Check whether a date falls inside the window (both ends inclusive)
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Display label for the start bound
    pub fn start_label(&self) -> String {
        format!("Start Date: {}", self.start_text)
    }

    /// Display label for the end bound
    pub fn end_label(&self) -> String {
        format!("End Date: {}", self.end_text)
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
        KwhstatError::InvalidDate(format!("'{text}', expected YYYY-MM-DD"))
    })
}
