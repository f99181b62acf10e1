//! Canonical weekday ordering and calendar labels
//!
//! Aggregation results are keyed by three-letter weekday abbreviations.
//! Hash order is meaningless for plotting, so readers go through
//! [`present_weekdays`] to get the keys back Monday first.

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};

/// Weekday abbreviations in display order
pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Three-letter weekday abbreviation of a date
pub fn weekday_abbrev(date: &NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

/// Two-digit year and abbreviated month, e.g. "23 Nov"
pub fn month_label(date: &NaiveDate) -> String {
    date.format("%y %b").to_string()
}

/// A grouping whose keys may be weekday abbreviations
pub trait WeekdayKeyed {
    fn has_weekday(&self, weekday: &str) -> bool;
}

impl<V> WeekdayKeyed for IndexMap<String, V> {
    fn has_weekday(&self, weekday: &str) -> bool {
        self.contains_key(weekday)
    }
}

impl<V> WeekdayKeyed for BTreeMap<String, V> {
    fn has_weekday(&self, weekday: &str) -> bool {
        self.contains_key(weekday)
    }
}

impl<V> WeekdayKeyed for HashMap<String, V> {
    fn has_weekday(&self, weekday: &str) -> bool {
        self.contains_key(weekday)
    }
}

/// Weekdays present in `grouping`, in canonical order
///
/// Small date ranges can miss whole weekdays; series built from this list
/// stay aligned instead of leaving holes.
///
/// # Examples
/// ```
/// use kwhstat_core::weekday::present_weekdays;
/// use std::collections::HashMap;
///
/// let mut grouping = HashMap::new();
/// grouping.insert("Sun".to_string(), 1);
/// grouping.insert("Tue".to_string(), 2);
/// assert_eq!(present_weekdays(&grouping), vec!["Tue", "Sun"]);
/// ```
pub fn present_weekdays<G: WeekdayKeyed + ?Sized>(grouping: &G) -> Vec<&'static str> {
    WEEKDAYS
        .iter()
        .copied()
        .filter(|day| grouping.has_weekday(day))
        .collect()
}
