//! Core domain types for kwhstat
//!
//! This module contains the row record produced by a record loader and the
//! metric selector used by every aggregation pass.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One interval row of a utility billing export
///
/// Rows are immutable once loaded. Loaders only hand out rows with a non-zero
/// cost and a non-zero usage, so `calculated_rate` is always finite.
///
/// # Examples
/// ```
/// use kwhstat_core::types::RowRecord;
/// use chrono::NaiveDate;
///
/// let row = RowRecord::new(
///     NaiveDate::from_ymd_opt(2023, 11, 14).unwrap(),
///     "0:00",
///     0.50,
///     0.17,
/// );
/// assert_eq!(row.date_label, "2023-11-14");
/// assert!((row.calculated_rate - 0.34).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowRecord {
    /// Billing type column (e.g. "Electric usage")
    pub kind: String,
    /// Calendar date of the interval
    pub date: NaiveDate,
    /// Date exactly as it appeared in the source, kept for display
    pub date_label: String,
    /// Interval start time as exported ("0:00", "13:00", ...)
    pub start_time: String,
    /// Interval end time as exported
    pub end_time: String,
    /// Energy used in the interval
    pub usage_kwh: f64,
    /// Billed cost of the interval
    pub cost: f64,
    /// Free-form notes column
    pub notes: String,
    /// `cost / usage_kwh`
    pub calculated_rate: f64,
}

impl RowRecord {
    /// Build a record from the fields the aggregation engine reads.
    ///
    /// The remaining columns get PG&E-style defaults. Callers must not pass a
    /// zero `usage_kwh`; loaders filter those rows before construction.
    pub fn new(date: NaiveDate, start_time: impl Into<String>, usage_kwh: f64, cost: f64) -> Self {
        debug_assert!(usage_kwh != 0.0, "RowRecord::new called with zero usage");
        Self {
            kind: "Electric usage".to_string(),
            date,
            date_label: date.format("%Y-%m-%d").to_string(),
            start_time: start_time.into(),
            end_time: String::new(),
            usage_kwh,
            cost,
            notes: String::new(),
            calculated_rate: cost / usage_kwh,
        }
    }

    /// Interval start as a zero-padded "HH:MM" key
    pub fn hour_key(&self) -> String {
        format!("{:0>5}", self.start_time)
    }
}

/// Field selected to drive an aggregation sum
///
/// # Examples
/// ```
/// use kwhstat_core::types::Metric;
///
/// assert_eq!(Metric::default(), Metric::Usage);
/// assert_eq!(Metric::Cost.to_string(), "COST");
/// assert_eq!(Metric::CalculatedRate.to_string(), "CALCULATED RATE");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// USAGE (kWh) column
    #[default]
    Usage,
    /// COST column
    Cost,
    /// Derived cost per kWh
    CalculatedRate,
}

impl Metric {
    /// Read this metric's value from a row
    pub fn value(&self, record: &RowRecord) -> f64 {
        match self {
            Self::Usage => record.usage_kwh,
            Self::Cost => record.cost,
            Self::CalculatedRate => record.calculated_rate,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage => write!(f, "USAGE (kWh)"),
            Self::Cost => write!(f, "COST"),
            Self::CalculatedRate => write!(f, "CALCULATED RATE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> RowRecord {
        RowRecord::new(NaiveDate::from_ymd_opt(2023, 11, 3).unwrap(), "7:00", 0.8, 0.2)
    }

    #[test]
    fn test_hour_key_padding() {
        assert_eq!(sample().hour_key(), "07:00");

        let mut row = sample();
        row.start_time = "13:00".to_string();
        assert_eq!(row.hour_key(), "13:00");

        row.start_time = "0:00".to_string();
        assert_eq!(row.hour_key(), "00:00");
    }

    #[test]
    fn test_metric_value() {
        let row = sample();
        assert_eq!(Metric::Usage.value(&row), 0.8);
        assert_eq!(Metric::Cost.value(&row), 0.2);
        assert!((Metric::CalculatedRate.value(&row) - 0.25).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "zero usage")]
    #[cfg(debug_assertions)]
    fn test_zero_usage_is_rejected() {
        RowRecord::new(NaiveDate::from_ymd_opt(2023, 11, 3).unwrap(), "7:00", 0.0, 0.2);
    }

    proptest! {
        #[test]
        fn hour_keys_sort_like_hours(a in 0u32..24, b in 0u32..24) {
            let mut first = sample();
            first.start_time = format!("{a}:00");
            let mut second = sample();
            second.start_time = format!("{b}:00");

            prop_assert_eq!(first.hour_key().len(), 5);
            prop_assert_eq!(first.hour_key().cmp(&second.hour_key()), a.cmp(&b));
        }
    }
}
