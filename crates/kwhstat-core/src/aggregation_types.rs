//! Aggregation data types for kwhstat
//!
//! Pure data structures produced by the aggregation engine. These types have
//! no dependencies on the record loader.

use crate::weekday::present_weekdays;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Running sum and count for one bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Accumulator {
    /// Sum of the metric over contributing rows
    pub sum: f64,
    /// Number of contributing rows
    pub count: u64,
}

impl Accumulator {
    /// Add one row's metric value
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// `sum / count`, or `None` for a bucket that was never visited
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Month × weekday grouping
///
/// Months keep the order in which they were first encountered in the input.
/// Weekdays should be read back through [`MonthWeekdayUsage::weekdays`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthWeekdayUsage {
    /// month label ("23 Nov") -> weekday ("Fri") -> bucket
    pub months: IndexMap<String, IndexMap<String, Accumulator>>,
}

impl MonthWeekdayUsage {
    pub fn get(&self, month: &str, weekday: &str) -> Option<&Accumulator> {
        self.months.get(month).and_then(|days| days.get(weekday))
    }

    /// Month labels in first-seen order
    pub fn month_labels(&self) -> impl Iterator<Item = &str> {
        self.months.keys().map(String::as_str)
    }

    /// Weekdays present in `month`, Monday first
    pub fn weekdays(&self, month: &str) -> Vec<&'static str> {
        self.months
            .get(month)
            .map(present_weekdays)
            .unwrap_or_default()
    }

    /// Rows that contributed to any bucket
    pub fn total_count(&self) -> u64 {
        self.months
            .values()
            .flat_map(|days| days.values())
            .map(|acc| acc.count)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Weekday × hour-of-day grouping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekdayHourUsage {
    /// weekday ("Sat") -> hour key ("00:00") -> bucket
    pub weekdays: IndexMap<String, BTreeMap<String, Accumulator>>,
    /// Every hour key seen in range, sorted ascending
    pub hours: Vec<String>,
}

impl WeekdayHourUsage {
    pub fn get(&self, weekday: &str, hour: &str) -> Option<&Accumulator> {
        self.weekdays.get(weekday).and_then(|hours| hours.get(hour))
    }

    /// Weekdays present in the grouping, Monday first
    pub fn present_weekdays(&self) -> Vec<&'static str> {
        present_weekdays(&self.weekdays)
    }

    pub fn total_count(&self) -> u64 {
        self.weekdays
            .values()
            .flat_map(|hours| hours.values())
            .map(|acc| acc.count)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.weekdays.is_empty()
    }
}

/// Metric total for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// Date string as it appeared in the source
    pub date_label: String,
    /// Sum of the metric over the day's rows
    pub total: f64,
}

/// Per-day grouping, ordered by date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyUsage {
    pub days: BTreeMap<NaiveDate, DailyTotal>,
}

impl DailyUsage {
    pub fn get(&self, date: &NaiveDate) -> Option<&DailyTotal> {
        self.days.get(date)
    }

    /// Sum of every day's total
    pub fn grand_total(&self) -> f64 {
        self.days.values().map(|day| day.total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulator() {
        let mut acc = Accumulator::default();
        assert_eq!(acc.mean(), None);

        acc.add(1.5);
        acc.add(2.5);
        assert_eq!(acc.count, 2);
        assert_eq!(acc.sum, 4.0);
        assert_eq!(acc.mean(), Some(2.0));
    }

    #[test]
    fn test_month_weekday_reads_canonical_order() {
        let mut usage = MonthWeekdayUsage::default();
        let month = usage.months.entry("23 Nov".to_string()).or_default();
        for day in ["Sun", "Wed", "Mon"] {
            month.entry(day.to_string()).or_default().add(1.0);
        }

        assert_eq!(usage.weekdays("23 Nov"), vec!["Mon", "Wed", "Sun"]);
        assert!(usage.weekdays("23 Dec").is_empty());
        assert_eq!(usage.total_count(), 3);
        assert_eq!(usage.get("23 Nov", "Wed").map(|acc| acc.count), Some(1));
        assert!(usage.get("23 Nov", "Fri").is_none());
    }

    #[test]
    fn test_daily_grand_total() {
        let mut usage = DailyUsage::default();
        for (day, total) in [(2, 3.0), (1, 1.5)] {
            let date = NaiveDate::from_ymd_opt(2023, 11, day).unwrap();
            usage.days.insert(
                date,
                DailyTotal {
                    date_label: date.to_string(),
                    total,
                },
            );
        }

        assert_eq!(usage.grand_total(), 4.5);
        let first = usage.days.keys().next().unwrap();
        assert_eq!(*first, NaiveDate::from_ymd_opt(2023, 11, 1).unwrap());
    }
}
