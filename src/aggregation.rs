//! Aggregation module for summarizing interval records
//!
//! This module groups row records along calendar dimensions and keeps a
//! running sum and count per bucket:
//!
//! - month × weekday ([`Aggregator::by_month_weekday`])
//! - weekday × hour of day ([`Aggregator::by_weekday_hour`])
//! - calendar day ([`Aggregator::by_day`])
//!
//! Every pass is a pure function of the record slice, the date range, the
//! metric and the diagnostic sink. Results are rebuilt on each call.
//!
//! # Sufficiency checks
//!
//! Averages over a month or a weekday are only meaningful when each bucket
//! saw a full month of samples. After the month × weekday and weekday × hour
//! passes every bucket is checked against a minimum count and each short
//! bucket is reported through the [`DiagnosticSink`]. The results are
//! returned regardless.
//!
//! # Examples
//!
//! ```
//! use kwhstat::aggregation::Aggregator;
//! use kwhstat::diagnostics::{DiagnosticSink, SilentSink};
//! use kwhstat::filters::DateRange;
//! use kwhstat::types::{Metric, RowRecord};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 11, 3).unwrap();
//! let records = vec![
//!     RowRecord::new(date, "0:00", 0.5, 0.2),
//!     RowRecord::new(date, "1:00", 0.7, 0.3),
//! ];
//!
//! let aggregator = Aggregator::new(DateRange::new()).with_metric(Metric::Cost);
//! let mut sink = SilentSink::new();
//! let usage = aggregator.by_month_weekday(&records, &mut sink);
//!
//! let friday = usage.get("23 Nov", "Fri").unwrap();
//! assert_eq!(friday.count, 2);
//! assert!(sink.last_message().is_some()); // two rows are far from a full month
//! ```

use crate::diagnostics::{DiagnosticSink, InsufficientData};
use crate::filters::DateRange;
use crate::types::{Metric, RowRecord};
use kwhstat_core::aggregation_types::{
    Accumulator, DailyTotal, DailyUsage, MonthWeekdayUsage, WeekdayHourUsage,
};
use kwhstat_core::weekday::{month_label, present_weekdays, weekday_abbrev};
use std::collections::BTreeSet;
use tracing::debug;

/// Hourly intervals in a day
pub const HOURS_PER_DAY: u64 = 24;

/// Minimum rows per (month, weekday) bucket
///
/// A month holds at least four of every weekday, each with 24 hourly rows.
/// Three rows of slack absorb daylight-saving days and small gaps.
pub const MONTH_WEEKDAY_MIN_COUNT: u64 = HOURS_PER_DAY * 4 - 3;

/// Minimum rows per (weekday, hour) bucket: one month of that weekday
pub const WEEKDAY_HOUR_MIN_COUNT: u64 = 4;

/// Main aggregation engine
#[derive(Debug, Clone)]
pub struct Aggregator {
    range: DateRange,
    metric: Metric,
}

impl Aggregator {
    /// Create an aggregator over `range` summing usage
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            metric: Metric::default(),
        }
    }

    /// Select the field that drives the sums
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    fn in_range<'a>(&'a self, records: &'a [RowRecord]) -> impl Iterator<Item = &'a RowRecord> {
        records.iter().filter(|r| self.range.contains(&r.date))
    }

    /// Group by month label and weekday
    pub fn by_month_weekday(
        &self,
        records: &[RowRecord],
        sink: &mut dyn DiagnosticSink,
    ) -> MonthWeekdayUsage {
        let mut usage = MonthWeekdayUsage::default();

        for record in self.in_range(records) {
            usage
                .months
                .entry(month_label(&record.date))
                .or_default()
                .entry(weekday_abbrev(&record.date).to_string())
                .or_default()
                .add(self.metric.value(record));
        }

        debug!(
            "Grouped {} {} rows into {} months",
            usage.total_count(),
            self.metric,
            usage.months.len()
        );

        for (month, weekdays) in &usage.months {
            for weekday in present_weekdays(weekdays) {
                let observed = weekdays[weekday].count;
                if observed < MONTH_WEEKDAY_MIN_COUNT {
                    let diagnostic = InsufficientData::MonthWeekday {
                        month,
                        weekday,
                        observed,
                        expected: MONTH_WEEKDAY_MIN_COUNT,
                    };
                    sink.warn(&diagnostic.to_string());
                }
            }
        }

        usage
    }

    /// Group by weekday and zero-padded interval start hour
    pub fn by_weekday_hour(
        &self,
        records: &[RowRecord],
        sink: &mut dyn DiagnosticSink,
    ) -> WeekdayHourUsage {
        let mut usage = WeekdayHourUsage::default();
        let mut hours = BTreeSet::new();

        for record in self.in_range(records) {
            let hour = record.hour_key();
            usage
                .weekdays
                .entry(weekday_abbrev(&record.date).to_string())
                .or_default()
                .entry(hour.clone())
                .or_default()
                .add(self.metric.value(record));
            hours.insert(hour);
        }
        usage.hours = hours.into_iter().collect();

        debug!(
            "Grouped {} {} rows into {} weekdays x {} hours",
            usage.total_count(),
            self.metric,
            usage.weekdays.len(),
            usage.hours.len()
        );

        for weekday in usage.present_weekdays() {
            for bucket in usage.weekdays[weekday].values() {
                if bucket.count < WEEKDAY_HOUR_MIN_COUNT {
                    sink.warn(&InsufficientData::WeekdayHour { weekday }.to_string());
                }
            }
        }

        usage
    }

    /// Total the metric per calendar day
    pub fn by_day(&self, records: &[RowRecord]) -> DailyUsage {
        let mut usage = DailyUsage::default();

        for record in self.in_range(records) {
            usage
                .days
                .entry(record.date)
                .or_insert_with(|| DailyTotal {
                    date_label: record.date_label.clone(),
                    total: 0.0,
                })
                .total += self.metric.value(record);
        }

        debug!("Totalled {} over {} days", self.metric, usage.days.len());
        usage
    }
}

/// Daily average of a (month, weekday) bucket of hourly rows
///
/// Returns `None` for an empty bucket.
pub fn daily_average(bucket: &Accumulator) -> Option<f64> {
    bucket.mean().map(|hourly| hourly * HOURS_PER_DAY as f64)
}
