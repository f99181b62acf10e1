//! Data-sufficiency diagnostics
//!
//! Aggregation passes report under-sampled buckets through a
//! [`DiagnosticSink`]. The sink decides whether a warning reaches the
//! operator; aggregation never fails because of one.
//!
//! Three sinks are provided:
//! - [`ReportingSink`] prints each warning to stdout and keeps the last one
//! - [`SilentSink`] keeps the last warning without printing it
//! - [`CollectingSink`] keeps every warning in order
//!
//! # Examples
//!
//! ```
//! use kwhstat_core::diagnostics::{DiagnosticSink, InsufficientData, SilentSink};
//!
//! let mut sink = SilentSink::new();
//! sink.warn(&InsufficientData::WeekdayHour { weekday: "Fri" }.to_string());
//! assert!(sink.last_message().unwrap().contains("Fri"));
//! ```

use colored::Colorize;
use std::fmt;
use tracing::debug;

/// Receiver for advisory warnings raised during aggregation
pub trait DiagnosticSink {
    /// Record a warning
    fn warn(&mut self, message: &str);

    /// The most recent warning, if any was raised
    fn last_message(&self) -> Option<&str>;
}

/// Prints warnings to standard output
#[derive(Debug, Default)]
pub struct ReportingSink {
    last: Option<String>,
}

impl ReportingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for ReportingSink {
    fn warn(&mut self, message: &str) {
        debug!(target: "kwhstat::diagnostics", "{message}");
        println!("{} {}", "WARNING:".yellow().bold(), message);
        self.last = Some(message.to_string());
    }

    fn last_message(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

/// Records warnings without surfacing them
#[derive(Debug, Default)]
pub struct SilentSink {
    last: Option<String>,
}

impl SilentSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for SilentSink {
    fn warn(&mut self, message: &str) {
        debug!(target: "kwhstat::diagnostics", "{message}");
        self.last = Some(message.to_string());
    }

    fn last_message(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

/// Accumulates every warning of a pass
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: Vec<String>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All warnings in the order they were raised
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn warn(&mut self, message: &str) {
        debug!(target: "kwhstat::diagnostics", "{message}");
        self.messages.push(message.to_string());
    }

    fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

/// An under-sampled bucket found by a sufficiency check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsufficientData<'a> {
    /// A (month, weekday) bucket with fewer rows than a full month yields
    MonthWeekday {
        month: &'a str,
        weekday: &'a str,
        observed: u64,
        expected: u64,
    },
    /// A (weekday, hour) bucket seen fewer times than once a week for a month
    ///
    /// Only the weekday is reported.
    WeekdayHour { weekday: &'a str },
}

impl fmt::Display for InsufficientData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonthWeekday {
                month,
                weekday,
                observed,
                expected,
            } => write!(
                f,
                "Edge case for {month}: possibly not enough data for ({weekday}, {observed}). \
                 Expected {expected}. Consider pruning the month using --start-date or --end-date"
            ),
            Self::WeekdayHour { weekday } => write!(
                f,
                "Edge case for {weekday}: we should have at least one month of data for each weekday. \
                 Consider adjusting the range using --start-date or --end-date"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_sink_keeps_last_message() {
        let mut sink = SilentSink::new();
        assert!(sink.last_message().is_none());

        sink.warn("first");
        sink.warn("second");
        assert_eq!(sink.last_message(), Some("second"));
    }

    #[test]
    fn test_reporting_sink_keeps_last_message() {
        colored::control::set_override(false);
        let mut sink = ReportingSink::new();
        sink.warn("printed");
        assert_eq!(sink.last_message(), Some("printed"));
    }

    #[test]
    fn test_collecting_sink_keeps_all() {
        let mut sink = CollectingSink::new();
        assert!(sink.is_empty());

        sink.warn("a");
        sink.warn("b");
        assert_eq!(sink.messages(), ["a".to_string(), "b".to_string()]);
        assert_eq!(sink.last_message(), Some("b"));
    }

    #[test]
    fn test_month_weekday_message() {
        let message = InsufficientData::MonthWeekday {
            month: "23 Nov",
            weekday: "Wed",
            observed: 24,
            expected: 93,
        }
        .to_string();

        assert_eq!(
            message,
            "Edge case for 23 Nov: possibly not enough data for (Wed, 24). Expected 93. \
             Consider pruning the month using --start-date or --end-date"
        );
    }

    #[test]
    fn test_weekday_hour_message_names_weekday_only() {
        let message = InsufficientData::WeekdayHour { weekday: "Fri" }.to_string();
        assert!(message.starts_with("Edge case for Fri:"));
        assert!(!message.contains("00:00"));
    }
}
