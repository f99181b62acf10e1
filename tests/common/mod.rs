//! Common test utilities and helpers for kwhstat tests
//!
//! This module provides a row builder, synthetic month generators and
//! helpers for loading the bundled PG&E fixture.

#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use kwhstat::types::RowRecord;
use kwhstat_provider_pge::{DataLoader, LoadedRecords};
use once_cell::sync::Lazy;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Preamble a PG&E export carries above the CSV header
pub const PREAMBLE: &str = "Name,JANE DOE
Address,\"123 MAIN ST, SAN FRANCISCO CA 94110\"
Account Number,1234567890
Service,Service 1


";

pub const HEADER: &str = "TYPE,DATE,START TIME,END TIME,USAGE (kWh),COST,NOTES";

/// November 2023 export, loaded once per test binary
pub static NOVEMBER_2023: Lazy<LoadedRecords> = Lazy::new(|| {
    DataLoader::new(fixture_path("pge_electric_usage_2023_11.csv"))
        .load()
        .expect("fixture should load")
});

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Builder for creating test RowRecord instances
pub struct RowRecordBuilder {
    date: NaiveDate,
    hour: u32,
    usage_kwh: f64,
    cost: f64,
}

impl RowRecordBuilder {
    pub fn new() -> Self {
        Self {
            date: date(2023, 11, 1),
            hour: 0,
            usage_kwh: 0.5,
            cost: 0.17,
        }
    }

    pub fn with_date(mut self, y: i32, m: u32, d: u32) -> Self {
        self.date = date(y, m, d);
        self
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_hour(mut self, hour: u32) -> Self {
        self.hour = hour;
        self
    }

    pub fn with_usage(mut self, usage_kwh: f64) -> Self {
        self.usage_kwh = usage_kwh;
        self
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn build(self) -> RowRecord {
        RowRecord::new(self.date, format!("{}:00", self.hour), self.usage_kwh, self.cost)
    }
}

impl Default for RowRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Twenty-four hourly rows for each day from `start` for `days` days
pub fn hourly_rows(start: NaiveDate, days: u64) -> Vec<RowRecord> {
    let mut rows = Vec::with_capacity(days as usize * 24);
    for offset in 0..days {
        let day = start + Days::new(offset);
        for hour in 0..24 {
            rows.push(
                RowRecordBuilder::new()
                    .on(day)
                    .with_hour(hour)
                    .with_usage(0.25 + hour as f64 * 0.05)
                    .with_cost(0.10 + hour as f64 * 0.02)
                    .build(),
            );
        }
    }
    rows
}

/// Write a PG&E-style export with the standard preamble to a temp file
pub fn write_export(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{PREAMBLE}{HEADER}").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file.flush().unwrap();
    file
}

/// Round to cents for comparing sums of exported values
pub fn cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
