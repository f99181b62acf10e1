//! PG&E data loader
//!
//! Parses the "Download my data" interval export from PG&E:
//!
//! ```text
//! Name,JANE DOE
//! Address,"1 MAIN ST, SPRINGFIELD CA 94000"
//! Account Number,0000000000
//! Service,Service 1
//!
//!
//! TYPE,DATE,START TIME,END TIME,USAGE (kWh),COST,NOTES
//! Electric usage,2023-11-01,0:00,0:59,0.75,$0.25,
//! ```
//!
//! The account preamble is skipped by line count, the rest is read as CSV
//! with headers. Rows billed at exactly $0.00 are provider anomalies and are
//! dropped, as are rows with zero usage (their rate is undefined).

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use indicatif::{ProgressBar, ProgressStyle};
use kwhstat_core::error::{KwhstatError, Result};
use kwhstat_core::provider::RecordSource;
use kwhstat_core::types::RowRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Number of account-information lines ahead of the header row
pub const DEFAULT_SKIP_LINES: usize = 6;

const DATE_COLUMN: &str = "DATE";

/// Data loader for a PG&E interval CSV export.
#[derive(Debug, Clone)]
pub struct DataLoader {
    path: PathBuf,
    name: String,
    skip_lines: usize,
    show_progress: bool,
}

/// Rows retained by a load plus counts of what was filtered out
#[derive(Debug, Default)]
pub struct LoadedRecords {
    pub records: Vec<RowRecord>,
    pub dropped_zero_cost: usize,
    pub dropped_zero_usage: usize,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "TYPE", default)]
    kind: String,
    #[serde(rename = "DATE")]
    date: String,
    #[serde(rename = "START TIME")]
    start_time: String,
    #[serde(rename = "END TIME", default)]
    end_time: String,
    #[serde(rename = "USAGE (kWh)", alias = "USAGE")]
    usage: String,
    #[serde(rename = "COST")]
    cost: String,
    #[serde(rename = "NOTES", default)]
    notes: String,
}

impl DataLoader {
    /// Create a loader for the file at `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            name: path.display().to_string(),
            path,
            skip_lines: DEFAULT_SKIP_LINES,
            show_progress: false,
        }
    }

    /// Override the number of preamble lines to skip
    pub fn with_skip_lines(mut self, skip_lines: usize) -> Self {
        self.skip_lines = skip_lines;
        self
    }

    /// Enable or disable the progress spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Read and parse the whole file
    pub fn load(&self) -> Result<LoadedRecords> {
        debug!(
            "Loading {} (skipping {} preamble lines)",
            self.name, self.skip_lines
        );
        let file = File::open(&self.path)?;

        let progress = if self.show_progress {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} [{elapsed_precise}] {pos} rows parsed")
            {
                pb.set_style(style);
            }
            pb.set_message(format!("Reading {}", self.name));
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            Some(pb)
        } else {
            None
        };

        let loaded = read_records(
            BufReader::new(file),
            self.skip_lines,
            &self.name,
            progress.as_ref(),
        );

        if let Some(pb) = progress {
            match &loaded {
                Ok(loaded) => pb.finish_with_message(format!(
                    "Loaded {} rows from {}",
                    loaded.records.len(),
                    self.name
                )),
                Err(_) => pb.abandon(),
            }
        }

        let loaded = loaded?;
        info!(
            "Loaded {} records from {} ({} zero-cost and {} zero-usage rows dropped)",
            loaded.records.len(),
            self.name,
            loaded.dropped_zero_cost,
            loaded.dropped_zero_usage
        );
        Ok(loaded)
    }
}

impl RecordSource for DataLoader {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn load_records(&self) -> Result<Vec<RowRecord>> {
        self.load().map(|loaded| loaded.records)
    }
}

/// Parse an export from any buffered reader
///
/// `source` only names the input in error messages.
pub fn parse_records<R: BufRead>(reader: R, skip_lines: usize, source: &str) -> Result<LoadedRecords> {
    read_records(reader, skip_lines, source, None)
}

fn read_records<R: BufRead>(
    mut reader: R,
    skip_lines: usize,
    source: &str,
    progress: Option<&ProgressBar>,
) -> Result<LoadedRecords> {
    let mut line = String::new();
    for _ in 0..skip_lines {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
    }

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if !headers.iter().any(|h| h == DATE_COLUMN) {
        return Err(KwhstatError::MissingColumn {
            column: DATE_COLUMN.to_string(),
            input: source.to_string(),
            skip_lines,
        });
    }
    debug!("Columns in {}: {:?}", source, headers);

    let mut loaded = LoadedRecords::default();
    let mut record = StringRecord::new();
    while csv_reader.read_record(&mut record)? {
        let line_no = record
            .position()
            .map(|pos| pos.line() + skip_lines as u64)
            .unwrap_or_default();

        let parse_err = |error: String| KwhstatError::Parse {
            input: source.to_string(),
            line: line_no,
            error,
        };

        // Trailing optional columns may be left off entirely
        while record.len() < headers.len() {
            record.push_field("");
        }

        let raw: RawRow = record
            .deserialize(Some(&headers))
            .map_err(|e| parse_err(e.to_string()))?;

        let date = NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d")
            .map_err(|_| parse_err(format!("invalid date '{}'", raw.date)))?;
        let usage_kwh = parse_number(&raw.usage)
            .ok_or_else(|| parse_err(format!("invalid usage '{}'", raw.usage)))?;
        let cost = parse_currency(&raw.cost)
            .ok_or_else(|| parse_err(format!("invalid cost '{}'", raw.cost)))?;

        if let Some(pb) = progress {
            pb.inc(1);
        }

        if cost == 0.0 {
            loaded.dropped_zero_cost += 1;
            continue;
        }
        if usage_kwh == 0.0 {
            warn!(
                "Dropping {} {} in {}: billed {} with zero usage",
                raw.date, raw.start_time, source, raw.cost
            );
            loaded.dropped_zero_usage += 1;
            continue;
        }

        loaded.records.push(RowRecord {
            kind: raw.kind,
            date,
            date_label: raw.date,
            start_time: raw.start_time,
            end_time: raw.end_time,
            usage_kwh,
            cost,
            notes: raw.notes,
            calculated_rate: cost / usage_kwh,
        });
    }

    Ok(loaded)
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a currency string such as "$1,234.56" or "-$0.12"
pub fn parse_currency(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();
    parse_number(&cleaned)
}
