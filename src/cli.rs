//! CLI interface for kwhstat
//!
//! This module defines the command-line interface using clap:
//! `kwhstat <FILENAME> <GRAPH_TYPE> [flags]`.
//!
//! # Example
//!
//! ```bash
//! # Average hourly cost by weekday for November 2023
//! kwhstat pge_electric_usage.csv 5 --start-date 2023-11-01 --end-date 2023-11-30
//!
//! # Daily kWh as JSON
//! kwhstat pge_electric_usage.csv 7 --json
//! ```

use crate::charts::GraphType;
use crate::error::Result;
use crate::filters::DateRange;
use clap::Parser;
use kwhstat_provider_pge::DEFAULT_SKIP_LINES;
use std::path::PathBuf;

/// Chart PG&E interval billing exports
#[derive(Parser, Debug, Clone)]
#[command(name = "kwhstat")]
#[command(version, about, long_about = None)]
#[command(after_help = graph_type_help())]
pub struct Cli {
    /// PG&E usage export (CSV)
    pub filename: PathBuf,

    /// View to produce (1-8, see below)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=8))]
    pub graph_type: u8,

    /// First date to include (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Preamble lines before the CSV header
    #[arg(long, env = "KWHSTAT_SKIP_LINES", default_value_t = DEFAULT_SKIP_LINES)]
    pub skip_lines: usize,

    /// Don't print data sufficiency warnings
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Show informational output (default shows only warnings and errors)
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// The selected view
    pub fn graph(&self) -> Result<GraphType> {
        GraphType::try_from(self.graph_type)
    }

    /// Date range built from `--start-date` and `--end-date`
    pub fn date_range(&self) -> Result<DateRange> {
        DateRange::from_cli(self.start_date.as_deref(), self.end_date.as_deref())
    }

    /// File name used in chart titles
    pub fn display_name(&self) -> String {
        self.filename.display().to_string()
    }
}

fn graph_type_help() -> String {
    let mut help = String::from("Graph types:\n");
    for graph in GraphType::ALL {
        help.push_str(&format!("  {graph}\n"));
    }
    help
}
