//! kwhstat - Chart PG&E interval billing exports
//!
//! This library provides functionality to:
//! - Load hourly usage rows from a PG&E CSV export
//! - Aggregate them by month × weekday, weekday × hour and calendar day
//! - Flag buckets with too few samples to be trusted
//! - Render the eight predefined views as tables or JSON
//!
//! # Examples
//!
//! ```no_run
//! use kwhstat::{
//!     charts::{GraphType, build_chart},
//!     diagnostics::ReportingSink,
//!     filters::DateRange,
//!     output::get_renderer,
//! };
//! use kwhstat_provider_pge::DataLoader;
//!
//! fn main() -> kwhstat::Result<()> {
//!     let loaded = DataLoader::new("pge_electric_usage.csv").load()?;
//!     let range = DateRange::from_cli(Some("2023-11-01"), Some("2023-11-30"))?;
//!
//!     let chart = build_chart(
//!         GraphType::HourCostAvgByWeekday,
//!         &loaded.records,
//!         &range,
//!         "pge_electric_usage.csv",
//!         &mut ReportingSink::new(),
//!     );
//!     println!("{}", get_renderer(false).render(&chart)?);
//!     Ok(())
//! }
//! ```

pub mod aggregation;
pub mod charts;
pub mod cli;
pub mod output;

// Re-export core modules so callers only need this crate
pub use kwhstat_core::{aggregation_types, diagnostics, error, filters, provider, types, weekday};

// Re-export commonly used types
pub use error::{KwhstatError, Result};
pub use types::{Metric, RowRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
