//! Core types, traits, and utilities for kwhstat
//!
//! This crate provides the foundational types, error handling, date range
//! filtering, diagnostics, and aggregation result types used by the other
//! kwhstat crates.

pub mod aggregation_types;
pub mod diagnostics;
pub mod error;
pub mod filters;
pub mod provider;
pub mod types;
pub mod weekday;

// Re-export commonly used types
pub use error::{KwhstatError, Result};
pub use types::{Metric, RowRecord};
