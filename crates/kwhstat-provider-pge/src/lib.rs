//! PG&E provider for kwhstat
//!
//! This crate implements the record source trait for PG&E interval billing
//! exports, handling preamble skipping, currency parsing and row filtering.

pub mod data_loader;

pub use data_loader::{DataLoader, LoadedRecords, DEFAULT_SKIP_LINES};
