//! Error types for kwhstat
//!
//! This module defines the error types used throughout the kwhstat crates.
//! All errors are derived from `thiserror` for convenient error handling
//! and automatic `From` implementations.
//!
//! Only malformed input is an error. Zero-cost rows, empty date ranges and
//! under-sampled buckets are expected conditions and never surface here.
//!
//! # Example
//!
//! ```
//! use kwhstat_core::error::{KwhstatError, Result};
//!
//! fn example_function() -> Result<()> {
//!     // This will automatically convert io::Error to KwhstatError
//!     let _file = std::fs::read_to_string("nonexistent.csv")?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Main error type for kwhstat operations
#[derive(Error, Debug)]
pub enum KwhstatError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required column is absent after skipping the preamble lines
    #[error(
        "Missing column '{column}' in {input}: expected the first {skip_lines} lines to hold no data, please check"
    )]
    MissingColumn {
        /// The column that was expected
        column: String,
        /// Name of the input (usually a file path)
        input: String,
        /// Number of preamble lines that were skipped
        skip_lines: usize,
    },

    /// A data row could not be parsed
    #[error("Parse error in {input} at line {line}: {error}")]
    Parse {
        /// Name of the input (usually a file path)
        input: String,
        /// 1-based line number in the original file
        line: u64,
        /// The error message
        error: String,
    },

    /// Invalid date format
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results in kwhstat
///
/// # Example
///
/// ```
/// use kwhstat_core::Result;
///
/// fn process_data() -> Result<String> {
///     Ok("Processed successfully".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, KwhstatError>;
