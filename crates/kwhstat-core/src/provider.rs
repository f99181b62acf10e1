//! Record source trait for data loaders
//!
//! This module defines the `RecordSource` trait that provider crates
//! implement. It gives the binary a uniform way to obtain the immutable row
//! sequence an aggregation pass runs over.

use crate::error::Result;
use crate::types::RowRecord;

/// Trait for provider-specific record loaders.
///
/// Implementations must only return well-formed rows with non-zero cost and
/// usage, and must fail the whole load on malformed input.
pub trait RecordSource {
    /// Human readable name of the input, used in chart titles and errors.
    fn source_name(&self) -> &str;

    /// Load every retained row in source order.
    fn load_records(&self) -> Result<Vec<RowRecord>>;
}
