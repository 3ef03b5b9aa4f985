//! `errors` hidden submodule supplies error types that are used throughout `gamemath` crate.
//!

use std::collections::TryReserveError;
use thiserror::Error;

/// [`GridError`] enum lists every failure that 2d container operations can produce.
///
/// There are only two failure kinds in this crate: an index that is at or beyond the
/// container's current extent, and a dynamic allocation that could not be satisfied
/// (including the capacity overflow that precedes one). Both are raised synchronously
/// at the point of violation and propagate to the caller - nothing is retried,
/// logged or recovered internally.
///
/// Floating point edge cases (zero-length vector normalization, zero-denominator
/// fraction evaluation) are deliberately **not** errors; they follow IEEE-754
/// semantics, and validity predicates are provided for callers that need to check
/// upfront.
///
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Row index is at or beyond the container's row extent.
    ///
    #[error("row index {index} is out of range ({rows} rows)")]
    RowOutOfRange {
        /// Requested row index.
        ///
        index: usize,
        /// Row extent of the container at the time of the request.
        ///
        rows: usize,
    },
    /// Column index is at or beyond the row's column extent.
    ///
    #[error("column index {index} is out of range ({columns} columns)")]
    ColumnOutOfRange {
        /// Requested column index.
        ///
        index: usize,
        /// Column extent that the index was checked against.
        ///
        columns: usize,
    },
    /// `rows * columns` does not fit in `usize`, so no allocation was attempted.
    ///
    #[error("{rows}x{columns} elements exceed addressable capacity")]
    CapacityOverflow {
        /// Requested row extent.
        ///
        rows: usize,
        /// Requested column extent.
        ///
        columns: usize,
    },
    /// Heap allocation for the requested extents failed.
    ///
    #[error("failed to allocate storage for {rows}x{columns} elements")]
    AllocationFailed {
        /// Requested row extent.
        ///
        rows: usize,
        /// Requested column extent.
        ///
        columns: usize,
        /// Underlying reservation error.
        ///
        #[source]
        source: TryReserveError,
    },
}

/// Convenience alias for results of fallible container operations.
///
pub type GridResult<T> = Result<T, GridError>;
