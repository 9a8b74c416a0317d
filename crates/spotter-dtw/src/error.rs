//! Error types for local-cost validation and DTW scoring.

use crate::pattern::StepPattern;

/// Errors from local-cost matrix construction and DTW computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DtwError {
    /// Returned when a local-cost matrix has zero rows or zero columns.
    #[error("local-cost matrix must be non-empty, got {rows}x{cols}")]
    EmptyMatrix {
        /// Number of reference rows supplied.
        rows: usize,
        /// Number of query columns supplied.
        cols: usize,
    },

    /// Returned when a flat buffer does not hold exactly `rows * cols` values.
    #[error("buffer of length {len} cannot be shaped as {rows}x{cols}")]
    ShapeMismatch {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
        /// Actual buffer length.
        len: usize,
    },

    /// Returned when row-vector input has rows of unequal length.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Column count of row 0.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },

    /// Returned when the matrix has fewer rows than the step pattern's boundary needs.
    #[error("{pattern} needs at least {required} reference rows, got {rows}")]
    TooFewRows {
        /// Step pattern that rejected the shape.
        pattern: StepPattern,
        /// Minimum number of rows the pattern accepts.
        required: usize,
        /// Number of rows supplied.
        rows: usize,
    },
}
