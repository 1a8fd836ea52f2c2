use thiserror::Error;

/// Errors returned by fallible constructors and checked operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LinalgError {
    /// A flat list of elements did not have the number of elements required by the target type.
    #[error("expected {expected} elements, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A nested list did not have one entry per matrix row.
    #[error("expected {expected} rows, got {actual}")]
    RowCountMismatch { expected: usize, actual: usize },

    /// A nested list had a row whose length differs from the number of matrix columns.
    #[error("row {row} has {actual} elements, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Attempted to divide by a scalar that is exactly zero.
    #[error("attempt to divide by zero")]
    DivisionByZero,
}
