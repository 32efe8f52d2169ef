use thiserror::Error;

/// Reason attached to [`SparseFormatError::InvalidEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidEntryKind {
    /// Row index is not less than the matrix row dimension
    RowOutOfBounds,
    /// Column index is not less than the matrix column dimension
    ColumnOutOfBounds,
    /// The same (row, column) position appears more than once
    Duplicate,
}

impl std::fmt::Display for InvalidEntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidEntryKind::RowOutOfBounds => write!(f, "row index out of bounds"),
            InvalidEntryKind::ColumnOutOfBounds => write!(f, "column index out of bounds"),
            InvalidEntryKind::Duplicate => write!(f, "duplicate position"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by sparse matrix and row subset assembly operations.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// Data is not sorted by row index within each column
    #[error("Data is not sorted by row index within each column")]
    BadRowOrdering,
    #[error("Row value exceeds the matrix row dimension")]
    /// Row value exceeds the matrix row dimension
    BadRowval,
    #[error("Bad column pointer values")]
    /// Matrix column pointer values are defective
    BadColptr,
    /// Malformed triplet entry
    #[error("Invalid entry at ({row}, {col}): {kind}")]
    InvalidEntry {
        row: usize,
        col: usize,
        kind: InvalidEntryKind,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by column accessors.
pub enum AccessError {
    /// Requested column is not in `[0, ncols)`
    #[error("Column {col} is out of range for a matrix with {ncols} columns")]
    OutOfRange { col: usize, ncols: usize },
    /// Target buffer length does not match the (possibly subset) row count
    #[error("Buffer of length {found} supplied where {expected} was required")]
    BufferLength { expected: usize, found: usize },
}
