#![allow(non_snake_case)]

use crate::algebra::{CscMatrix, FloatT, InvalidEntryKind, ShapedMatrix, SparseFormatError, Triplets};
use itertools::izip;
use tracing::debug;

impl<T> Triplets<T>
where
    T: FloatT,
{
    /// An empty `m x n` collection of entries
    pub fn new(m: usize, n: usize) -> Self {
        Self::with_capacity(m, n, 0)
    }

    /// An empty `m x n` collection with space reserved for `nnz` entries
    pub fn with_capacity(m: usize, n: usize, nnz: usize) -> Self {
        Triplets {
            m,
            n,
            rowval: Vec::with_capacity(nnz),
            colval: Vec::with_capacity(nnz),
            nzval: Vec::with_capacity(nnz),
        }
    }

    /// Append an entry.   No bounds or uniqueness checking is done
    /// here; see [`CscMatrix::from_triplets`].
    pub fn push(&mut self, row: usize, col: usize, val: T) {
        self.rowval.push(row);
        self.colval.push(col);
        self.nzval.push(val);
    }

    /// number of entries
    pub fn len(&self) -> usize {
        self.nzval.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nzval.is_empty()
    }

    /// Iterate over `(row, col, value)` entries in stored order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        izip!(&self.rowval, &self.colval, &self.nzval).map(|(&r, &c, &v)| (r, c, v))
    }

    /// Entries of column `col` as `(row, value)` pairs, in stored order
    pub fn column(&self, col: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        self.iter()
            .filter(move |&(_, c, _)| c == col)
            .map(|(r, _, v)| (r, v))
    }

    // first entry lying outside the m x n bounds, if any
    fn check_bounds(&self) -> Result<(), SparseFormatError> {
        for (row, col, _) in self.iter() {
            let kind = if col >= self.n {
                InvalidEntryKind::ColumnOutOfBounds
            } else if row >= self.m {
                InvalidEntryKind::RowOutOfBounds
            } else {
                continue;
            };
            return Err(SparseFormatError::InvalidEntry { row, col, kind });
        }
        Ok(())
    }
}

impl<T> ShapedMatrix for Triplets<T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// Compress coordinate entries into CSC format.
    ///
    /// Entries may appear in any order.   Within each column of the
    /// result, rows are sorted in increasing order.
    ///
    /// # Errors
    /// Returns [`SparseFormatError::InvalidEntry`] if any entry lies
    /// outside the matrix bounds or if a position appears twice, and
    /// [`SparseFormatError::IncompatibleDimension`] if the entry
    /// arrays have different lengths.
    pub fn from_triplets(entries: &Triplets<T>) -> Result<Self, SparseFormatError> {
        let nnz = entries.nzval.len();
        if entries.rowval.len() != nnz || entries.colval.len() != nnz {
            return Err(SparseFormatError::IncompatibleDimension);
        }
        entries.check_bounds()?;

        let mut A = CscMatrix::spalloc(entries.m, entries.n, entries.len());

        // spalloc puts nnz in the final colptr entry.   Zero
        // it so the counting pass starts clean
        A.colptr[A.n] = 0;
        A.colcount_entries(&entries.colval);
        A.colcount_to_colptr();

        for (row, col, val) in entries.iter() {
            A.fill_entry(row, col, val);
        }
        A.backshift_colptrs();

        A.sort_columns();
        if let Some((row, col)) = A.find_duplicate() {
            return Err(SparseFormatError::InvalidEntry {
                row,
                col,
                kind: InvalidEntryKind::Duplicate,
            });
        }

        debug!(
            nrows = A.m,
            ncols = A.n,
            nnz = A.nnz(),
            "compressed triplets into CSC"
        );

        Ok(A)
    }
}
