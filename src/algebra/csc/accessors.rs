//! Column views over a [`CscMatrix`].
//!
//! Views hold a shared borrow of the matrix and an optional [`RowSubset`].
//! A dense view fills caller supplied buffers of length `nrows()` with one
//! materialized column; a sparse view reports only the explicit nonzeros.
//! With a subset attached, rows are compacted through the subset's reverse
//! map and rows outside it are dropped.

use crate::algebra::*;
use std::ops::Range;

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// dense column view over all rows
    pub fn dense_column(&self) -> DenseColumn<'_, T> {
        DenseColumn {
            src: self,
            subset: None,
        }
    }

    /// dense column view restricted to the rows of `subset`
    pub fn dense_column_subset<'a>(
        &'a self,
        subset: &'a RowSubset,
    ) -> Result<DenseColumn<'a, T>, SparseFormatError> {
        DenseColumn::new(self, Some(subset))
    }

    /// sparse column view over all rows
    pub fn sparse_column(&self) -> SparseColumn<'_, T> {
        SparseColumn {
            src: self,
            subset: None,
        }
    }

    /// sparse column view restricted to the rows of `subset`
    pub fn sparse_column_subset<'a>(
        &'a self,
        subset: &'a RowSubset,
    ) -> Result<SparseColumn<'a, T>, SparseFormatError> {
        SparseColumn::new(self, Some(subset))
    }

    // entry range of column `col` in rowval / nzval
    #[inline]
    fn column_range(&self, col: usize) -> Result<Range<usize>, AccessError> {
        if col >= self.n {
            return Err(AccessError::OutOfRange { col, ncols: self.n });
        }
        Ok(self.colptr[col]..self.colptr[col + 1])
    }
}

// a subset must describe the rows of the matrix it is paired with
fn check_subset<T>(src: &CscMatrix<T>, subset: Option<&RowSubset>) -> Result<(), SparseFormatError> {
    match subset {
        Some(s) if s.source_rows() != src.m => Err(SparseFormatError::IncompatibleDimension),
        _ => Ok(()),
    }
}

#[inline]
fn check_buffer(expected: usize, found: usize) -> Result<(), AccessError> {
    if found != expected {
        return Err(AccessError::BufferLength { expected, found });
    }
    Ok(())
}

impl<'a, T> DenseColumn<'a, T>
where
    T: FloatT,
{
    /// # Errors
    /// [`SparseFormatError::IncompatibleDimension`] if `subset` was built
    /// for a different number of rows than `src` has.
    pub fn new(src: &'a CscMatrix<T>, subset: Option<&'a RowSubset>) -> Result<Self, SparseFormatError> {
        check_subset(src, subset)?;
        Ok(DenseColumn { src, subset })
    }

    /// Zero `buf`, then write the nonzeros of column `col` into it.
    pub fn fetch_copy(&self, col: usize, buf: &mut [T]) -> Result<(), AccessError> {
        check_buffer(self.nrows(), buf.len())?;
        let rng = self.src.column_range(col)?;
        buf.set(T::zero());
        self.scatter(rng, buf);
        Ok(())
    }

    /// Write the nonzeros of column `col` over the current contents of `buf`.
    ///
    /// Positions that are structural zeros in this column are not touched,
    /// so `buf` must be refilled by the caller before every call.
    pub fn fetch_overlay(&self, col: usize, buf: &mut [T]) -> Result<(), AccessError> {
        check_buffer(self.nrows(), buf.len())?;
        let rng = self.src.column_range(col)?;
        self.scatter(rng, buf);
        Ok(())
    }

    #[inline]
    fn scatter(&self, rng: Range<usize>, buf: &mut [T]) {
        let rows = &self.src.rowval[rng.clone()];
        let vals = &self.src.nzval[rng];

        match self.subset {
            None => {
                for (&row, &val) in rows.iter().zip(vals) {
                    buf[row] = val;
                }
            }
            Some(subset) => {
                for (&row, &val) in rows.iter().zip(vals) {
                    if let Some(pos) = subset.position(row) {
                        buf[pos] = val;
                    }
                }
            }
        }
    }
}

impl<'a, T> SparseColumn<'a, T>
where
    T: FloatT,
{
    /// # Errors
    /// [`SparseFormatError::IncompatibleDimension`] if `subset` was built
    /// for a different number of rows than `src` has.
    pub fn new(src: &'a CscMatrix<T>, subset: Option<&'a RowSubset>) -> Result<Self, SparseFormatError> {
        check_subset(src, subset)?;
        Ok(SparseColumn { src, subset })
    }

    /// Fetch the explicit nonzeros of column `col`.
    ///
    /// Both buffers must have length `nrows()`.   Without a subset the
    /// returned range borrows the matrix directly and the buffers are left
    /// untouched.   With a subset, compacted positions and values are
    /// written to `ibuf` and `vbuf` and the range borrows from them.
    pub fn fetch<'b>(
        &self,
        col: usize,
        vbuf: &'b mut [T],
        ibuf: &'b mut [usize],
    ) -> Result<SparseRange<'b, T>, AccessError>
    where
        'a: 'b,
    {
        check_buffer(self.nrows(), vbuf.len())?;
        check_buffer(self.nrows(), ibuf.len())?;
        let src: &'a CscMatrix<T> = self.src;
        let rng = src.column_range(col)?;

        let Some(subset) = self.subset else {
            let index = &src.rowval[rng.clone()];
            let value = &src.nzval[rng];
            return Ok(SparseRange {
                number: index.len(),
                index,
                value,
            });
        };

        let mut number = 0;
        for k in rng {
            if let Some(pos) = subset.position(src.rowval[k]) {
                ibuf[number] = pos;
                vbuf[number] = src.nzval[k];
                number += 1;
            }
        }

        let (ibuf, vbuf): (&'b [usize], &'b [T]) = (ibuf, vbuf);
        Ok(SparseRange {
            number,
            index: &ibuf[..number],
            value: &vbuf[..number],
        })
    }
}

impl<T> ShapedMatrix for DenseColumn<'_, T> {
    fn nrows(&self) -> usize {
        self.subset.map_or(self.src.m, RowSubset::len)
    }
    fn ncols(&self) -> usize {
        self.src.n
    }
}

impl<T> ShapedMatrix for SparseColumn<'_, T> {
    fn nrows(&self) -> usize {
        self.subset.map_or(self.src.m, RowSubset::len)
    }
    fn ncols(&self) -> usize {
        self.src.n
    }
}

impl<T> SparseRange<'_, T>
where
    T: FloatT,
{
    /// `(position, value)` pairs of the range
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.index.iter().copied().zip(self.value.iter().copied())
    }
}
