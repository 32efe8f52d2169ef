use super::*;
use std::borrow::Cow;

// Fill `buffer` with `constant` for each column, then overwrite the
// position of every explicit nonzero with its transformed value.
// `place` maps the row reported by the view to a buffer position,
// returning None for rows that are not materialized.
#[inline]
fn sparse_pass<T: FloatT>(
    view: &SparseColumn<'_, T>,
    buffer: &mut [T],
    vbuf: &mut [T],
    ibuf: &mut [usize],
    constant: T,
    place: impl Fn(usize) -> Option<usize>,
) -> Result<T, AccessError> {
    let mut total = T::zero();
    for col in 0..view.ncols() {
        buffer.set(constant);
        let range = view.fetch(col, vbuf, ibuf)?;
        for (row, val) in range.iter() {
            if let Some(pos) = place(row) {
                buffer[pos] = transform(val);
            }
        }
        total += buffer.sum();
    }
    Ok(total)
}

/// Sparse expansion.   The buffer is prefilled with `transform(0)` and
/// only explicit nonzeros are transformed.
///
/// With a row subset attached, the sparse view compacts row positions
/// and drops rows outside the subset.
#[derive(Debug, Clone)]
pub struct SparseExpanded<'a, T = f64> {
    view: SparseColumn<'a, T>,
    buffer: Vec<T>,
    vbuf: Vec<T>,
    ibuf: Vec<usize>,
    constant: T,
}

impl<'a, T> SparseExpanded<'a, T>
where
    T: FloatT,
{
    pub fn new(mat: &'a CscMatrix<T>, subset: Option<&'a RowSubset>) -> Result<Self, SparseFormatError> {
        let view = SparseColumn::new(mat, subset)?;
        let nrows = view.nrows();
        Ok(Self {
            view,
            buffer: vec![T::zero(); nrows],
            vbuf: vec![T::zero(); nrows],
            ibuf: vec![0; nrows],
            constant: transform_of_zero(),
        })
    }
}

impl<T> ColumnKernelT<T> for SparseExpanded<'_, T>
where
    T: FloatT,
{
    fn strategy(&self) -> KernelStrategy {
        KernelStrategy::SparseExpanded
    }
    fn rows_per_column(&self) -> usize {
        self.view.nrows()
    }
    fn columns(&self) -> usize {
        self.view.ncols()
    }
    fn run(&mut self) -> Result<T, AccessError> {
        let Self {
            view,
            buffer,
            vbuf,
            ibuf,
            constant,
        } = self;
        sparse_pass(view, buffer, vbuf, ibuf, *constant, Some)
    }
}

/// Sparse expansion restricted to a row subset.
///
/// The view reports original row indices and the kernel places each
/// nonzero at its compacted position through the subset's reverse map.
/// The buffer has one entry per selected row.
#[derive(Debug, Clone)]
pub struct SparseIndexed<'a, T = f64> {
    view: SparseColumn<'a, T>,
    subset: Cow<'a, RowSubset>,
    buffer: Vec<T>,
    vbuf: Vec<T>,
    ibuf: Vec<usize>,
    constant: T,
}

impl<'a, T> SparseIndexed<'a, T>
where
    T: FloatT,
{
    /// Without a subset every row is selected through an identity map.
    pub fn new(mat: &'a CscMatrix<T>, subset: Option<&'a RowSubset>) -> Result<Self, SparseFormatError> {
        let subset = match subset {
            Some(s) if s.source_rows() != mat.m => {
                return Err(SparseFormatError::IncompatibleDimension);
            }
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(RowSubset::identity(mat.m)),
        };
        let view = mat.sparse_column();
        Ok(Self {
            view,
            buffer: vec![T::zero(); subset.len()],
            vbuf: vec![T::zero(); mat.m],
            ibuf: vec![0; mat.m],
            subset,
            constant: transform_of_zero(),
        })
    }

    pub fn subset(&self) -> &RowSubset {
        &self.subset
    }
}

impl<T> ColumnKernelT<T> for SparseIndexed<'_, T>
where
    T: FloatT,
{
    fn strategy(&self) -> KernelStrategy {
        KernelStrategy::SparseIndexed
    }
    fn rows_per_column(&self) -> usize {
        self.subset.len()
    }
    fn columns(&self) -> usize {
        self.view.ncols()
    }
    fn run(&mut self) -> Result<T, AccessError> {
        let Self {
            view,
            subset,
            buffer,
            vbuf,
            ibuf,
            constant,
        } = self;
        sparse_pass(view, buffer, vbuf, ibuf, *constant, |row| {
            subset.position(row)
        })
    }
}
