use super::*;

// Expand each column into `buffer` with a zero-filling copy,
// apply `op` to every element and accumulate the column sums.
// `op` is fixed per kernel type, so the zero policy is chosen
// once at compile time rather than per element.
#[inline]
fn dense_pass<T: FloatT>(
    view: &DenseColumn<'_, T>,
    buffer: &mut [T],
    op: impl Fn(T) -> T,
) -> Result<T, AccessError> {
    let mut total = T::zero();
    for col in 0..view.ncols() {
        view.fetch_copy(col, buffer)?;
        total += buffer.scalarop(&op).sum();
    }
    Ok(total)
}

/// Dense expansion, transform applied to every element.
///
/// This is the reference kernel.   It costs one transform evaluation
/// per row per column, regardless of density.
#[derive(Debug, Clone)]
pub struct DenseDirect<'a, T = f64> {
    view: DenseColumn<'a, T>,
    buffer: Vec<T>,
}

impl<'a, T> DenseDirect<'a, T>
where
    T: FloatT,
{
    pub fn new(mat: &'a CscMatrix<T>, subset: Option<&'a RowSubset>) -> Result<Self, SparseFormatError> {
        let view = DenseColumn::new(mat, subset)?;
        let buffer = vec![T::zero(); view.nrows()];
        Ok(Self { view, buffer })
    }
}

impl<T> ColumnKernelT<T> for DenseDirect<'_, T>
where
    T: FloatT,
{
    fn strategy(&self) -> KernelStrategy {
        KernelStrategy::DenseDirect
    }
    fn rows_per_column(&self) -> usize {
        self.view.nrows()
    }
    fn columns(&self) -> usize {
        self.view.ncols()
    }
    fn run(&mut self) -> Result<T, AccessError> {
        dense_pass(&self.view, &mut self.buffer, transform)
    }
}

/// Dense expansion, transform applied to nonzero elements only.
///
/// Zeros are replaced by the precomputed `transform(0)`.   An explicitly
/// stored zero cannot be told apart from a structural zero by the
/// `x != 0` test and is treated as absent.
#[derive(Debug, Clone)]
pub struct DenseConditional<'a, T = f64> {
    view: DenseColumn<'a, T>,
    buffer: Vec<T>,
    constant: T,
}

impl<'a, T> DenseConditional<'a, T>
where
    T: FloatT,
{
    pub fn new(mat: &'a CscMatrix<T>, subset: Option<&'a RowSubset>) -> Result<Self, SparseFormatError> {
        let view = DenseColumn::new(mat, subset)?;
        let buffer = vec![T::zero(); view.nrows()];
        Ok(Self {
            view,
            buffer,
            constant: transform_of_zero(),
        })
    }
}

impl<T> ColumnKernelT<T> for DenseConditional<'_, T>
where
    T: FloatT,
{
    fn strategy(&self) -> KernelStrategy {
        KernelStrategy::DenseConditional
    }
    fn rows_per_column(&self) -> usize {
        self.view.nrows()
    }
    fn columns(&self) -> usize {
        self.view.ncols()
    }
    fn run(&mut self) -> Result<T, AccessError> {
        let constant = self.constant;
        dense_pass(&self.view, &mut self.buffer, |x| {
            if x != T::zero() {
                transform(x)
            } else {
                constant
            }
        })
    }
}
