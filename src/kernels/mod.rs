//! Column materialization kernels.
//!
//! Each kernel walks every column of a [`CscMatrix`], materializes it into
//! a dense buffer while applying [`transform`], and sums the result.  The
//! four strategies are algebraically equivalent and differ only in how
//! much work they do on structural zeros:
//!
//! | strategy            | fill                | transform calls per column |
//! |---------------------|---------------------|----------------------------|
//! | `DenseDirect`       | zeros, then copy    | every row                  |
//! | `DenseConditional`  | zeros, then copy    | nonzero rows               |
//! | `SparseExpanded`    | `transform(0)`      | explicit nonzeros          |
//! | `SparseIndexed`     | `transform(0)`      | explicit nonzeros in subset|
//!
//! Sums are accumulated column by column, and left to right within each
//! column.

use crate::algebra::*;
use enum_dispatch::*;

mod dense;
mod sparse;
mod strategy;
mod traits;
mod transform;
pub use dense::*;
pub use sparse::*;
pub use strategy::*;
pub use traits::*;
pub use transform::*;

/// Any one of the column kernels, dispatched statically.
#[enum_dispatch(ColumnKernelT<T>)]
#[derive(Debug, Clone)]
pub enum ColumnKernel<'a, T>
where
    T: FloatT,
{
    DenseDirect(DenseDirect<'a, T>),
    DenseConditional(DenseConditional<'a, T>),
    SparseExpanded(SparseExpanded<'a, T>),
    SparseIndexed(SparseIndexed<'a, T>),
}

impl<'a, T> ColumnKernel<'a, T>
where
    T: FloatT,
{
    /// Build the kernel for `strategy` over `mat`, restricted to `subset`
    /// if one is given.
    ///
    /// `SparseIndexed` without a subset selects every row.
    pub fn new(
        strategy: KernelStrategy,
        mat: &'a CscMatrix<T>,
        subset: Option<&'a RowSubset>,
    ) -> Result<Self, SparseFormatError> {
        let kernel = match strategy {
            KernelStrategy::DenseDirect => DenseDirect::new(mat, subset)?.into(),
            KernelStrategy::DenseConditional => DenseConditional::new(mat, subset)?.into(),
            KernelStrategy::SparseExpanded => SparseExpanded::new(mat, subset)?.into(),
            KernelStrategy::SparseIndexed => SparseIndexed::new(mat, subset)?.into(),
        };
        Ok(kernel)
    }
}
