use super::*;
use crate::algebra::{AccessError, FloatT};

/// A column materialization kernel.
///
/// Implementors own their working buffers and a borrowed view of the
/// matrix.   Each call to [`run`](ColumnKernelT::run) makes one full pass
/// over every column and returns the sum of the transformed values.
/// Buffers are reused between calls, so repeated runs do not allocate.
#[enum_dispatch]
pub trait ColumnKernelT<T>
where
    T: FloatT,
{
    /// which of the strategies this kernel implements
    fn strategy(&self) -> KernelStrategy;

    /// number of rows materialized per column
    fn rows_per_column(&self) -> usize;

    /// number of columns visited per pass
    fn columns(&self) -> usize;

    /// One full pass over all columns.
    fn run(&mut self) -> Result<T, AccessError>;

    fn name(&self) -> &'static str {
        self.strategy().name()
    }
}
