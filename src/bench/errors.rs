use super::SettingsError;
use crate::algebra::{AccessError, FloatT, ScalarMath, SparseFormatError};
use crate::kernels::KernelStrategy;
use thiserror::Error;

/// Errors that abort a benchmark run
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("invalid benchmark settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("bad matrix data: {0}")]
    Format(#[from] SparseFormatError),
    #[error("column access failed: {0}")]
    Access(#[from] AccessError),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// A kernel pass whose sum disagreed with the reference.
///
/// Mismatches are reported and recorded but do not stop the run.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("unexpected result from {kernel} ({actual}) on pass {pass}, expected {expected}")]
pub struct ResultMismatch<T: FloatT = f64> {
    pub kernel: KernelStrategy,
    /// zero based index of the offending pass
    pub pass: usize,
    pub expected: T,
    pub actual: T,
}

impl<T> ResultMismatch<T>
where
    T: FloatT,
{
    /// relative distance between the kernel sum and the reference
    pub fn rel_diff(&self) -> T {
        self.actual.rel_diff(self.expected)
    }
}

#[test]
fn test_mismatch_rel_diff() {
    let mismatch = ResultMismatch {
        kernel: KernelStrategy::SparseExpanded,
        pass: 3,
        expected: 2.0,
        actual: 1.0,
    };
    assert_eq!(mismatch.rel_diff(), 0.5);
    assert_eq!(
        mismatch.to_string(),
        "unexpected result from sparse expanded (1) on pass 3, expected 2"
    );
}
