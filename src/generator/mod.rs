//! Reproducible synthetic sparse matrices.
//!
//! Every run with the same shape, density and seed produces exactly the
//! same entries, so kernel results can be cross checked against each
//! other within one process and compared between runs.

use crate::algebra::*;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_distr::StandardNormal;
use tracing::debug;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 1234567;

/// Generator for random `m x n` sparse matrices.
///
/// Positions are visited column by column, and by increasing row within
/// each column.   For each position a uniform variate `u` in `[0,1)` is
/// drawn and, if `u <= density`, a standard normal value is drawn and
/// stored there.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGenerator {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// expected fraction of stored positions
    pub density: f64,
    /// random number generator seed
    pub seed: u64,
}

impl MatrixGenerator {
    pub fn new(m: usize, n: usize, density: f64) -> Self {
        Self {
            m,
            n,
            density,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Draw the entries in coordinate form.
    pub fn triplets<T: FloatT>(&self) -> Triplets<T> {
        let mut rng = ChaCha20Rng::seed_from_u64(self.seed);

        let expected = (self.m as f64) * (self.n as f64) * self.density.clamp(0., 1.);
        let mut entries = Triplets::with_capacity(self.m, self.n, expected as usize);

        for col in 0..self.n {
            for row in 0..self.m {
                let u: f64 = rng.random();
                if u <= self.density {
                    let x: f64 = rng.sample(StandardNormal);
                    entries.push(row, col, x.as_T());
                }
            }
        }

        debug!(
            nrows = self.m,
            ncols = self.n,
            density = self.density,
            seed = self.seed,
            nnz = entries.len(),
            "generated sparse triplets"
        );
        entries
    }

    /// Draw the entries and compress them into CSC format.
    pub fn matrix<T: FloatT>(&self) -> Result<CscMatrix<T>, SparseFormatError> {
        CscMatrix::from_triplets(&self.triplets())
    }
}
