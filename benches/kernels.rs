//! Criterion benchmarks for the column kernels.
//!
//! Every kernel runs over the same generated matrix at a few densities,
//! once over all rows and once over every fifth row.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use colexpand::algebra::{CscMatrix, RowSubset};
use colexpand::generator::MatrixGenerator;
use colexpand::kernels::{ColumnKernel, ColumnKernelT, KernelStrategy};

const NROW: usize = 2000;
const NCOL: usize = 500;

fn generate(density: f64) -> CscMatrix<f64> {
    MatrixGenerator::new(NROW, NCOL, density)
        .matrix()
        .expect("generated matrix is well formed")
}

// ---------------------------------------------------------------------------
// All rows
// ---------------------------------------------------------------------------

fn bench_full(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels_full");
    group.sample_size(20);

    for density in [0.01, 0.1, 0.5] {
        let mat = generate(density);
        for strategy in KernelStrategy::ALL {
            let mut kernel = ColumnKernel::new(strategy, &mat, None).unwrap();
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), density),
                &density,
                |b, _| b.iter(|| black_box(kernel.run().unwrap())),
            );
        }
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Row subset
// ---------------------------------------------------------------------------

fn bench_subset(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels_subset");
    group.sample_size(20);

    let subset = RowSubset::strided(NROW, 5);
    for density in [0.01, 0.1, 0.5] {
        let mat = generate(density);
        for strategy in KernelStrategy::ALL {
            let mut kernel = ColumnKernel::new(strategy, &mat, Some(&subset)).unwrap();
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), density),
                &density,
                |b, _| b.iter(|| black_box(kernel.run().unwrap())),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_full, bench_subset);
criterion_main!(benches);
