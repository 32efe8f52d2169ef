//! Sparse column materialization benchmark
//!
//! Generates a random sparse matrix and times the four column kernels
//! over it, checking each kernel's sum against the dense direct result.
//!
//! # Usage
//!
//! ```bash
//! # defaults: 10000 x 10000, density 0.1, all kernels
//! colexpand
//!
//! # a sparser, smaller matrix with every fifth row selected
//! colexpand -d 0.01 -r 5000 -c 2000 --subset-step 5
//!
//! # only the sparse kernels, with debug logging
//! RUST_LOG=colexpand=debug colexpand -k sparse-expanded -k sparse-indexed
//! ```
//!
//! Report lines are written to stdout.   Kernel result mismatches are
//! written to stderr, one line per offending pass, regardless of
//! `RUST_LOG`.   Log output also goes to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use colexpand::bench::{Benchmark, BenchSettingsBuilder};
use colexpand::generator::DEFAULT_SEED;
use colexpand::kernels::KernelStrategy;
use tracing_subscriber::EnvFilter;

/// Benchmark strategies for materializing sparse columns under a transform
#[derive(Parser, Debug)]
#[command(name = "colexpand")]
#[command(version)]
struct Args {
    /// Density of the sparse matrix
    #[arg(short, long, default_value_t = 0.1)]
    density: f64,

    /// Number of rows
    #[arg(short = 'r', long, default_value_t = 10000)]
    nrow: usize,

    /// Number of columns
    #[arg(short = 'c', long, default_value_t = 10000)]
    ncol: usize,

    /// Random number generator seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Restrict every kernel to every n-th row (1 selects all rows)
    #[arg(long, default_value_t = 1)]
    subset_step: usize,

    /// Number of timed passes per kernel
    #[arg(short = 'n', long, default_value_t = 10)]
    iterations: u32,

    /// Wall clock limit per kernel, in seconds
    #[arg(long)]
    time_limit: Option<f64>,

    /// Relative tolerance when checking kernel sums
    #[arg(long, default_value_t = 1e-9)]
    tolerance: f64,

    /// Kernel to run (repeatable).  Runs all kernels if omitted
    ///
    /// One of dense-direct, dense-conditional, sparse-expanded, sparse-indexed
    #[arg(short = 'k', long = "kernel", value_name = "NAME")]
    kernels: Vec<KernelStrategy>,

    /// Suppress the report
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = BenchSettingsBuilder::<f64>::default();
    builder
        .density(args.density)
        .nrow(args.nrow)
        .ncol(args.ncol)
        .seed(args.seed)
        .subset_step(args.subset_step)
        .iterations(args.iterations)
        .tolerance(args.tolerance)
        .verbose(!args.quiet);
    if let Some(time_limit) = args.time_limit {
        builder.time_limit(time_limit);
    }
    if !args.kernels.is_empty() {
        builder.kernels(args.kernels);
    }
    let settings = builder.build().context("invalid benchmark settings")?;

    let mut bench = Benchmark::new(settings).context("failed to set up benchmark")?;
    let summary = bench.run().context("benchmark run failed")?;

    tracing::info!(
        kernels = summary.kernels.len(),
        mismatches = summary.mismatches.len(),
        "benchmark complete"
    );

    Ok(())
}
