use super::*;
use crate::algebra::*;
use crate::generator::MatrixGenerator;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::kernels::*;
use crate::timers::*;
use std::io::Write;
use tracing::{debug, info};

/// Benchmark runner.
///
/// Owns the matrix, the optional row subset and two output streams:
/// the report stream (stdout unless redirected) and the diagnostics
/// stream for result mismatches (stderr unless redirected).
/// Each call to [`run`](Benchmark::run) builds every configured kernel
/// once and times repeated full passes over the matrix with it.
#[derive(Debug)]
pub struct Benchmark<T: FloatT = f64> {
    settings: BenchSettings<T>,
    matrix: CscMatrix<T>,
    subset: Option<RowSubset>,
    timers: Timers,
    stream: PrintTarget,
    diagnostics: PrintTarget,
}

impl<T> Benchmark<T>
where
    T: FloatT,
{
    /// Generate the matrix described by `settings`.   A `subset_step`
    /// above one restricts every kernel to every `subset_step`-th row.
    pub fn new(settings: BenchSettings<T>) -> Result<Self, BenchError> {
        settings.validate()?;

        let matrix = MatrixGenerator::new(settings.nrow, settings.ncol, settings.density)
            .with_seed(settings.seed)
            .matrix()?;

        let subset = (settings.subset_step > 1)
            .then(|| RowSubset::strided(settings.nrow, settings.subset_step));

        Self::from_parts(settings, matrix, subset)
    }

    /// Benchmark an existing matrix, optionally restricted to `subset`.
    pub fn from_parts(
        settings: BenchSettings<T>,
        matrix: CscMatrix<T>,
        subset: Option<RowSubset>,
    ) -> Result<Self, BenchError> {
        settings.validate()?;
        matrix.check_format()?;
        if subset.as_ref().is_some_and(|s| s.source_rows() != matrix.m) {
            return Err(SparseFormatError::IncompatibleDimension.into());
        }

        info!(
            nrows = matrix.m,
            ncols = matrix.n,
            nnz = matrix.nnz(),
            subset_rows = ?subset.as_ref().map(RowSubset::len),
            "benchmark ready"
        );

        Ok(Self {
            settings,
            matrix,
            subset,
            timers: Timers::default(),
            stream: PrintTarget::default(),
            diagnostics: PrintTarget::Stream(Box::new(std::io::stderr())),
        })
    }

    pub fn settings(&self) -> &BenchSettings<T> {
        &self.settings
    }

    pub fn matrix(&self) -> &CscMatrix<T> {
        &self.matrix
    }

    pub fn subset(&self) -> Option<&RowSubset> {
        self.subset.as_ref()
    }

    /// pass times recorded by the most recent run
    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    /// Stream receiving one line per mismatching pass.   Configure it
    /// with the [`ConfigurablePrintTarget`] methods.
    pub fn diagnostics_mut(&mut self) -> &mut PrintTarget {
        &mut self.diagnostics
    }

    /// Time every configured kernel and check its sums.
    ///
    /// A pass whose sum disagrees with the reference is written to the
    /// diagnostics stream and recorded in the returned summary, but does
    /// not end the run.
    pub fn run(&mut self) -> Result<BenchSummary<T>, BenchError> {
        let Self {
            settings,
            matrix,
            subset,
            timers,
            stream,
            diagnostics,
        } = self;
        let matrix: &CscMatrix<T> = matrix;
        let verbose = settings.verbose;

        if verbose {
            writeln!(
                stream,
                "Testing a {} x {} matrix with a density of {}",
                matrix.m, matrix.n, settings.density
            )?;
        }

        let reference = DenseDirect::new(matrix, None)?.run()?;
        if verbose {
            writeln!(stream, "Summation result should be {}", reference)?;
        }

        // a subset keeping every row gives the full reference again
        let subset = subset.as_ref().filter(|s| !s.is_identity());
        let subset_reference = match subset {
            Some(s) => Some(DenseDirect::new(matrix, Some(s))?.run()?),
            None => None,
        };
        if let (true, Some(s), Some(sum)) = (verbose, subset, subset_reference) {
            writeln!(
                stream,
                "Subset of {} rows, summation result should be {}",
                s.len(),
                sum
            )?;
        }
        let expected = subset_reference.unwrap_or(reference);

        let mut reports = Vec::with_capacity(settings.kernels.len());
        let mut mismatches = Vec::new();

        for &strategy in &settings.kernels {
            let mut kernel = ColumnKernel::new(strategy, matrix, subset)?;
            let key = kernel.name();
            timers.reset_timer(key);

            info!(kernel = key, iterations = settings.iterations, "running kernel");

            let mut sum = T::zero();
            let mut mismatched_passes = 0;

            for pass in 0..settings.iterations as usize {
                let result;
                timeit! {timers => key; {
                    result = kernel.run();
                }}
                sum = result?;

                if !sum.approx_eq(expected, settings.tolerance) {
                    let mismatch = ResultMismatch {
                        kernel: strategy,
                        pass,
                        expected,
                        actual: sum,
                    };
                    debug!(
                        kernel = key,
                        pass,
                        rel_diff = %mismatch.rel_diff(),
                        "result mismatch"
                    );
                    writeln!(diagnostics, "{mismatch}")?;
                    mismatched_passes += 1;
                    mismatches.push(mismatch);
                }

                // kernel time only, checks between passes are not counted
                if timers.elapsed(key).as_secs_f64() >= settings.time_limit {
                    debug!(kernel = key, passes = pass + 1, "time limit reached");
                    break;
                }
            }

            let laps = timers.laps(key);
            // at least one pass always runs, so laps is never empty
            let Some(stats) = LapStats::from_laps(laps) else {
                continue;
            };

            let report = KernelReport {
                strategy,
                sum,
                expected,
                passes: laps.len(),
                mismatched_passes,
                elements: kernel.rows_per_column() * kernel.columns(),
                stats,
            };
            if verbose {
                report.print(stream)?;
            }
            reports.push(report);
        }

        stream.flush()?;
        diagnostics.flush()?;

        Ok(BenchSummary {
            nrow: matrix.m,
            ncol: matrix.n,
            density: settings.density,
            nnz: matrix.nnz(),
            reference,
            subset_reference,
            kernels: reports,
            mismatches,
        })
    }
}

impl<T> ConfigurablePrintTarget for Benchmark<T>
where
    T: FloatT,
{
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}
