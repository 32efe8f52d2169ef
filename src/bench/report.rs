use super::ResultMismatch;
use crate::algebra::FloatT;
use crate::kernels::KernelStrategy;
use std::io::Write;
use std::time::Duration;

/// Summary statistics over the recorded pass times of one kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapStats {
    pub min: Duration,
    pub median: Duration,
    pub mean: Duration,
    pub max: Duration,
}

impl LapStats {
    /// Returns `None` if no laps were recorded.
    pub fn from_laps(laps: &[Duration]) -> Option<Self> {
        if laps.is_empty() {
            return None;
        }
        let mut sorted = laps.to_vec();
        sorted.sort_unstable();

        let n = sorted.len();
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2
        };
        let total: Duration = sorted.iter().sum();

        Some(LapStats {
            min: sorted[0],
            median,
            mean: total / n as u32,
            max: sorted[n - 1],
        })
    }
}

/// Timing and result of one kernel
#[derive(Debug, Clone)]
pub struct KernelReport<T: FloatT = f64> {
    pub strategy: KernelStrategy,
    /// sum returned by the last pass
    pub sum: T,
    /// reference the sums were checked against
    pub expected: T,
    /// number of timed passes
    pub passes: usize,
    /// passes whose sum fell outside the tolerance
    pub mismatched_passes: usize,
    /// buffer elements produced per pass
    pub elements: usize,
    pub stats: LapStats,
}

impl<T> KernelReport<T>
where
    T: FloatT,
{
    /// median time per materialized element, in nanoseconds
    pub fn ns_per_element(&self) -> Option<f64> {
        if self.elements == 0 {
            return None;
        }
        Some(self.stats.median.as_nanos() as f64 / self.elements as f64)
    }

    /// materialized elements per second at the median pass time
    pub fn throughput(&self) -> Option<f64> {
        let secs = self.stats.median.as_secs_f64();
        if self.elements == 0 || secs == 0. {
            return None;
        }
        Some(self.elements as f64 / secs)
    }

    pub fn print(&self, out: &mut dyn Write) -> std::io::Result<()> {
        write!(
            out,
            "{:<18} time: {:.3?} (min {:.3?}, max {:.3?}, {} passes)",
            self.strategy.name(),
            self.stats.median,
            self.stats.min,
            self.stats.max,
            self.passes
        )?;
        if let Some(ns) = self.ns_per_element() {
            write!(out, " {ns:.3} ns/elem")?;
        }
        writeln!(out, " for {} sum", self.sum)
    }
}

/// Everything a benchmark run measured
#[derive(Debug, Clone)]
pub struct BenchSummary<T: FloatT = f64> {
    pub nrow: usize,
    pub ncol: usize,
    pub density: f64,
    pub nnz: usize,
    /// dense direct sum over the full matrix
    pub reference: T,
    /// dense direct sum over the row subset, if one is configured
    pub subset_reference: Option<T>,
    pub kernels: Vec<KernelReport<T>>,
    /// every pass whose sum disagreed with its reference, in run order
    pub mismatches: Vec<ResultMismatch<T>>,
}

impl<T> BenchSummary<T>
where
    T: FloatT,
{
    /// true if every kernel agreed with its reference on every pass
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn kernel(&self, strategy: KernelStrategy) -> Option<&KernelReport<T>> {
        self.kernels.iter().find(|k| k.strategy == strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(x: u64) -> Duration {
        Duration::from_millis(x)
    }

    #[test]
    fn test_lap_stats() {
        assert_eq!(LapStats::from_laps(&[]), None);

        let stats = LapStats::from_laps(&[ms(5), ms(1), ms(3)]).unwrap();
        assert_eq!(stats.min, ms(1));
        assert_eq!(stats.median, ms(3));
        assert_eq!(stats.mean, ms(3));
        assert_eq!(stats.max, ms(5));

        let stats = LapStats::from_laps(&[ms(4), ms(1), ms(2), ms(10)]).unwrap();
        assert_eq!(stats.median, ms(3));
        assert_eq!(stats.mean, Duration::from_micros(4250));
    }

    #[test]
    fn test_kernel_report_print() {
        let report = KernelReport {
            strategy: KernelStrategy::SparseIndexed,
            sum: 16.5,
            expected: 16.5,
            passes: 4,
            mismatched_passes: 0,
            elements: 1000,
            stats: LapStats::from_laps(&[ms(2); 4]).unwrap(),
        };
        assert_eq!(report.ns_per_element(), Some(2000.));
        assert!((report.throughput().unwrap() - 500_000.).abs() < 1e-6);

        let mut buf = Vec::new();
        report.print(&mut buf).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.starts_with("sparse indexed     time: "));
        assert!(line.contains("4 passes"));
        assert!(line.ends_with("for 16.5 sum\n"));

        let empty = KernelReport {
            elements: 0,
            ..report
        };
        assert_eq!(empty.ns_per_element(), None);
        assert_eq!(empty.throughput(), None);
    }
}
