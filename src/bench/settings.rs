use crate::algebra::*;
use crate::generator::DEFAULT_SEED;
use crate::kernels::KernelStrategy;
use derive_builder::Builder;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// density outside of `[0,1]`, or NaN
    #[error("density must lie in [0, 1] (got {0})")]
    BadDensity(f64),
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Benchmark configuration.
///
/// Build with [`BenchSettingsBuilder`], which fills in defaults for
/// any unspecified field and validates the result.
///
/// ```
/// use colexpand::bench::BenchSettingsBuilder;
///
/// let settings = BenchSettingsBuilder::<f64>::default()
///     .nrow(500)
///     .ncol(200)
///     .density(0.05)
///     .build()
///     .unwrap();
/// assert_eq!(settings.iterations, 10);
/// ```

#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct BenchSettings<T: FloatT> {
    ///expected fraction of stored entries
    #[builder(default = "0.1")]
    pub density: f64,

    ///number of rows
    #[builder(default = "10000")]
    pub nrow: usize,

    ///number of columns
    #[builder(default = "10000")]
    pub ncol: usize,

    ///matrix generator seed
    #[builder(default = "DEFAULT_SEED")]
    pub seed: u64,

    ///restrict kernels to every `subset_step`-th row (1 = all rows)
    #[builder(default = "1")]
    pub subset_step: usize,

    ///number of timed passes per kernel
    #[builder(default = "10")]
    pub iterations: u32,

    ///wall clock limit per kernel (seconds).  At least one pass always runs
    #[builder(default = "f64::INFINITY")]
    pub time_limit: f64,

    ///relative tolerance when checking kernel sums against the reference
    #[builder(default = "(1e-9).as_T()")]
    pub tolerance: T,

    ///kernels to run, in order
    #[builder(default = "KernelStrategy::ALL.to_vec()")]
    pub kernels: Vec<KernelStrategy>,

    ///verbose printing
    #[builder(default = "true")]
    pub verbose: bool,
}

impl<T> Default for BenchSettings<T>
where
    T: FloatT,
{
    fn default() -> BenchSettings<T> {
        BenchSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> BenchSettings<T>
where
    T: FloatT,
{
    /// Checks that all settings hold legal values.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_density(self.density)?;
        validate_subset_step(self.subset_step)?;
        validate_iterations(self.iterations)?;
        validate_time_limit(self.time_limit)?;
        validate_tolerance(self.tolerance)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for BenchSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        BenchSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> BenchSettingsBuilder<T>
where
    T: FloatT,
{
    /// check any fields that have been explicitly set
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(density) = self.density {
            validate_density(density)?;
        }
        if let Some(subset_step) = self.subset_step {
            validate_subset_step(subset_step)?;
        }
        if let Some(iterations) = self.iterations {
            validate_iterations(iterations)?;
        }
        if let Some(time_limit) = self.time_limit {
            validate_time_limit(time_limit)?;
        }
        if let Some(tolerance) = self.tolerance {
            validate_tolerance(tolerance)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_density(density: f64) -> Result<(), SettingsError> {
    // NaN fails the range check
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(SettingsError::BadDensity(density))
    }
}

fn validate_subset_step(subset_step: usize) -> Result<(), SettingsError> {
    if subset_step == 0 {
        return Err(SettingsError::BadFieldValue("subset_step"));
    }
    Ok(())
}

fn validate_iterations(iterations: u32) -> Result<(), SettingsError> {
    if iterations == 0 {
        return Err(SettingsError::BadFieldValue("iterations"));
    }
    Ok(())
}

fn validate_time_limit(time_limit: f64) -> Result<(), SettingsError> {
    if time_limit.is_nan() || time_limit <= 0.0 {
        return Err(SettingsError::BadFieldValue("time_limit"));
    }
    Ok(())
}

fn validate_tolerance<T: FloatT>(tolerance: T) -> Result<(), SettingsError> {
    if !tolerance.is_finite() || tolerance <= T::zero() {
        return Err(SettingsError::BadFieldValue("tolerance"));
    }
    Ok(())
}

#[test]
fn test_settings_defaults() {
    let settings = BenchSettings::<f64>::default();
    assert_eq!(settings.density, 0.1);
    assert_eq!(settings.nrow, 10000);
    assert_eq!(settings.ncol, 10000);
    assert_eq!(settings.seed, 1234567);
    assert_eq!(settings.subset_step, 1);
    assert_eq!(settings.tolerance, 1e-9);
    assert_eq!(settings.kernels, KernelStrategy::ALL.to_vec());
    assert!(settings.time_limit.is_infinite());
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_validate() {
    assert!(BenchSettingsBuilder::<f64>::default()
        .density(1.5)
        .build()
        .is_err());
    assert!(BenchSettingsBuilder::<f64>::default()
        .density(f64::NAN)
        .build()
        .is_err());
    assert!(BenchSettingsBuilder::<f64>::default()
        .subset_step(0)
        .build()
        .is_err());
    assert!(BenchSettingsBuilder::<f64>::default()
        .iterations(0)
        .build()
        .is_err());
    assert!(BenchSettingsBuilder::<f64>::default()
        .time_limit(0.)
        .build()
        .is_err());
    assert!(BenchSettingsBuilder::<f32>::default()
        .tolerance(-1e-3)
        .build()
        .is_err());

    // fields modified after building are caught by the struct check
    let mut settings = BenchSettings::<f64>::default();
    settings.density = -0.1;
    assert_eq!(settings.validate(), Err(SettingsError::BadDensity(-0.1)));

    for density in [0., 0.01, 1.] {
        assert!(BenchSettingsBuilder::<f64>::default()
            .density(density)
            .build()
            .is_ok());
    }
}
