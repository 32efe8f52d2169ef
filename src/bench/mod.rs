//! Benchmark driver.
//!
//! [`Benchmark`] generates (or accepts) a matrix, computes the dense
//! direct reference sum and then times repeated passes of each
//! configured kernel, checking every pass against the reference.

mod driver;
mod errors;
mod report;
mod settings;
pub use driver::*;
pub use errors::*;
pub use report::*;
pub use settings::*;
