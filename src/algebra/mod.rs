//! Compressed sparse column storage, row subsets and the column views
//! used to materialize matrix columns into dense buffers.
//!
//! The matrix types themselves live in `matrix_types`.  All buffer math
//! goes through the [`VectorMath`] and [`ScalarMath`] traits.

mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod vecmath;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;

mod csc;
mod rowsubset;

#[cfg(test)]
mod tests;
