//! __colexpand__ measures the cost of materializing the columns of a
//! compressed sparse column matrix into a dense buffer while applying a
//! non-linear element-wise transform, and summing the result.
//!
//! Four interchangeable kernels are compared:
//!
//! * __dense direct__: expand each column to dense and transform every element
//! * __dense conditional__: expand to dense, transform nonzeros only and use
//!   the precomputed `transform(0)` elsewhere
//! * __sparse expanded__: prefill the buffer with `transform(0)` and
//!   transform explicit nonzeros in place
//! * __sparse indexed__: as above, placing nonzeros through the reverse map
//!   of a row subset
//!
//! All four produce the same sum up to floating point rounding.   The
//! dense direct kernel serves as the reference.
//!
//! ```
//! use colexpand::algebra::CscMatrix;
//! use colexpand::kernels::{ColumnKernel, ColumnKernelT, KernelStrategy};
//!
//! // A =
//! //[ 1.0   ⋅ ]
//! //[  ⋅    ⋅ ]
//! //[ 2.0   ⋅ ]
//! //[  ⋅    ⋅ ]
//! let A: CscMatrix<f64> = CscMatrix::new(4, 2, vec![0, 2, 2], vec![0, 2], vec![1.0, 2.0]);
//!
//! let mut kernel = ColumnKernel::new(KernelStrategy::SparseExpanded, &A, None).unwrap();
//! let sum = kernel.run().unwrap();
//! assert!((sum - 16.10734).abs() < 1e-5);
//! ```
//!
//! The [`bench`] module wraps matrix generation, timing and result
//! checking in a single [`Benchmark`](bench::Benchmark) runner, which is
//! also exposed by the `colexpand` binary.

pub mod algebra;
pub mod bench;
pub mod generator;
pub mod io;
pub mod kernels;
pub mod timers;
