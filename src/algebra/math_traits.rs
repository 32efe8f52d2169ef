use super::FloatT;

// Buffer arithmetic for the column kernels goes through these
// traits, implemented generically for floats of type FloatT.

/// Scalar operations on [`FloatT`](crate::algebra::FloatT)

pub trait ScalarMath {
    type T: FloatT;

    /// Relative comparison.
    ///
    /// True if `self == other` exactly, or if the two values differ
    /// by no more than `rtol` times the larger of their magnitudes.
    /// NaN compares unequal to everything.
    fn approx_eq(&self, other: Self::T, rtol: Self::T) -> bool;

    /// Relative difference `|self - other| / max(|self|, |other|)`,
    /// or zero when the values are exactly equal.
    fn rel_diff(&self, other: Self::T) -> Self::T;
}

/// Vector operations on slices of [`FloatT`](crate::algebra::FloatT)

pub trait VectorMath {
    type T;

    /// set all elements to the same value
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Apply an elementwise operation on a vector.
    fn scalarop(&mut self, op: impl Fn(Self::T) -> Self::T) -> &mut Self;

    /// Sum of elements, accumulated left to right.
    fn sum(&self) -> Self::T;
}
