use crate::algebra::FloatT;

/// The element-wise transform applied while materializing columns.
///
/// A fixed, pure stand-in for an expensive non-linear function.
#[inline(always)]
pub fn transform<T: FloatT>(x: T) -> T {
    x.exp()
}

/// `transform(0)`, the value every structural zero maps to.
///
/// Kernels that skip structural zeros compute this once at
/// construction and fill it in wherever no entry is stored.
#[inline]
pub fn transform_of_zero<T: FloatT>() -> T {
    transform(T::zero())
}

#[test]
fn test_transform() {
    assert_eq!(transform(0.0_f64), 1.0);
    assert_eq!(transform_of_zero::<f32>(), 1.0);
    assert_eq!(transform(1.0_f64), std::f64::consts::E);
}
