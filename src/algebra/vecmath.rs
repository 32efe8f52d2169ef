use super::{FloatT, ScalarMath, VectorMath};

impl<T: FloatT> ScalarMath for T {
    type T = T;

    fn approx_eq(&self, other: T, rtol: T) -> bool {
        if *self == other {
            return true;
        }
        // NaN falls through to false here
        (*self - other).abs() <= rtol * T::max(self.abs(), other.abs())
    }

    fn rel_diff(&self, other: T) -> T {
        if *self == other {
            return T::zero();
        }
        (*self - other).abs() / T::max(self.abs(), other.abs())
    }
}

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn set(&mut self, c: T) -> &mut Self {
        self.fill(c);
        self
    }

    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        for x in &mut *self {
            *x = op(*x);
        }
        self
    }

    // NB: left to right, not pairwise.  Kernel sums are compared
    // against each other and must share an accumulation order.
    fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| acc + x)
    }
}

#[test]
fn test_sum() {
    let x = vec![1., -2., 7.];
    assert_eq!(x.sum(), 6.);
    let empty: Vec<f64> = vec![];
    assert_eq!(empty.sum(), 0.);
}

#[test]
fn test_sum_order() {
    // left to right: (1e16 + 1) + -1e16 loses the 1
    let x = vec![1e16, 1., -1e16];
    assert_eq!(x.sum(), 0.);
}

#[test]
fn test_set_scalarop() {
    let mut x = vec![0.; 4];
    x.set(2.).scalarop(|v| v * v);
    assert_eq!(x, vec![4.; 4]);
}

#[test]
fn test_approx_eq() {
    assert!(1.0_f64.approx_eq(1.0 + 1e-12, 1e-9));
    assert!(!1.0_f64.approx_eq(1.0 + 1e-6, 1e-9));
    assert!(0.0_f64.approx_eq(0.0, 1e-9));
    assert!(!f64::NAN.approx_eq(f64::NAN, 1e-9));
    assert!(f64::INFINITY.approx_eq(f64::INFINITY, 1e-9));
    assert_eq!(2.0_f64.rel_diff(2.0), 0.);
    assert_eq!(2.0_f64.rel_diff(1.0), 0.5);
}
