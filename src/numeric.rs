//! Scalar building blocks shared by the bracket search and the interpolation engine.

use num_traits::Float;

/// Relative tolerance, in multiples of machine epsilon, for deciding that two
/// breakpoint-scale values are the same number.
pub const APPROX_EQ_ULPS: f64 = 5.0;

/// Whether `a` and `b` are equal to within a tolerance scaled to the larger
/// of their magnitudes.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx::relative_eq!(
        a,
        b,
        epsilon = 0.0,
        max_relative = APPROX_EQ_ULPS * f64::EPSILON
    )
}

/// Linear interpolation from `a` to `b` at normalized coordinate `t`.
///
/// Returns `a` exactly at `t == 0` and `b` exactly at `t == 1`, so that
/// evaluating on a grid point never blends in rounding error, or the NaN
/// from `0 * inf` when the other end is infinite or `b - a` overflows.
/// Values of `t` outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    if t == T::zero() {
        a
    } else if t == T::one() {
        b
    } else {
        a + t * (b - a)
    }
}

/// Inverse of [`lerp`]: the normalized coordinate of `x` between `a` and `b`.
///
/// If `a` and `b` are approximately equal there is no meaningful interval,
/// and the result is zero rather than a division by (nearly) zero.
#[inline]
pub fn ilerp(a: f64, b: f64, x: f64) -> f64 {
    if approx_eq(a, b) {
        return 0.0;
    }
    (x - a) / (b - a)
}
