//! Tolerance-based equality and the nodata sentinel.
//!
//! Every `_safe` kernel gates on [`are_equal`] before touching its inputs.
//! The sentinel is chosen by the caller per call (e.g. `9999.0`, `-999.0`);
//! there is no library-wide nodata constant.

use crate::scalar::Scalar;

/// Return true if `|a - b| < tolerance`.
///
/// The comparison is strict: a difference exactly equal to `tolerance`
/// is *not* equal. A negative tolerance never matches.
///
/// # Example
///
/// ```
/// use hydro_ops::are_equal;
///
/// assert!(are_equal(9999.0, 9999.001, 0.01));
/// assert!(!are_equal(9999.0, 9999.001, 0.001));
/// ```
#[inline(always)]
pub fn are_equal<T: Scalar>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() < tolerance
}

/// A nodata sentinel together with its matching tolerance.
///
/// Convenience for hosts that carry the pair around; the `_safe` free
/// functions still take `nodata` and `tolerance` as separate arguments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nodata<T> {
    value: T,
    tolerance: T,
}

impl<T: Scalar> Nodata<T> {
    /// Create a sentinel pair.
    pub fn new(value: T, tolerance: T) -> Self {
        Self { value, tolerance }
    }

    /// The sentinel value.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// The matching tolerance.
    #[inline]
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// True if `x` equals the sentinel within tolerance.
    #[inline(always)]
    pub fn matches(&self, x: T) -> bool {
        are_equal(x, self.value, self.tolerance)
    }

    /// True if any of `xs` equals the sentinel.
    #[inline]
    pub fn any(&self, xs: &[T]) -> bool {
        xs.iter().any(|&x| self.matches(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_are_equal_f64() {
        assert!(are_equal(9999.0, 9999.001, 0.01));
        assert!(!are_equal(9999.0, 9999.001, 0.001));
    }

    #[test]
    fn test_are_equal_f32() {
        assert!(are_equal(-9.0f32, -9.001f32, 0.01f32));
        assert!(!are_equal(9.0f32, 9.001f32, 0.001f32));
    }

    #[test]
    fn test_are_equal_boundary_is_exclusive() {
        // 0.5 and 0.25 are exact in binary, so the difference is exactly 0.25
        assert!(!are_equal(0.5, 0.25, 0.25));
        assert!(are_equal(0.5, 0.25, 0.250001));
        assert!(!are_equal(1.0f32, 1.5f32, 0.5f32));
    }

    #[test]
    fn test_are_equal_symmetric() {
        assert_eq!(are_equal(1.0, 1.3, 0.5), are_equal(1.3, 1.0, 0.5));
    }

    #[test]
    fn test_negative_tolerance_never_matches() {
        assert!(!are_equal(1.0, 1.0, -0.1));
    }

    #[test]
    fn test_nodata_matches() {
        let nd = Nodata::new(-999.0, 0.01);
        assert!(nd.matches(-999.0));
        assert!(nd.matches(-999.005));
        assert!(!nd.matches(-998.0));
        assert_eq!(nd.value(), -999.0);
        assert_eq!(nd.tolerance(), 0.01);
    }

    #[test]
    fn test_nodata_any() {
        let nd = Nodata::new(9999.0f32, 0.001);
        assert!(nd.any(&[1.0, 9999.0]));
        assert!(!nd.any(&[1.0, 2.0]));
        assert!(!nd.any(&[]));
    }
}
