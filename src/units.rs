//! Unit-system rescaling and angle conversion.

use crate::scalar::Scalar;
use crate::tolerance::are_equal;

/// Multiply `value` in place by `factor`.
#[inline]
pub fn change_unit_system<T: Scalar>(value: &mut T, factor: T) {
    *value = *value * factor;
}

/// Rescale `value` unless it equals `nodata`.
///
/// # Example
///
/// ```
/// use hydro_ops::change_unit_system_safe;
///
/// let mut v = 999.0;
/// change_unit_system_safe(&mut v, 2.0, 999.0, 0.001);
/// assert_eq!(v, 999.0);
/// ```
#[inline]
pub fn change_unit_system_safe<T: Scalar>(value: &mut T, factor: T, nodata: T, tolerance: T) {
    if are_equal(*value, nodata, tolerance) {
        return;
    }
    change_unit_system(value, factor);
}

/// Degrees to radians: `deg * π / 180`.
#[inline]
pub fn deg_to_rad<T: Scalar>(deg: T) -> T {
    deg * T::PI() / T::lit(180.0)
}

/// Degrees to radians, passing `nodata` through unchanged.
#[inline]
pub fn deg_to_rad_safe<T: Scalar>(deg: T, nodata: T, tolerance: T) -> T {
    if are_equal(deg, nodata, tolerance) {
        return nodata;
    }
    deg_to_rad(deg)
}

/// Radians to degrees: `rad * 180 / π`.
#[inline]
pub fn rad_to_deg<T: Scalar>(rad: T) -> T {
    rad * T::lit(180.0) / T::PI()
}

/// Radians to degrees, passing `nodata` through unchanged.
#[inline]
pub fn rad_to_deg_safe<T: Scalar>(rad: T, nodata: T, tolerance: T) -> T {
    if are_equal(rad, nodata, tolerance) {
        return nodata;
    }
    rad_to_deg(rad)
}
