//! Magnitude, direction and projections of 2D vectors.

use super::Point2;
use crate::scalar::Scalar;
use crate::tolerance::are_equal;

/// Magnitudes below this normalize to the zero vector.
pub const UNIT_VECTOR_MIN_MAGNITUDE: f64 = 1e-7;

/// Euclidean length `sqrt(x² + y²)`.
///
/// The squares are not rescaled, so components beyond roughly the square
/// root of `T::max_value()` give an infinite magnitude (about `1e154` for
/// `f64`, `1e19` for `f32`).
#[inline]
pub fn calculate_magnitude<T: Scalar>(x: T, y: T) -> T {
    (x * x + y * y).sqrt()
}

/// Euclidean length, or `nodata` if either component is nodata.
#[inline]
pub fn calculate_magnitude_safe<T: Scalar>(x: T, y: T, nodata: T, tolerance: T) -> T {
    if are_equal(x, nodata, tolerance) || are_equal(y, nodata, tolerance) {
        return nodata;
    }
    calculate_magnitude(x, y)
}

/// Direction angle `atan2(y, x)` in radians, range (−π, π].
#[inline]
pub fn calculate_direction<T: Scalar>(x: T, y: T) -> T {
    y.atan2(x)
}

/// Direction angle, or `nodata` if either component is nodata.
#[inline]
pub fn calculate_direction_safe<T: Scalar>(x: T, y: T, nodata: T, tolerance: T) -> T {
    if are_equal(x, nodata, tolerance) || are_equal(y, nodata, tolerance) {
        return nodata;
    }
    calculate_direction(x, y)
}

/// Normalize `vector` to unit length.
///
/// Returns `[0, 0]` when the magnitude is below [`UNIT_VECTOR_MIN_MAGNITUDE`].
/// It also returns `[0, 0]` when [`calculate_magnitude`] overflows to
/// infinity, since every finite component divided by it is zero.
/// There is no nodata-aware variant; validate inputs before calling.
#[inline]
pub fn calculate_unit_vector<T: Scalar>(vector: &Point2<T>) -> Point2<T> {
    let mag = calculate_magnitude(vector[0], vector[1]);
    if mag < T::lit(UNIT_VECTOR_MIN_MAGNITUDE) {
        [T::zero(), T::zero()]
    } else {
        [vector[0] / mag, vector[1] / mag]
    }
}

/// `a · b`
#[inline]
pub fn dot_product<T: Scalar>(a: &Point2<T>, b: &Point2<T>) -> T {
    a[0] * b[0] + a[1] * b[1]
}

/// Scalar 2D cross product `a × b = a.x b.y − a.y b.x`.
#[inline]
pub fn cross_product<T: Scalar>(a: &Point2<T>, b: &Point2<T>) -> T {
    a[0] * b[1] - a[1] * b[0]
}

#[inline]
fn line_direction<T: Scalar>(line_start: &Point2<T>, line_end: &Point2<T>) -> Point2<T> {
    calculate_unit_vector(&[line_end[0] - line_start[0], line_end[1] - line_start[1]])
}

/// Component of `vec` along the line from `line_start` to `line_end`.
///
/// A degenerate (zero-length) line yields 0.
#[inline]
pub fn calculate_parallel_component<T: Scalar>(
    vec: &Point2<T>,
    line_start: &Point2<T>,
    line_end: &Point2<T>,
) -> T {
    dot_product(vec, &line_direction(line_start, line_end))
}

/// Parallel component, or `nodata` if a component of `vec` is nodata.
///
/// The line endpoints are not checked.
#[inline]
pub fn calculate_parallel_component_safe<T: Scalar>(
    vec: &Point2<T>,
    line_start: &Point2<T>,
    line_end: &Point2<T>,
    nodata: T,
    tolerance: T,
) -> T {
    if are_equal(vec[0], nodata, tolerance) || are_equal(vec[1], nodata, tolerance) {
        return nodata;
    }
    calculate_parallel_component(vec, line_start, line_end)
}

/// Signed component of `vec` normal to the line, `unit_line × vec`.
///
/// Positive when `vec` points to the left of the line direction.
#[inline]
pub fn calculate_normal_component<T: Scalar>(
    vec: &Point2<T>,
    line_start: &Point2<T>,
    line_end: &Point2<T>,
) -> T {
    cross_product(&line_direction(line_start, line_end), vec)
}

/// Normal component, or `nodata` if a component of `vec` is nodata.
///
/// The line endpoints are not checked.
#[inline]
pub fn calculate_normal_component_safe<T: Scalar>(
    vec: &Point2<T>,
    line_start: &Point2<T>,
    line_end: &Point2<T>,
    nodata: T,
    tolerance: T,
) -> T {
    if are_equal(vec[0], nodata, tolerance) || are_equal(vec[1], nodata, tolerance) {
        return nodata;
    }
    calculate_normal_component(vec, line_start, line_end)
}
