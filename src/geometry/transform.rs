//! Translation and rotation of 2D points.

use super::{Point2, RotationMatrix};
use crate::scalar::Scalar;
use crate::tolerance::are_equal;

#[inline(always)]
fn point_is_nodata<T: Scalar>(point: &Point2<T>, nodata: T, tolerance: T) -> bool {
    are_equal(point[0], nodata, tolerance) || are_equal(point[1], nodata, tolerance)
}

/// Add `translation` to `point` in place.
#[inline]
pub fn translate_point<T: Scalar>(point: &mut Point2<T>, translation: &Point2<T>) {
    point[0] = point[0] + translation[0];
    point[1] = point[1] + translation[1];
}

/// Translate `point` unless one of its coordinates is nodata.
///
/// The translation itself is not checked.
#[inline]
pub fn translate_point_safe<T: Scalar>(
    point: &mut Point2<T>,
    translation: &Point2<T>,
    nodata: T,
    tolerance: T,
) {
    if point_is_nodata(point, nodata, tolerance) {
        return;
    }
    translate_point(point, translation);
}

/// Pure form of [`translate_point`].
#[inline]
pub fn translated<T: Scalar>(mut point: Point2<T>, translation: &Point2<T>) -> Point2<T> {
    translate_point(&mut point, translation);
    point
}

/// Fill `matrix` with the counter-clockwise rotation by `angle_rad`:
/// `[cos θ, −sin θ, sin θ, cos θ]`.
#[inline]
pub fn set_rotation_matrix<T: Scalar>(matrix: &mut RotationMatrix<T>, angle_rad: T) {
    let (sin, cos) = angle_rad.sin_cos();
    matrix[0] = cos;
    matrix[1] = -sin;
    matrix[2] = sin;
    matrix[3] = cos;
}

/// Build the rotation matrix for `angle_rad`.
#[inline]
pub fn rotation_matrix<T: Scalar>(angle_rad: T) -> RotationMatrix<T> {
    let mut matrix = [T::zero(); 4];
    set_rotation_matrix(&mut matrix, angle_rad);
    matrix
}

/// Multiply `point` by `matrix` in place.
#[inline]
pub fn rotate_point<T: Scalar>(point: &mut Point2<T>, matrix: &RotationMatrix<T>) {
    let [p0, p1] = *point;
    point[0] = matrix[0] * p0 + matrix[1] * p1;
    point[1] = matrix[2] * p0 + matrix[3] * p1;
}

/// Rotate `point` unless one of its coordinates is nodata.
#[inline]
pub fn rotate_point_safe<T: Scalar>(
    point: &mut Point2<T>,
    matrix: &RotationMatrix<T>,
    nodata: T,
    tolerance: T,
) {
    if point_is_nodata(point, nodata, tolerance) {
        return;
    }
    rotate_point(point, matrix);
}

/// Pure form of [`rotate_point`].
#[inline]
pub fn rotated<T: Scalar>(mut point: Point2<T>, matrix: &RotationMatrix<T>) -> Point2<T> {
    rotate_point(&mut point, matrix);
    point
}

/// Rotate `point` about the pivot `origin` in place.
///
/// Translates by `-origin`, rotates, then translates back by `origin`.
#[inline]
pub fn rotate_point_about<T: Scalar>(
    point: &mut Point2<T>,
    origin: &Point2<T>,
    matrix: &RotationMatrix<T>,
) {
    translate_point(point, &[-origin[0], -origin[1]]);
    rotate_point(point, matrix);
    translate_point(point, origin);
}

/// Rotate about `origin` unless one of the point's coordinates is nodata.
///
/// Only the point is checked, not the pivot.
#[inline]
pub fn rotate_point_about_safe<T: Scalar>(
    point: &mut Point2<T>,
    origin: &Point2<T>,
    matrix: &RotationMatrix<T>,
    nodata: T,
    tolerance: T,
) {
    if point_is_nodata(point, nodata, tolerance) {
        return;
    }
    rotate_point_about(point, origin, matrix);
}

/// Pure form of [`rotate_point_about`].
#[inline]
pub fn rotated_about<T: Scalar>(
    mut point: Point2<T>,
    origin: &Point2<T>,
    matrix: &RotationMatrix<T>,
) -> Point2<T> {
    rotate_point_about(&mut point, origin, matrix);
    point
}
