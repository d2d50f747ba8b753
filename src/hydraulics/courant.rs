//! Courant numbers for explicit time-step stability checks.

use crate::scalar::Scalar;
use crate::tolerance::are_equal;

/// 1D Courant number `u · Δt / Δx`.
#[inline]
pub fn calculate_courant_number<T: Scalar>(velocity: T, dt: T, dx: T) -> T {
    velocity * dt / dx
}

/// 1D Courant number, or `nodata` if velocity is nodata.
#[inline]
pub fn calculate_courant_number_safe<T: Scalar>(
    velocity: T,
    dt: T,
    dx: T,
    nodata: T,
    tolerance: T,
) -> T {
    if are_equal(velocity, nodata, tolerance) {
        return nodata;
    }
    calculate_courant_number(velocity, dt, dx)
}

/// 2D Courant number `u Δt / Δx + v Δt / Δy`.
#[inline]
pub fn calculate_courant_number_2d<T: Scalar>(
    velocity_x: T,
    velocity_y: T,
    dt: T,
    dx: T,
    dy: T,
) -> T {
    calculate_courant_number(velocity_x, dt, dx) + calculate_courant_number(velocity_y, dt, dy)
}

/// 2D Courant number, or `nodata` if either velocity component is nodata.
///
/// The time step and grid spacings are not checked.
#[inline]
pub fn calculate_courant_number_2d_safe<T: Scalar>(
    velocity_x: T,
    velocity_y: T,
    dt: T,
    dx: T,
    dy: T,
    nodata: T,
    tolerance: T,
) -> T {
    if are_equal(velocity_x, nodata, tolerance) || are_equal(velocity_y, nodata, tolerance) {
        return nodata;
    }
    calculate_courant_number_2d(velocity_x, velocity_y, dt, dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ND: f64 = -9999.0;

    #[test]
    fn test_courant_1d() {
        assert_eq!(calculate_courant_number(2.0, 0.5, 10.0), 0.1);
        assert_eq!(calculate_courant_number(-4.0f32, 1.0, 2.0), -2.0);
    }

    #[test]
    fn test_courant_1d_safe() {
        assert_eq!(calculate_courant_number_safe(ND, 1.0, 1.0, ND, 1e-3), ND);
        assert_eq!(calculate_courant_number_safe(1.0, 1.0, 4.0, ND, 1e-3), 0.25);
    }

    #[test]
    fn test_courant_2d_is_sum_of_1d() {
        let c = calculate_courant_number_2d(1.0, 3.0, 2.0, 4.0, 8.0);
        assert_relative_eq!(c, 0.5 + 0.75);
        assert_relative_eq!(
            c,
            calculate_courant_number(1.0, 2.0, 4.0) + calculate_courant_number(3.0, 2.0, 8.0)
        );
    }

    #[test]
    fn test_courant_2d_safe() {
        assert_eq!(
            calculate_courant_number_2d_safe(ND, 1.0, 1.0, 1.0, 1.0, ND, 1e-3),
            ND
        );
        assert_eq!(
            calculate_courant_number_2d_safe(1.0, ND, 1.0, 1.0, 1.0, ND, 1e-3),
            ND
        );
        // Resolutions are not checked
        let c = calculate_courant_number_2d_safe(1.0, 1.0, ND, ND, ND, ND, 1e-3);
        assert_relative_eq!(c, 2.0);
    }
}
