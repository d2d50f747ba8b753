//! Specific kinetic and potential energy.

use crate::scalar::Scalar;
use crate::tolerance::are_equal;

/// Kinetic energy per unit mass, `0.5 · u²`.
#[inline]
pub fn calculate_kinetic_energy<T: Scalar>(velocity: T) -> T {
    T::lit(0.5) * velocity * velocity
}

/// Kinetic energy, or `nodata` if velocity is nodata.
#[inline]
pub fn calculate_kinetic_energy_safe<T: Scalar>(velocity: T, nodata: T, tolerance: T) -> T {
    if are_equal(velocity, nodata, tolerance) {
        return nodata;
    }
    calculate_kinetic_energy(velocity)
}

/// Potential energy per unit mass, `η · g`.
#[inline]
pub fn calculate_potential_energy<T: Scalar>(water_elevation: T, gravity: T) -> T {
    water_elevation * gravity
}

/// Potential energy, or `nodata` if the water elevation is nodata.
#[inline]
pub fn calculate_potential_energy_safe<T: Scalar>(
    water_elevation: T,
    gravity: T,
    nodata: T,
    tolerance: T,
) -> T {
    if are_equal(water_elevation, nodata, tolerance) {
        return nodata;
    }
    calculate_potential_energy(water_elevation, gravity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kinetic_energy() {
        assert_eq!(calculate_kinetic_energy(2.0), 2.0);
        assert_eq!(calculate_kinetic_energy(-3.0f32), 4.5);
        assert_eq!(calculate_kinetic_energy_safe(-999.0, -999.0, 0.01), -999.0);
        assert_eq!(calculate_kinetic_energy_safe(1.0, -999.0, 0.01), 0.5);
    }

    #[test]
    fn test_potential_energy() {
        assert_relative_eq!(
            calculate_potential_energy(2.0, 9.81),
            19.62,
            max_relative = 1e-12
        );
        assert_eq!(
            calculate_potential_energy_safe(-999.0, 9.81, -999.0, 0.01),
            -999.0
        );
        assert_relative_eq!(
            calculate_potential_energy_safe(1.5, 9.81, -999.0, 0.01),
            14.715,
            max_relative = 1e-12
        );
    }
}
