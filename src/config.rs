//! Per-run parameters shared by every cell.
//!
//! The free functions take gravity, minimum depth and the nodata pair as
//! explicit arguments. [`CellParams`] bundles them for hosts that evaluate
//! many cells with the same settings; its methods forward to the `_safe`
//! kernels unchanged.

use crate::hydraulics::{
    ElevationSign, calculate_courant_number_2d_safe, calculate_courant_number_safe,
    calculate_depth_safe, calculate_flood_hazard_rating_safe, calculate_froude_number_safe,
    calculate_kinetic_energy_safe, calculate_potential_energy_safe, calculate_velocity_safe,
};
use crate::scalar::Scalar;
use crate::tolerance::Nodata;

/// Scalars a host passes to every cell evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellParams<T> {
    /// Gravitational acceleration
    pub gravity: T,
    /// Depth floor used in velocity and Froude denominators
    pub min_depth: T,
    /// Nodata sentinel and tolerance
    pub nodata: Nodata<T>,
    /// Sign convention for depth from elevations
    pub elevation_sign: ElevationSign,
}

impl<T: Scalar> CellParams<T> {
    /// Create parameters with the default (`+1`) elevation sign.
    ///
    /// # Arguments
    /// * `gravity` - Gravitational acceleration
    /// * `min_depth` - Depth floor for divisions
    /// * `nodata` - Nodata sentinel
    /// * `tolerance` - Tolerance for matching the sentinel
    pub fn new(gravity: T, min_depth: T, nodata: T, tolerance: T) -> Self {
        Self {
            gravity,
            min_depth,
            nodata: Nodata::new(nodata, tolerance),
            elevation_sign: ElevationSign::default(),
        }
    }

    /// Set the elevation sign convention.
    pub fn with_elevation_sign(mut self, sign: ElevationSign) -> Self {
        self.elevation_sign = sign;
        self
    }

    /// Set the depth floor.
    pub fn with_min_depth(mut self, min_depth: T) -> Self {
        self.min_depth = min_depth;
        self
    }

    /// Set gravitational acceleration.
    pub fn with_gravity(mut self, gravity: T) -> Self {
        self.gravity = gravity;
        self
    }

    /// Water depth using the configured elevation sign; see [`calculate_depth_safe`].
    #[inline]
    pub fn depth(&self, bed_elevation: T, water_elevation: T) -> T {
        calculate_depth_safe(
            bed_elevation,
            water_elevation,
            self.elevation_sign,
            self.nodata.value(),
            self.nodata.tolerance(),
        )
    }

    /// Depth-averaged velocity floored at `min_depth`; see [`calculate_velocity_safe`].
    #[inline]
    pub fn velocity(&self, discharge: T, depth: T) -> T {
        calculate_velocity_safe(
            discharge,
            depth,
            self.min_depth,
            self.nodata.value(),
            self.nodata.tolerance(),
        )
    }

    /// Froude number with the configured floor and gravity.
    #[inline]
    pub fn froude_number(&self, velocity: T, depth: T) -> T {
        calculate_froude_number_safe(
            velocity,
            depth,
            self.min_depth,
            self.gravity,
            self.nodata.value(),
            self.nodata.tolerance(),
        )
    }

    /// Kinetic energy per unit mass, or nodata.
    #[inline]
    pub fn kinetic_energy(&self, velocity: T) -> T {
        calculate_kinetic_energy_safe(velocity, self.nodata.value(), self.nodata.tolerance())
    }

    /// Potential energy per unit mass under the configured gravity.
    #[inline]
    pub fn potential_energy(&self, water_elevation: T) -> T {
        calculate_potential_energy_safe(
            water_elevation,
            self.gravity,
            self.nodata.value(),
            self.nodata.tolerance(),
        )
    }

    /// 1D Courant number; only `velocity` is checked for nodata.
    #[inline]
    pub fn courant_number(&self, velocity: T, dt: T, dx: T) -> T {
        calculate_courant_number_safe(
            velocity,
            dt,
            dx,
            self.nodata.value(),
            self.nodata.tolerance(),
        )
    }

    /// 2D Courant number; see [`calculate_courant_number_2d_safe`] for the guarded inputs.
    #[inline]
    pub fn courant_number_2d(&self, velocity_x: T, velocity_y: T, dt: T, dx: T, dy: T) -> T {
        calculate_courant_number_2d_safe(
            velocity_x,
            velocity_y,
            dt,
            dx,
            dy,
            self.nodata.value(),
            self.nodata.tolerance(),
        )
    }

    /// Flood hazard rating; coefficients are not checked for nodata.
    #[inline]
    pub fn flood_hazard_rating(&self, depth: T, velocity: T, const_coef: T, debris_coef: T) -> T {
        calculate_flood_hazard_rating_safe(
            depth,
            velocity,
            const_coef,
            debris_coef,
            self.nodata.value(),
            self.nodata.tolerance(),
        )
    }
}
