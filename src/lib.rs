//! # hydro-ops
//!
//! Per-cell numeric kernels for 2D hydrodynamic and flood-hazard models.
//!
//! This crate provides two families of pure functions:
//! - Planar vector geometry (magnitude, direction, translation, rotation,
//!   projection onto a reference line)
//! - Derived hydraulic quantities (depth, velocity, Froude number, energy,
//!   Courant number, flood hazard rating, debris coefficient)
//!
//! Every kernel is generic over [`Scalar`] (`f32` or `f64`). Most come in
//! two forms: a raw form that always computes, and a `_safe` form that
//! returns the caller's nodata sentinel (or leaves a point untouched) when
//! a guarded input matches it within tolerance.
//!
//! ```
//! use hydro_ops::{calculate_magnitude_safe, deg_to_rad_safe};
//!
//! assert_eq!(calculate_magnitude_safe(3.0, 4.0, 999.0, 0.01), 5.0);
//! assert_eq!(calculate_magnitude_safe(999.0, 1.0, 999.0, 0.01), 999.0);
//! assert_eq!(deg_to_rad_safe(-999.0, -999.0, 0.01), -999.0);
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod geometry;
pub mod hydraulics;
pub mod scalar;
pub mod tolerance;
pub mod units;

pub use config::CellParams;
pub use error::{KernelError, Result};
pub use scalar::Scalar;
pub use tolerance::{Nodata, are_equal};
pub use units::{
    change_unit_system, change_unit_system_safe, deg_to_rad, deg_to_rad_safe, rad_to_deg,
    rad_to_deg_safe,
};

// Geometry
pub use geometry::{
    Point2, RotationMatrix, calculate_direction, calculate_direction_safe, calculate_magnitude,
    calculate_magnitude_safe, calculate_normal_component, calculate_normal_component_safe,
    calculate_parallel_component, calculate_parallel_component_safe, calculate_unit_vector,
    cross_product, dot_product, rotate_point, rotate_point_about, rotate_point_about_safe,
    rotate_point_safe, rotated, rotated_about, rotation_matrix, set_rotation_matrix,
    translate_point, translate_point_safe, translated,
};

// Hydraulics
pub use hydraulics::{
    DebrisCategory, ElevationSign, PASTURE_ARABLE, URBAN, UnrecognizedCode, WOODLAND,
    calculate_courant_number, calculate_courant_number_2d, calculate_courant_number_2d_safe,
    calculate_courant_number_safe, calculate_debris_coefficient, calculate_debris_coefficient_code,
    calculate_depth, calculate_depth_safe, calculate_flood_hazard_rating,
    calculate_flood_hazard_rating_safe, calculate_froude_number, calculate_froude_number_safe,
    calculate_kinetic_energy, calculate_kinetic_energy_safe, calculate_potential_energy,
    calculate_potential_energy_safe, calculate_velocity, calculate_velocity_safe,
};

// Field diagnostics
pub use field::{FieldSummary, summarize};
