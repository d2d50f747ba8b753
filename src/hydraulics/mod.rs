//! Derived hydraulic quantities evaluated per cell.
//!
//! Auxiliary constants (gravity, minimum depth, time step, grid spacing,
//! hazard coefficients) are plain arguments and never nodata-checked.
//!
//! # Example
//!
//! ```
//! use hydro_ops::hydraulics::{calculate_velocity_safe, calculate_froude_number};
//!
//! let nodata = -9999.0;
//! // Unit discharge 2 m²/s over 0.5 m of water
//! let u = calculate_velocity_safe(2.0, 0.5, 1e-3, nodata, 1e-6);
//! assert_eq!(u, 4.0);
//!
//! let fr = calculate_froude_number(u, 0.5, 1e-3, 9.81);
//! assert!(fr > 1.0); // supercritical
//! ```

mod courant;
mod energy;
mod flow;
mod hazard;

pub use courant::{
    calculate_courant_number, calculate_courant_number_2d, calculate_courant_number_2d_safe,
    calculate_courant_number_safe,
};
pub use energy::{
    calculate_kinetic_energy, calculate_kinetic_energy_safe, calculate_potential_energy,
    calculate_potential_energy_safe,
};
pub use flow::{
    ElevationSign, calculate_depth, calculate_depth_safe, calculate_froude_number,
    calculate_froude_number_safe, calculate_velocity, calculate_velocity_safe,
};
pub use hazard::{
    DebrisCategory, PASTURE_ARABLE, URBAN, UnrecognizedCode, WOODLAND, calculate_debris_coefficient,
    calculate_debris_coefficient_code, calculate_flood_hazard_rating,
    calculate_flood_hazard_rating_safe,
};
