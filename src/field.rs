//! Cell-wise evaluation of the safe kernels over whole fields.
//!
//! A field is a slice with one value per cell, in any order the host uses,
//! as long as all fields passed together are cell-aligned. Every output cell
//! is the `_safe` kernel applied to the matching input cells, so nodata
//! propagates exactly as it does per cell.
//!
//! With the `parallel` feature, `*_parallel` variants distribute cells over
//! the rayon thread pool and produce identical results.
//!
//! # Example
//!
//! ```
//! use hydro_ops::{CellParams, field};
//!
//! let params = CellParams::new(9.81, 1e-3, -9999.0, 1e-6);
//! let bed = [1.0, -9999.0, 0.5];
//! let water = [0.2, 0.3, 0.0];
//! let depth = field::depth_field(&bed, &water, &params).unwrap();
//! assert_eq!(depth, vec![1.2, -9999.0, 0.5]);
//!
//! let summary = field::summarize(&depth, &params.nodata);
//! assert_eq!(summary.nodata_cells, 1);
//! assert_eq!(summary.max, Some(1.2));
//! ```

use std::fmt;

use crate::config::CellParams;
use crate::error::{KernelError, Result};
use crate::hydraulics::{DebrisCategory, calculate_debris_coefficient};
use crate::scalar::Scalar;
use crate::tolerance::Nodata;

fn check_len(field: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(KernelError::LengthMismatch {
            field,
            expected,
            found,
        });
    }
    Ok(())
}

/// Hazard rating for one cell with its debris coefficient from land cover.
#[inline]
fn hazard_cell<T: Scalar>(
    depth: T,
    velocity: T,
    category: DebrisCategory,
    const_coef: T,
    params: &CellParams<T>,
) -> T {
    let nodata = &params.nodata;
    if nodata.matches(depth) || nodata.matches(velocity) {
        return nodata.value();
    }
    let debris = calculate_debris_coefficient(depth, velocity, category);
    params.flood_hazard_rating(depth, velocity, const_coef, debris)
}

/// Depth for every cell from bed and water elevations.
pub fn depth_field<T: Scalar>(
    bed_elevation: &[T],
    water_elevation: &[T],
    params: &CellParams<T>,
) -> Result<Vec<T>> {
    check_len(
        "water_elevation",
        bed_elevation.len(),
        water_elevation.len(),
    )?;
    Ok(bed_elevation
        .iter()
        .zip(water_elevation)
        .map(|(&b, &w)| params.depth(b, w))
        .collect())
}

/// Velocity for every cell from discharge and depth.
pub fn velocity_field<T: Scalar>(
    discharge: &[T],
    depth: &[T],
    params: &CellParams<T>,
) -> Result<Vec<T>> {
    check_len("depth", discharge.len(), depth.len())?;
    Ok(discharge
        .iter()
        .zip(depth)
        .map(|(&q, &h)| params.velocity(q, h))
        .collect())
}

/// Froude number for every cell.
pub fn froude_field<T: Scalar>(
    velocity: &[T],
    depth: &[T],
    params: &CellParams<T>,
) -> Result<Vec<T>> {
    check_len("depth", velocity.len(), depth.len())?;
    Ok(velocity
        .iter()
        .zip(depth)
        .map(|(&u, &h)| params.froude_number(u, h))
        .collect())
}

/// Kinetic energy for every cell.
pub fn kinetic_energy_field<T: Scalar>(velocity: &[T], params: &CellParams<T>) -> Vec<T> {
    velocity.iter().map(|&u| params.kinetic_energy(u)).collect()
}

/// Potential energy for every cell.
pub fn potential_energy_field<T: Scalar>(water_elevation: &[T], params: &CellParams<T>) -> Vec<T> {
    water_elevation
        .iter()
        .map(|&eta| params.potential_energy(eta))
        .collect()
}

/// 2D Courant number for every cell on a uniform grid.
pub fn courant_field_2d<T: Scalar>(
    velocity_x: &[T],
    velocity_y: &[T],
    dt: T,
    dx: T,
    dy: T,
    params: &CellParams<T>,
) -> Result<Vec<T>> {
    check_len("velocity_y", velocity_x.len(), velocity_y.len())?;
    Ok(velocity_x
        .iter()
        .zip(velocity_y)
        .map(|(&u, &v)| params.courant_number_2d(u, v, dt, dx, dy))
        .collect())
}

/// Flood hazard rating for every cell, with the debris coefficient
/// looked up from each cell's land cover.
pub fn hazard_field<T: Scalar>(
    depth: &[T],
    velocity: &[T],
    categories: &[DebrisCategory],
    const_coef: T,
    params: &CellParams<T>,
) -> Result<Vec<T>> {
    check_len("velocity", depth.len(), velocity.len())?;
    check_len("categories", depth.len(), categories.len())?;
    Ok(depth
        .iter()
        .zip(velocity)
        .zip(categories)
        .map(|((&d, &v), &cat)| hazard_cell(d, v, cat, const_coef, params))
        .collect())
}

#[cfg(feature = "parallel")]
pub use parallel::{
    courant_field_2d_parallel, depth_field_parallel, froude_field_parallel, hazard_field_parallel,
    velocity_field_parallel,
};

#[cfg(feature = "parallel")]
mod parallel {
    use rayon::prelude::*;

    use super::{check_len, hazard_cell};
    use crate::config::CellParams;
    use crate::error::Result;
    use crate::hydraulics::DebrisCategory;
    use crate::scalar::Scalar;

    /// Parallel [`super::depth_field`].
    pub fn depth_field_parallel<T: Scalar>(
        bed_elevation: &[T],
        water_elevation: &[T],
        params: &CellParams<T>,
    ) -> Result<Vec<T>> {
        check_len(
            "water_elevation",
            bed_elevation.len(),
            water_elevation.len(),
        )?;
        Ok(bed_elevation
            .par_iter()
            .zip(water_elevation)
            .map(|(&b, &w)| params.depth(b, w))
            .collect())
    }

    /// Parallel [`super::velocity_field`].
    pub fn velocity_field_parallel<T: Scalar>(
        discharge: &[T],
        depth: &[T],
        params: &CellParams<T>,
    ) -> Result<Vec<T>> {
        check_len("depth", discharge.len(), depth.len())?;
        Ok(discharge
            .par_iter()
            .zip(depth)
            .map(|(&q, &h)| params.velocity(q, h))
            .collect())
    }

    /// Parallel [`super::froude_field`].
    pub fn froude_field_parallel<T: Scalar>(
        velocity: &[T],
        depth: &[T],
        params: &CellParams<T>,
    ) -> Result<Vec<T>> {
        check_len("depth", velocity.len(), depth.len())?;
        Ok(velocity
            .par_iter()
            .zip(depth)
            .map(|(&u, &h)| params.froude_number(u, h))
            .collect())
    }

    /// Parallel [`super::courant_field_2d`].
    pub fn courant_field_2d_parallel<T: Scalar>(
        velocity_x: &[T],
        velocity_y: &[T],
        dt: T,
        dx: T,
        dy: T,
        params: &CellParams<T>,
    ) -> Result<Vec<T>> {
        check_len("velocity_y", velocity_x.len(), velocity_y.len())?;
        Ok(velocity_x
            .par_iter()
            .zip(velocity_y)
            .map(|(&u, &v)| params.courant_number_2d(u, v, dt, dx, dy))
            .collect())
    }

    /// Parallel [`super::hazard_field`].
    pub fn hazard_field_parallel<T: Scalar>(
        depth: &[T],
        velocity: &[T],
        categories: &[DebrisCategory],
        const_coef: T,
        params: &CellParams<T>,
    ) -> Result<Vec<T>> {
        check_len("velocity", depth.len(), velocity.len())?;
        check_len("categories", depth.len(), categories.len())?;
        Ok(depth
            .par_iter()
            .zip(velocity)
            .zip(categories)
            .map(|((&d, &v), &cat)| hazard_cell(d, v, cat, const_coef, params))
            .collect())
    }
}

/// Bounds and counts over the valid (non-nodata) cells of a field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSummary<T> {
    /// Total number of cells
    pub cells: usize,
    /// Cells equal to the nodata sentinel
    pub nodata_cells: usize,
    /// Smallest valid value
    pub min: Option<T>,
    /// Largest valid value
    pub max: Option<T>,
    /// Mean of the valid values
    pub mean: Option<T>,
}

impl<T: Scalar> FieldSummary<T> {
    /// Number of cells holding a value.
    pub fn valid_cells(&self) -> usize {
        self.cells - self.nodata_cells
    }
}

impl<T: Scalar> fmt::Display for FieldSummary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cells ({} valid, {} nodata)",
            self.cells,
            self.valid_cells(),
            self.nodata_cells
        )?;
        if let (Some(min), Some(max), Some(mean)) = (self.min, self.max, self.mean) {
            write!(f, ", min {:.4}, max {:.4}, mean {:.4}", min, max, mean)?;
        }
        Ok(())
    }
}

/// Summarize `field`, skipping cells that match `nodata`.
pub fn summarize<T: Scalar>(field: &[T], nodata: &Nodata<T>) -> FieldSummary<T> {
    let mut nodata_cells = 0;
    let mut min: Option<T> = None;
    let mut max: Option<T> = None;
    let mut sum = T::zero();

    for &x in field {
        if nodata.matches(x) {
            nodata_cells += 1;
            continue;
        }
        min = Some(min.map_or(x, |m| m.min(x)));
        max = Some(max.map_or(x, |m| m.max(x)));
        sum = sum + x;
    }

    let valid = field.len() - nodata_cells;
    let mean = if valid > 0 {
        Some(sum / T::lit(valid as f64))
    } else {
        None
    };

    FieldSummary {
        cells: field.len(),
        nodata_cells,
        min,
        max,
        mean,
    }
}
