//! Planar vector geometry on fixed-size buffers.
//!
//! Points and vectors are `[T; 2]`; rotation matrices are row-major `[T; 4]`.
//! Mutating operations work in place on `&mut [T; 2]` and have pure
//! counterparts (`translated`, `rotated`, `rotated_about`) returning a new point.
//!
//! # Example
//!
//! ```
//! use hydro_ops::geometry::{rotation_matrix, rotated_about, calculate_magnitude};
//!
//! // Quarter turn of (2, 1) about (1, 1) lands on (1, 2)
//! let m = rotation_matrix(std::f64::consts::FRAC_PI_2);
//! let p = rotated_about([2.0, 1.0], &[1.0, 1.0], &m);
//! assert!((p[0] - 1.0).abs() < 1e-12 && (p[1] - 2.0).abs() < 1e-12);
//!
//! assert_eq!(calculate_magnitude(3.0, 4.0), 5.0);
//! ```

mod transform;
mod vector;

/// A 2D point or vector `(x, y)`.
pub type Point2<T> = [T; 2];

/// A 2×2 matrix in row-major order.
pub type RotationMatrix<T> = [T; 4];

pub use transform::{
    rotate_point, rotate_point_about, rotate_point_about_safe, rotate_point_safe, rotated,
    rotated_about, rotation_matrix, set_rotation_matrix, translate_point, translate_point_safe,
    translated,
};
pub use vector::{
    UNIT_VECTOR_MIN_MAGNITUDE, calculate_direction, calculate_direction_safe, calculate_magnitude,
    calculate_magnitude_safe, calculate_normal_component, calculate_normal_component_safe,
    calculate_parallel_component, calculate_parallel_component_safe, calculate_unit_vector,
    cross_product, dot_product,
};
