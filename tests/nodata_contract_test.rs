//! Integration tests for nodata propagation through the safe kernels.
//!
//! For every guarded input, a sentinel value must come back unchanged
//! (or leave the point untouched) no matter what the other inputs hold.

use hydro_ops::{
    ElevationSign, calculate_courant_number_2d_safe, calculate_courant_number_safe,
    calculate_depth_safe, calculate_direction_safe, calculate_flood_hazard_rating_safe,
    calculate_froude_number_safe, calculate_kinetic_energy_safe, calculate_magnitude_safe,
    calculate_normal_component_safe, calculate_parallel_component_safe,
    calculate_potential_energy_safe, calculate_velocity_safe, change_unit_system_safe,
    deg_to_rad_safe, rad_to_deg_safe, rotate_point_about_safe, rotate_point_safe, rotation_matrix,
    translate_point_safe,
};

/// Sentinels used by different hosts, with the tolerance each is matched at.
const SENTINELS: [(f64, f64); 3] = [(9999.0, 0.01), (-999.0, 0.001), (-9999.0, 1e-6)];

/// Values that must never disturb the guard.
const OTHERS: [f64; 5] = [0.0, -1.5, 2.0, 1e6, f64::INFINITY];

#[test]
fn test_scalar_kernels_return_nodata() {
    for (nd, tol) in SENTINELS {
        // A value inside the tolerance band still counts as nodata
        let near = nd + 0.5 * tol;
        for x in OTHERS {
            assert_eq!(deg_to_rad_safe(near, nd, tol), nd);
            assert_eq!(rad_to_deg_safe(near, nd, tol), nd);

            assert_eq!(calculate_magnitude_safe(nd, x, nd, tol), nd);
            assert_eq!(calculate_magnitude_safe(x, near, nd, tol), nd);
            assert_eq!(calculate_direction_safe(nd, x, nd, tol), nd);
            assert_eq!(calculate_direction_safe(x, nd, nd, tol), nd);

            for sign in [ElevationSign::Positive, ElevationSign::Negative] {
                assert_eq!(calculate_depth_safe(nd, x, sign, nd, tol), nd);
                assert_eq!(calculate_depth_safe(x, nd, sign, nd, tol), nd);
            }

            assert_eq!(calculate_velocity_safe(nd, x, 1e-3, nd, tol), nd);
            assert_eq!(calculate_velocity_safe(x, nd, 1e-3, nd, tol), nd);
            assert_eq!(calculate_froude_number_safe(nd, x, 1e-3, 9.81, nd, tol), nd);
            assert_eq!(calculate_froude_number_safe(x, nd, 1e-3, 9.81, nd, tol), nd);

            assert_eq!(calculate_kinetic_energy_safe(nd, nd, tol), nd);
            assert_eq!(calculate_potential_energy_safe(nd, x, nd, tol), nd);

            assert_eq!(calculate_courant_number_safe(nd, x, 1.0, nd, tol), nd);
            assert_eq!(
                calculate_courant_number_2d_safe(nd, x, 1.0, 1.0, 1.0, nd, tol),
                nd
            );
            assert_eq!(
                calculate_courant_number_2d_safe(x, nd, 1.0, 1.0, 1.0, nd, tol),
                nd
            );

            assert_eq!(
                calculate_flood_hazard_rating_safe(nd, x, 0.5, 1.0, nd, tol),
                nd
            );
            assert_eq!(
                calculate_flood_hazard_rating_safe(x, nd, 0.5, 1.0, nd, tol),
                nd
            );

            let start = [0.0, 0.0];
            let end = [1.0, 1.0];
            assert_eq!(
                calculate_parallel_component_safe(&[nd, x], &start, &end, nd, tol),
                nd
            );
            assert_eq!(
                calculate_normal_component_safe(&[x, nd], &start, &end, nd, tol),
                nd
            );
        }
    }
}

#[test]
fn test_mutating_kernels_skip_nodata() {
    let m = rotation_matrix(0.7);
    for (nd, tol) in SENTINELS {
        for x in OTHERS {
            let mut v = nd;
            change_unit_system_safe(&mut v, x, nd, tol);
            assert_eq!(v, nd);

            for original in [[nd, x], [x, nd]] {
                let mut p = original;
                translate_point_safe(&mut p, &[3.0, 4.0], nd, tol);
                assert_eq!(p, original);

                let mut p = original;
                rotate_point_safe(&mut p, &m, nd, tol);
                assert_eq!(p, original);

                let mut p = original;
                rotate_point_about_safe(&mut p, &[1.0, 1.0], &m, nd, tol);
                assert_eq!(p, original);
            }
        }
    }
}

#[test]
fn test_outside_tolerance_is_computed() {
    // Just outside the band of 9999 ± 0.01
    let x = 9999.02;
    let mut v = x;
    change_unit_system_safe(&mut v, 2.0, 9999.0, 0.01);
    assert_eq!(v, 2.0 * x);
    assert_eq!(calculate_kinetic_energy_safe(2.0, 9999.0, 0.01), 2.0);
}

#[test]
fn test_f32_nodata() {
    let nd = -999.0f32;
    let tol = 0.01f32;
    assert_eq!(deg_to_rad_safe(nd, nd, tol), nd);
    assert_eq!(calculate_velocity_safe(1.0, nd, 1e-3, nd, tol), nd);
    let mut p = [nd, 0.0f32];
    translate_point_safe(&mut p, &[1.0, 1.0], nd, tol);
    assert_eq!(p, [nd, 0.0]);
}
