//! Flow depth, depth-averaged velocity and Froude number.

use crate::scalar::Scalar;
use crate::tolerance::are_equal;

/// Sign applied to the water elevation when forming a depth.
///
/// Depth is `bed_elevation + sign · water_elevation`. Which sign is right
/// depends on whether the host stores bed elevation as positive-down depth
/// below datum or as positive-up terrain height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElevationSign {
    /// `bed + water`
    #[default]
    Positive,
    /// `bed - water`
    Negative,
}

impl ElevationSign {
    /// Map an integer convention flag: negative flags mean [`Self::Negative`].
    pub fn from_flag(flag: i32) -> Self {
        if flag < 0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// ±1 as a scalar.
    #[inline(always)]
    pub fn sign<T: Scalar>(self) -> T {
        match self {
            Self::Positive => T::one(),
            Self::Negative => -T::one(),
        }
    }
}

/// Water depth `bed_elevation + sign · water_elevation`.
#[inline]
pub fn calculate_depth<T: Scalar>(bed_elevation: T, water_elevation: T, sign: ElevationSign) -> T {
    bed_elevation + sign.sign::<T>() * water_elevation
}

/// Water depth, or `nodata` if either elevation is nodata.
#[inline]
pub fn calculate_depth_safe<T: Scalar>(
    bed_elevation: T,
    water_elevation: T,
    sign: ElevationSign,
    nodata: T,
    tolerance: T,
) -> T {
    if are_equal(bed_elevation, nodata, tolerance) || are_equal(water_elevation, nodata, tolerance)
    {
        return nodata;
    }
    calculate_depth(bed_elevation, water_elevation, sign)
}

/// Velocity `discharge / max(depth, min_depth)`.
///
/// `min_depth` floors the denominator for near-dry cells.
#[inline]
pub fn calculate_velocity<T: Scalar>(discharge: T, depth: T, min_depth: T) -> T {
    discharge / depth.max(min_depth)
}

/// Velocity, or `nodata` if discharge or depth is nodata.
#[inline]
pub fn calculate_velocity_safe<T: Scalar>(
    discharge: T,
    depth: T,
    min_depth: T,
    nodata: T,
    tolerance: T,
) -> T {
    if are_equal(discharge, nodata, tolerance) || are_equal(depth, nodata, tolerance) {
        return nodata;
    }
    calculate_velocity(discharge, depth, min_depth)
}

/// Froude number `velocity / sqrt(g · max(depth, min_depth))`.
#[inline]
pub fn calculate_froude_number<T: Scalar>(velocity: T, depth: T, min_depth: T, gravity: T) -> T {
    velocity / (gravity * depth.max(min_depth)).sqrt()
}

/// Froude number, or `nodata` if velocity or depth is nodata.
#[inline]
pub fn calculate_froude_number_safe<T: Scalar>(
    velocity: T,
    depth: T,
    min_depth: T,
    gravity: T,
    nodata: T,
    tolerance: T,
) -> T {
    if are_equal(velocity, nodata, tolerance) || are_equal(depth, nodata, tolerance) {
        return nodata;
    }
    calculate_froude_number(velocity, depth, min_depth, gravity)
}
