//! Flood hazard rating and the debris coefficient.
//!
//! Based on the Defra/Environment Agency flood risks to people method
//! (R&D report FD2321). The rating is `d + (v + c) + DF`.
//!
//! The debris factor `DF` is a lookup on land cover and depth/velocity band:
//!
//! | band                          | pasture/arable | woodland | urban |
//! |-------------------------------|----------------|----------|-------|
//! | `d > 0.75` or `v > 2.0`       | 0.5            | 1.0      | 1.0   |
//! | `0 ≤ d ≤ 0.25`                | 0              | 0        | 0     |
//! | `0.25 < d ≤ 0.75`             | 0              | 0.5      | 1.0   |
//!
//! Unrecognized categories and negative depths outside the high band give 0.

use crate::error::KernelError;
use crate::scalar::Scalar;
use crate::tolerance::are_equal;

/// Integer code for pasture or arable land.
pub const PASTURE_ARABLE: i32 = 1;
/// Integer code for woodland.
pub const WOODLAND: i32 = 2;
/// Integer code for urban land cover.
pub const URBAN: i32 = 3;

/// Land-cover category driving the debris coefficient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DebrisCategory {
    PastureArable,
    Woodland,
    Urban,
    /// Any other code; contributes no debris.
    Other(UnrecognizedCode),
}

/// Integer code that names no known debris category.
///
/// Only produced by [`DebrisCategory::from_code`], so it never holds
/// [`PASTURE_ARABLE`], [`WOODLAND`] or [`URBAN`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnrecognizedCode(i32);

impl UnrecognizedCode {
    /// The raw integer code.
    #[inline]
    pub fn get(self) -> i32 {
        self.0
    }
}

impl DebrisCategory {
    /// Total conversion from an integer code.
    pub fn from_code(code: i32) -> Self {
        match code {
            PASTURE_ARABLE => Self::PastureArable,
            WOODLAND => Self::Woodland,
            URBAN => Self::Urban,
            other => Self::Other(UnrecognizedCode(other)),
        }
    }

    /// The integer code of this category.
    pub fn code(self) -> i32 {
        match self {
            Self::PastureArable => PASTURE_ARABLE,
            Self::Woodland => WOODLAND,
            Self::Urban => URBAN,
            Self::Other(code) => code.get(),
        }
    }
}

impl TryFrom<i32> for DebrisCategory {
    type Error = KernelError;

    /// Strict conversion; unknown codes are an error.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match Self::from_code(code) {
            Self::Other(code) => Err(KernelError::UnknownDebrisCode(code.get())),
            known => Ok(known),
        }
    }
}

/// Flood hazard rating `depth + (velocity + const_coef) + debris_coef`.
#[inline]
pub fn calculate_flood_hazard_rating<T: Scalar>(
    depth: T,
    velocity: T,
    const_coef: T,
    debris_coef: T,
) -> T {
    depth + (velocity + const_coef) + debris_coef
}

/// Flood hazard rating, or `nodata` if depth or velocity is nodata.
#[inline]
pub fn calculate_flood_hazard_rating_safe<T: Scalar>(
    depth: T,
    velocity: T,
    const_coef: T,
    debris_coef: T,
    nodata: T,
    tolerance: T,
) -> T {
    if are_equal(velocity, nodata, tolerance) || are_equal(depth, nodata, tolerance) {
        return nodata;
    }
    calculate_flood_hazard_rating(depth, velocity, const_coef, debris_coef)
}

/// Debris coefficient for a cell from depth, velocity and land cover.
///
/// `0.75` and `2.0` are exclusive lower bounds of the high band;
/// `0.25` and `0.75` are inclusive upper bounds of the low and mid bands.
pub fn calculate_debris_coefficient<T: Scalar>(
    depth: T,
    velocity: T,
    category: DebrisCategory,
) -> T {
    let shallow = T::lit(0.25);
    let deep = T::lit(0.75);

    if depth > deep || velocity > T::lit(2.0) {
        return match category {
            DebrisCategory::PastureArable => T::lit(0.5),
            DebrisCategory::Woodland | DebrisCategory::Urban => T::one(),
            DebrisCategory::Other(_) => T::zero(),
        };
    }

    if depth >= T::zero() && depth <= shallow {
        return T::zero();
    }

    if depth > shallow && depth <= deep {
        return match category {
            DebrisCategory::PastureArable => T::zero(),
            DebrisCategory::Woodland => T::lit(0.5),
            DebrisCategory::Urban => T::one(),
            DebrisCategory::Other(_) => T::zero(),
        };
    }

    // Negative depth
    T::zero()
}

/// [`calculate_debris_coefficient`] for a raw integer category code.
#[inline]
pub fn calculate_debris_coefficient_code<T: Scalar>(depth: T, velocity: T, code: i32) -> T {
    calculate_debris_coefficient(depth, velocity, DebrisCategory::from_code(code))
}
