//! Floating-point element type shared by every kernel.
//!
//! Kernels are written once against [`Scalar`] and monomorphized for
//! `f32` or `f64` at the call site.

use std::fmt::{Debug, Display};

use num_traits::{Float, FloatConst};

/// Real floating-point scalar usable by the kernels.
///
/// Implemented for `f32` and `f64`.
pub trait Scalar: Float + FloatConst + Debug + Display + Send + Sync + 'static {
    /// Convert an `f64` literal into this type.
    ///
    /// For `f32` this rounds to the nearest representable value.
    fn lit(v: f64) -> Self;
}

impl Scalar for f64 {
    #[inline(always)]
    fn lit(v: f64) -> Self {
        v
    }
}

impl Scalar for f32 {
    #[inline(always)]
    fn lit(v: f64) -> Self {
        v as f32
    }
}
