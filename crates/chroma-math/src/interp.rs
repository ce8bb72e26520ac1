//! Interpolation utilities.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::lerp;
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! ```

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a + (b - a) * t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linear interpolation between two values, double precision.
///
/// The locus-table interpolation works in f64 to keep adjacent
/// high-temperature samples distinguishable.
#[inline]
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
