//! Hue-angle utilities.
//!
//! Hue angles live on a circle, so plain arithmetic needs wrapping and
//! shortest-arc logic. These helpers are shared by the appearance-model
//! interpolation and the tone solver's hue bracketing.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{sanitize_degrees, difference_degrees};
//!
//! assert_eq!(sanitize_degrees(-30.0), 330.0);
//! assert_eq!(difference_degrees(350.0, 10.0), 20.0);
//! ```

/// Wraps an angle in degrees into [0, 360).
#[inline]
pub fn sanitize_degrees(deg: f32) -> f32 {
    let d = deg % 360.0;
    if d < 0.0 { d + 360.0 } else { d }
}

/// Wraps an angle in degrees into [0, 360), double precision.
#[inline]
pub fn sanitize_degrees_f64(deg: f64) -> f64 {
    let d = deg % 360.0;
    if d < 0.0 { d + 360.0 } else { d }
}

/// Shortest-arc distance between two hue angles, in [0, 180].
#[inline]
pub fn difference_degrees(a: f32, b: f32) -> f32 {
    180.0 - ((a - b).abs() - 180.0).abs()
}

/// Direction of the shorter arc from one hue to another.
///
/// Returns +1.0 for counter-clockwise (increasing hue) and -1.0 for
/// clockwise. Multiply by [`difference_degrees`] to step along the
/// shorter arc.
#[inline]
pub fn rotation_direction(from: f32, to: f32) -> f32 {
    let increasing = sanitize_degrees(to - from);
    if increasing <= 180.0 { 1.0 } else { -1.0 }
}

/// True when hue `b` lies on the arc swept counter-clockwise from `a`
/// to `c`.
///
/// All three angles are wrapped before comparison, so any finite input
/// is accepted.
#[inline]
pub fn in_cyclic_order(a: f64, b: f64, c: f64) -> bool {
    let delta_ab = sanitize_degrees_f64(b - a);
    let delta_ac = sanitize_degrees_f64(c - a);
    delta_ab < delta_ac
}
