//! CIE L* lightness.
//!
//! L* is the perceptually uniform lightness axis of CIE Lab: a cube-root
//! compression of relative luminance with a linear segment near black.
//! It is the tone coordinate of hue/chroma/tone colors and the background
//! ratio input of the CAM16 viewing conditions.
//!
//! # Range
//!
//! - L*: [0, 100]
//! - Y (relative luminance): [0, 100]

/// Threshold of the linear segment, (6/29)^3.
const E: f64 = 216.0 / 24389.0;

/// Slope of the linear segment.
const KAPPA: f64 = 24389.0 / 27.0;

/// Relative luminance Y of an L* value, both on a 0-100 scale.
///
/// # Example
///
/// ```rust
/// use chroma_transfer::lstar::y_from_lstar;
///
/// // Mid gray
/// assert!((y_from_lstar(50.0) - 18.418).abs() < 1e-2);
/// // Endpoints are exact
/// assert_eq!(y_from_lstar(0.0), 0.0);
/// ```
#[inline]
pub fn y_from_lstar(lstar: f32) -> f32 {
    y_from_lstar_f64(lstar as f64) as f32
}

/// Relative luminance Y of an L* value, double precision.
#[inline]
pub fn y_from_lstar_f64(lstar: f64) -> f64 {
    let ft = (lstar + 16.0) / 116.0;
    let ft3 = ft * ft * ft;
    if ft3 > E {
        100.0 * ft3
    } else {
        100.0 * (116.0 * ft - 16.0) / KAPPA
    }
}

/// L* of a relative luminance Y, both on a 0-100 scale.
///
/// # Example
///
/// ```rust
/// use chroma_transfer::lstar::lstar_from_y;
///
/// assert!((lstar_from_y(18.418) - 50.0).abs() < 1e-2);
/// assert_eq!(lstar_from_y(0.0), 0.0);
/// ```
#[inline]
pub fn lstar_from_y(y: f32) -> f32 {
    lstar_from_y_f64(y as f64) as f32
}

/// L* of a relative luminance Y, double precision.
#[inline]
pub fn lstar_from_y_f64(y: f64) -> f64 {
    let t = y / 100.0;
    let f = if t > E {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    };
    116.0 * f - 16.0
}
