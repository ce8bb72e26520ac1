//! Chromaticity conversions between xy, XYZ, and CIE 1976 u'v'.
//!
//! These are the luminance-independent coordinates the gamut and
//! color-temperature code works in. Degenerate inputs (zero denominators)
//! produce NaN coordinates rather than panicking, so callers can treat
//! "no chromaticity" as a sentinel.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{D65, xyz_to_uv};
//!
//! let uv = xyz_to_uv(D65);
//! assert!((uv.x - 0.1978).abs() < 1e-3);
//! assert!((uv.y - 0.4683).abs() < 1e-3);
//! ```

use crate::{Vec2, Vec3};

/// D65 white point tristimulus, Y normalized to 100.
pub const D65: Vec3 = Vec3::new(95.047, 100.0, 108.883);

/// D65 white point xy chromaticity.
pub const D65_XY: Vec2 = Vec2::new(0.3127, 0.3290);

/// Denominator guard below which a conversion is considered degenerate.
const DEGENERATE: f32 = 1e-12;

/// Converts xy chromaticity plus luminance Y to XYZ tristimulus.
///
/// Returns NaN components when `xy.y` is zero (no luminance axis).
#[inline]
pub fn xy_to_xyz(xy: Vec2, y: f32) -> Vec3 {
    if xy.y.abs() < DEGENERATE {
        return Vec3::splat(f32::NAN);
    }
    let scale = y / xy.y;
    Vec3::new(xy.x * scale, y, (1.0 - xy.x - xy.y) * scale)
}

/// Converts XYZ tristimulus to xy chromaticity.
///
/// Returns NaN components when X + Y + Z is zero (e.g. pure black).
#[inline]
pub fn xyz_to_xy(xyz: Vec3) -> Vec2 {
    let sum = xyz.x + xyz.y + xyz.z;
    if sum.abs() < DEGENERATE {
        return Vec2::splat(f32::NAN);
    }
    Vec2::new(xyz.x / sum, xyz.y / sum)
}

/// Converts XYZ tristimulus to CIE 1976 u'v' chromaticity.
///
/// Returns NaN components when the projective denominator
/// X + 15Y + 3Z is zero.
#[inline]
pub fn xyz_to_uv(xyz: Vec3) -> Vec2 {
    let denom = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if denom.abs() < DEGENERATE {
        return Vec2::splat(f32::NAN);
    }
    Vec2::new(4.0 * xyz.x / denom, 9.0 * xyz.y / denom)
}

/// Converts xy chromaticity to CIE 1976 u'v' chromaticity.
///
/// Returns NaN components when 12y - 2x + 3 is zero.
#[inline]
pub fn xy_to_uv(xy: Vec2) -> Vec2 {
    let denom = 12.0 * xy.y - 2.0 * xy.x + 3.0;
    if denom.abs() < DEGENERATE {
        return Vec2::splat(f32::NAN);
    }
    Vec2::new(4.0 * xy.x / denom, 9.0 * xy.y / denom)
}
