//! # chroma-math
//!
//! Math primitives for colorimetric computation.
//!
//! This crate provides the numeric foundation for the appearance-model,
//! gamut, and color-temperature crates:
//!
//! - [`Vec3`] - tristimulus and linear-RGB triplets
//! - [`Vec2`] - chromaticity-plane points (xy or u'v')
//! - [`Mat3`] - 3x3 linear color transforms
//! - Chromaticity conversions (xy, XYZ, CIE 1976 u'v')
//! - Hue-angle utilities (wrap, shortest arc, rotation direction)
//!
//! # Design
//!
//! This crate wraps [`glam`] types with colorimetry-specific operations.
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Mat3, Vec3, xyz_to_xy};
//!
//! // sRGB to XYZ (D65)
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz * Vec3::new(1.0, 1.0, 1.0);
//! let xy = xyz_to_xy(xyz);
//! assert!((xy.x - 0.3127).abs() < 1e-3);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Fast SIMD-accelerated math
//!
//! # Used By
//!
//! - `chroma-cam` - Appearance-model transforms
//! - `chroma-gamut` - Boundary geometry and RGB/XYZ matrices
//! - `chroma-hct` - Hue/chroma/tone solver
//! - `chroma-cct` - Planckian locus queries

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod angle;
mod chromaticity;
mod interp;
mod mat3;
mod vec2;
mod vec3;

pub use angle::*;
pub use chromaticity::*;
pub use interp::*;
pub use mat3::*;
pub use vec2::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat3 as GlamMat3, Vec2 as GlamVec2, Vec3 as GlamVec3};
}
