//! # chroma-gamut
//!
//! Gamut boundary geometry on the chromaticity plane.
//!
//! A gamut is the region of chromaticities a device can reproduce. This
//! crate models it two ways: [`Gamut`] for the common three-primary
//! triangle (which also carries the linear RGB/XYZ maps derived from its
//! primaries) and [`PolygonGamut`] for arbitrary simple boundaries. Both
//! answer the same queries: containment, nearest boundary point, and the
//! white-ray intersection used for saturation mapping.
//!
//! # Usage
//!
//! ```rust
//! use chroma_gamut::Gamut;
//! use chroma_math::Vec2;
//!
//! let srgb = Gamut::srgb();
//!
//! // A laser-green chromaticity is outside sRGB
//! let laser = Vec2::new(0.17, 0.80);
//! assert!(!srgb.contains(laser));
//!
//! // Closest reproducible chromaticity
//! let close = srgb.nearest(laser);
//! assert!(srgb.contains(close));
//!
//! // Most saturated in-gamut color toward it
//! let edge = srgb.raycast(laser);
//! assert!(srgb.contains(edge));
//! ```
//!
//! # Epsilon discipline
//!
//! The boundary is inclusive: vertices and edge points always report
//! contained. All inclusion tests and degeneracy guards share one plane
//! epsilon (1e-5).
//!
//! # Dependencies
//!
//! - [`chroma_math`] - Plane/vector types and chromaticity conversions
//! - [`thiserror`] - Construction error types
//!
//! # Used By
//!
//! - `chroma-tests` - Cross-crate property tests

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod edge;
mod error;
mod gamut;
mod polygon;

pub use error::{GamutError, GamutResult};
pub use gamut::{Gamut, GamutVertex};
pub use polygon::PolygonGamut;

// Re-export the math foundation for downstream use
pub use chroma_math as math;
