//! # chroma-cam
//!
//! Color appearance models: CAM02 and CAM16 forward/inverse transforms,
//! viewing-condition derivation, and the UCS/LCD/SCD uniform spaces.
//!
//! An appearance model predicts how a tristimulus value actually looks
//! under a given adaptation state: the same XYZ reads as a different
//! lightness/chroma/hue in a dim room than in daylight. This crate derives
//! the adaptation constants once per context ([`ViewingConditions`]) and
//! then transforms per-color ([`Cam`]).
//!
//! # Usage
//!
//! ```rust
//! use chroma_cam::{Cam, UcsVariant, ViewingConditions};
//! use chroma_math::Vec3;
//!
//! let vc = ViewingConditions::default_cam16();
//!
//! // Forward: tristimulus to appearance correlates
//! let red = Cam::from_xyz(Vec3::new(41.23, 21.26, 1.93), vc);
//! assert!(red.chroma > 100.0);
//!
//! // Inverse: appearance back to tristimulus
//! let xyz = red.to_xyz(vc);
//! assert!((xyz.y - 21.26).abs() < 0.05);
//!
//! // Perceptual difference in the uniform space
//! let blue = Cam::from_xyz(Vec3::new(18.05, 7.22, 95.03), vc);
//! let d = red.distance(&blue, UcsVariant::Ucs);
//! assert!(d > 20.0);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma_math`] - Vectors, matrices, hue-angle helpers
//! - [`chroma_transfer`] - L* scale for the CAM16 background ratio
//! - [`thiserror`] - Construction error types
//!
//! # Used By
//!
//! - `chroma-hct` - Hue/chroma/tone built on CAM16
//! - `chroma-bench` - Transform throughput benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cam;
mod error;
mod family;
mod surround;
mod ucs;
mod viewing;

pub use cam::Cam;
pub use error::{CamError, CamResult};
pub use family::{CAT02, CAT02_INV, CAT16, CAT16_INV, CamFamily};
pub use surround::Surround;
pub use ucs::{UcsCoords, UcsVariant};
pub use viewing::ViewingConditions;

// Re-export foundation crates for downstream use
pub use chroma_math as math;
pub use chroma_transfer as transfer;

/// Commonly used types, for glob import.
pub mod prelude {
    pub use crate::{Cam, CamFamily, Surround, UcsCoords, UcsVariant, ViewingConditions};
    pub use chroma_math::{Mat3, Vec2, Vec3};
}
