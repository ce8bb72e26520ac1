//! # chroma-hct
//!
//! Hue/chroma/tone: a color system pairing CAM16 hue and chroma with the
//! CIE L* lightness axis.
//!
//! CAM16 lightness J tracks appearance, but contrast ratios and tone
//! ramps are specified against L*. [`Hct`] keeps both worlds honest:
//! hue and chroma are CAM16 correlates, tone is L*. The price is that
//! the reverse direction has no closed form - [`Hct::new`] runs a
//! two-stage numeric solver (Newton refinement, then a bisection of the
//! sRGB cube surface along 8-bit quantization planes) to find the
//! closest displayable color, always preserving the requested tone.
//!
//! # Usage
//!
//! ```rust
//! use chroma_hct::Hct;
//! use chroma_math::Vec3;
//!
//! // Measure a display color
//! let orange = Hct::from_srgb(Vec3::new(1.0, 0.55, 0.0));
//! assert!(orange.hue() > 40.0 && orange.hue() < 90.0);
//!
//! // An impossible request degrades to the closest realizable chroma,
//! // keeping hue and tone.
//! let forced = Hct::new(orange.hue(), 200.0, orange.tone());
//! assert!(forced.chroma() < 200.0);
//! assert!((forced.tone() - orange.tone()).abs() < 0.5);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma_cam`] - CAM16 forward transform for measuring colors
//! - [`chroma_math`] - Vector types and hue-angle helpers
//! - [`chroma_transfer`] - sRGB curve and the L* tone axis
//!
//! # Used By
//!
//! - `chroma-bench` - Solver throughput benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod hct;
mod solver;

pub use hct::Hct;

// Re-export foundation crates for downstream use
pub use chroma_cam as cam;
pub use chroma_math as math;
