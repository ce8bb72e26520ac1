//! # chroma-cct
//!
//! Correlated color temperature from chromaticity.
//!
//! The correlated color temperature (CCT) of a light source is the
//! temperature of the Planckian radiator whose chromaticity lies closest
//! to it; the signed distance to that radiator is Duv. Both are measured
//! here in the CIE 1976 u'v' plane against a precomputed table of 515
//! blackbody samples spanning 1000 K to 100000 K, with a parabolic
//! refinement between samples when the source sits visibly off the locus.
//!
//! # Usage
//!
//! ```rust
//! use chroma_cct::CctEstimate;
//! use chroma_math::Vec2;
//!
//! // D65 daylight: about 6500 K, slightly green of the blackbody locus
//! let d65 = CctEstimate::from_xy(chroma_math::D65_XY);
//! assert!(d65.in_range());
//! assert!(d65.kelvin > 6200.0 && d65.kelvin < 6800.0);
//! assert!(d65.duv > 0.0);
//!
//! // Chromaticities nowhere near the locus resolve to NaN
//! let far = CctEstimate::from_uv(Vec2::new(0.05, 0.05));
//! assert!(!far.in_range());
//! assert!(far.kelvin.is_nan());
//! ```
//!
//! # Range policy
//!
//! Queries whose nearest locus sample is an endpoint of the table, and
//! non-finite queries, yield `NaN` for both fields rather than an
//! extrapolated guess. [`CctEstimate::in_range`] folds that check into
//! one call.
//!
//! # Dependencies
//!
//! - [`chroma_math`] - Chromaticity types and xy -> u'v' conversion
//!
//! # Used By
//!
//! - `chroma-tests` - Cross-crate property tests
//! - `chroma-bench` - Locus query benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod estimate;
mod planck;

pub use estimate::CctEstimate;

// Re-export the math foundation for downstream use
pub use chroma_math as math;
