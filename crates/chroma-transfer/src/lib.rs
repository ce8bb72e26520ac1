//! # chroma-transfer
//!
//! Transfer functions for the colorimetric core.
//!
//! Two encodings live here:
//!
//! - [`srgb`] - the IEC 61966-2-1 piecewise gamma curve used by display
//!   colors and by the tone solver's quantization planes
//! - [`lstar`] - the CIE L* lightness axis, the perceptual tone scale of
//!   hue/chroma/tone colors
//!
//! # Terminology
//!
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//!
//! # Usage
//!
//! ```rust
//! use chroma_transfer::{srgb, lstar};
//!
//! // Decode an sRGB component to linear light
//! let linear = srgb::eotf(0.5);
//!
//! // Relative luminance of mid gray (L* = 50)
//! let y = lstar::y_from_lstar(50.0);
//! assert!((y - 18.418).abs() < 1e-2);
//! ```
//!
//! # Dependencies
//!
//! None beyond std; both curves are closed-form.
//!
//! # Used By
//!
//! - `chroma-cam` - viewing-condition presets and background ratios
//! - `chroma-hct` - tone axis and gamut-constrained inversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lstar;
pub mod srgb;

// Re-export common functions
pub use lstar::{lstar_from_y, y_from_lstar};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
