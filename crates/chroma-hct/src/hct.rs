//! The hue/chroma/tone color value type.

use chroma_cam::{Cam, ViewingConditions};
use chroma_math::Vec3;
use chroma_transfer::lstar::lstar_from_y_f64;
use chroma_transfer::srgb;

use crate::solver;

// ============================================================================
// Hct
// ============================================================================

/// A color addressed by CAM16 hue and chroma plus an L* tone.
///
/// Not every (hue, chroma, tone) triple is displayable, so [`Hct::new`]
/// solves for the closest realizable sRGB color and the stored fields
/// describe that color, not the request: tone and hue are preserved,
/// chroma shrinks to what the display gamut supports. Construction from
/// a display color via [`Hct::from_srgb`] is exact.
///
/// # Example
///
/// ```rust
/// use chroma_hct::Hct;
/// use chroma_math::Vec3;
///
/// // A request inside the gamut keeps its tone.
/// let teal = Hct::new(200.0, 30.0, 60.0);
/// assert!((teal.tone() - 60.0).abs() < 0.5);
///
/// // Display red carries more chroma than any pastel.
/// let red = Hct::from_srgb(Vec3::new(1.0, 0.0, 0.0));
/// assert!(red.chroma() > 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hct {
    hue: f32,
    chroma: f32,
    tone: f32,
    srgb: Vec3,
}

impl Hct {
    /// Solves for the sRGB color closest to the requested triple.
    ///
    /// Hue is in degrees (any finite value, wrapped into [0, 360)),
    /// chroma is non-negative, tone is clamped to [0, 100]. Tone below
    /// 0.0001 yields black, above 99.9999 white, and chroma below
    /// 0.0001 the exact gray of that tone.
    pub fn new(hue: f32, chroma: f32, tone: f32) -> Self {
        let linrgb = solver::solve(hue as f64, chroma as f64, tone as f64);
        Self::from_srgb(encode(linrgb))
    }

    /// Measures a display color.
    ///
    /// Components are encoded sRGB in [0, 1] (clamped on entry). Hue and
    /// chroma come from the CAM16 forward transform under the default
    /// viewing conditions; tone is the L* of the color's relative
    /// luminance.
    pub fn from_srgb(srgb_color: Vec3) -> Self {
        let srgb_color = srgb_color.clamp01();
        let linrgb = [
            100.0 * srgb::eotf_f64(srgb_color.x as f64),
            100.0 * srgb::eotf_f64(srgb_color.y as f64),
            100.0 * srgb::eotf_f64(srgb_color.z as f64),
        ];
        let xyz = solver::xyz_from_linrgb(linrgb);
        let cam = Cam::from_xyz(
            Vec3::new(xyz[0] as f32, xyz[1] as f32, xyz[2] as f32),
            ViewingConditions::default_cam16(),
        );
        Self {
            hue: cam.hue,
            chroma: cam.chroma,
            tone: lstar_from_y_f64(xyz[1]) as f32,
            srgb: srgb_color,
        }
    }

    /// Hue angle in degrees, [0, 360).
    #[inline]
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Realized chroma, at most the requested value.
    #[inline]
    pub fn chroma(&self) -> f32 {
        self.chroma
    }

    /// L* tone in [0, 100].
    #[inline]
    pub fn tone(&self) -> f32 {
        self.tone
    }

    /// The encoded sRGB color this triple describes, components in [0, 1].
    #[inline]
    pub fn to_srgb(&self) -> Vec3 {
        self.srgb
    }
}

/// Gamma-encodes a solver result (linear, 0..100) to display [0, 1].
fn encode(linrgb: solver::V3) -> Vec3 {
    Vec3::new(
        srgb::oetf_f64(linrgb[0] / 100.0) as f32,
        srgb::oetf_f64(linrgb[1] / 100.0) as f32,
        srgb::oetf_f64(linrgb[2] / 100.0) as f32,
    )
    .clamp01()
}

// ============================================================================
// Tests
// ============================================================================
