//! Uniform color space embeddings of appearance coordinates.
//!
//! The three variants share one shape: compress J, compress colorfulness,
//! split the compressed colorfulness into Cartesian components by hue.
//! Euclidean distance in the embedded space approximates perceived
//! difference, with a per-variant lightness weight KL.

use chroma_math::sanitize_degrees;

use crate::cam::Cam;
use crate::viewing::ViewingConditions;

// ============================================================================
// UcsVariant
// ============================================================================

/// Uniform space flavor, each tuned for a different difference magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UcsVariant {
    /// General-purpose uniform space.
    #[default]
    Ucs,
    /// Large color differences.
    Lcd,
    /// Small color differences.
    Scd,
}

impl UcsVariant {
    /// Lightness weight KL applied to Jstar differences.
    #[inline]
    pub const fn kl(self) -> f32 {
        match self {
            Self::Ucs => 1.00,
            Self::Lcd => 0.77,
            Self::Scd => 1.24,
        }
    }

    /// Lightness compression constant c1.
    #[inline]
    pub const fn c1(self) -> f32 {
        0.007
    }

    /// Colorfulness compression constant c2.
    #[inline]
    pub const fn c2(self) -> f32 {
        match self {
            Self::Ucs => 0.0228,
            Self::Lcd => 0.0053,
            Self::Scd => 0.0363,
        }
    }
}

// ============================================================================
// UcsCoords
// ============================================================================

/// A point in one of the uniform spaces.
///
/// Carries the variant it was embedded with; [`UcsCoords::distance`] and
/// [`UcsCoords::to_cam`] use that variant's constants, so both operands of
/// a distance should come from the same variant.
///
/// # Example
///
/// ```rust
/// use chroma_cam::{Cam, UcsCoords, UcsVariant, ViewingConditions};
/// use chroma_math::Vec3;
///
/// let vc = ViewingConditions::default_cam16();
/// let a = Cam::from_xyz(Vec3::new(41.23, 21.26, 1.93), vc);
/// let b = Cam::from_xyz(Vec3::new(18.05, 7.22, 95.03), vc);
///
/// let ua = UcsCoords::from_cam(&a, UcsVariant::Ucs);
/// let ub = UcsCoords::from_cam(&b, UcsVariant::Ucs);
/// assert!(ua.distance(&ub) > 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UcsCoords {
    /// Compressed lightness J*.
    pub jstar: f32,
    /// Red-green component a*.
    pub astar: f32,
    /// Yellow-blue component b*.
    pub bstar: f32,
    /// Variant whose constants produced this embedding.
    pub variant: UcsVariant,
}

impl UcsCoords {
    /// Embeds appearance coordinates into the uniform space.
    ///
    /// Uses the cached colorfulness `m`, so the input should come from the
    /// forward transform or [`Cam::from_jch`], not from [`Cam::lerp`].
    pub fn from_cam(cam: &Cam, variant: UcsVariant) -> Self {
        let c1 = variant.c1();
        let c2 = variant.c2();
        let jstar = (1.0 + 100.0 * c1) * cam.j / (1.0 + c1 * cam.j);
        let mstar = (1.0 + c2 * cam.m).ln() / c2;
        let h_rad = cam.hue.to_radians();
        Self {
            jstar,
            astar: mstar * h_rad.cos(),
            bstar: mstar * h_rad.sin(),
            variant,
        }
    }

    /// Recovers appearance coordinates under the given viewing context.
    pub fn to_cam(&self, vc: &ViewingConditions) -> Cam {
        let c1 = self.variant.c1();
        let c2 = self.variant.c2();
        let j = self.jstar / (1.0 + 100.0 * c1 - c1 * self.jstar);
        let mstar = (self.astar * self.astar + self.bstar * self.bstar).sqrt();
        let m = ((c2 * mstar).exp() - 1.0) / c2;
        let hue = sanitize_degrees(self.bstar.atan2(self.astar).to_degrees());
        Cam::from_jch(j, m / vc.fl_root, hue, vc)
    }

    /// Euclidean difference with the variant's lightness weight.
    pub fn distance(&self, other: &Self) -> f32 {
        let dj = (self.jstar - other.jstar) / self.variant.kl();
        let da = self.astar - other.astar;
        let db = self.bstar - other.bstar;
        (dj * dj + da * da + db * db).sqrt()
    }
}

impl Cam {
    /// Perceptual difference to another color in the chosen uniform space.
    ///
    /// Both coordinates must have been produced under the same viewing
    /// context for the comparison to be meaningful.
    pub fn distance(&self, other: &Cam, variant: UcsVariant) -> f32 {
        UcsCoords::from_cam(self, variant).distance(&UcsCoords::from_cam(other, variant))
    }
}

// ============================================================================
// Tests
// ============================================================================
