//! Model family selection: CAM02 vs CAM16.
//!
//! The two generations share one pipeline shape and differ only in the
//! cone-response matrix and three small offsets. [`CamFamily`] carries
//! those differences so the rest of the crate has a single code path.

use chroma_math::Mat3;

// ============================================================================
// Chromatic Adaptation Matrices
// ============================================================================

/// CAT02 cone-response matrix (XYZ to sharpened LMS).
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// Inverse of [`CAT02`].
pub const CAT02_INV: Mat3 = Mat3::from_rows([
    [1.096_123_8, -0.278_869, 0.182_745_2],
    [0.454_369, 0.473_533_2, 0.072_097_8],
    [-0.009_627_6, -0.005_698, 1.015_325_6],
]);

/// CAT16 cone-response matrix (XYZ to sharpened LMS).
pub const CAT16: Mat3 = Mat3::from_rows([
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
]);

/// Inverse of [`CAT16`].
pub const CAT16_INV: Mat3 = Mat3::from_rows([
    [1.862_067_9, -1.011_254_6, 0.149_186_78],
    [0.387_526_55, 0.621_447_4, -0.008_973_985],
    [-0.015_841_499, -0.034_122_938, 1.049_964_4],
]);

// ============================================================================
// CamFamily
// ============================================================================

/// Appearance model generation.
///
/// Selects the adaptation matrix and the small constant offsets that
/// distinguish the 2002 and 2016 formulations. Coordinates produced under
/// one family are not interchangeable with the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CamFamily {
    /// CIECAM02 cone space and offsets.
    Cam02,
    /// CAM16 cone space, no compression offset.
    #[default]
    Cam16,
}

impl CamFamily {
    /// Matrix mapping XYZ to sharpened cone responses.
    #[inline]
    pub const fn xyz_to_cone(self) -> Mat3 {
        match self {
            Self::Cam02 => CAT02,
            Self::Cam16 => CAT16,
        }
    }

    /// Matrix mapping sharpened cone responses back to XYZ.
    #[inline]
    pub const fn cone_to_xyz(self) -> Mat3 {
        match self {
            Self::Cam02 => CAT02_INV,
            Self::Cam16 => CAT16_INV,
        }
    }

    /// Additive offset on each compressed cone channel.
    #[inline]
    pub(crate) const fn compression_offset(self) -> f32 {
        match self {
            Self::Cam02 => 0.1,
            Self::Cam16 => 0.0,
        }
    }

    /// Offset subtracted from the achromatic channel sum.
    ///
    /// Cancels the three compression offsets (2 + 1 + 0.05 times 0.1)
    /// so that black maps to zero achromatic response.
    #[inline]
    pub(crate) const fn achromatic_offset(self) -> f32 {
        match self {
            Self::Cam02 => 0.305,
            Self::Cam16 => 0.0,
        }
    }

    /// Offset added to the denominator of the chroma auxiliary term.
    #[inline]
    pub(crate) const fn t_offset(self) -> f32 {
        match self {
            Self::Cam02 => 0.0,
            Self::Cam16 => 0.305,
        }
    }

    /// Post-adaptation nonlinear compression of one cone channel.
    ///
    /// Odd-symmetric: negative inputs compress like their magnitude and
    /// keep their sign. `fl` is the luminance adaptation factor of the
    /// viewing conditions.
    #[inline]
    pub(crate) fn compress(self, fl: f32, v: f32) -> f32 {
        let x = (fl * v.abs() / 100.0).powf(0.42);
        (400.0 * x / (x + 27.13)).copysign(v) + self.compression_offset()
    }

    /// Inverse of [`compress`](Self::compress).
    ///
    /// The magnitude ratio is clamped at zero so inputs past the
    /// compression asymptote decode to a finite channel value.
    #[inline]
    pub(crate) fn decompress(self, fl: f32, v: f32) -> f32 {
        let adapted = v - self.compression_offset();
        let base = (27.13 * adapted.abs() / (400.0 - adapted.abs())).max(0.0);
        ((100.0 / fl) * base.powf(1.0 / 0.42)).copysign(adapted)
    }
}

// ============================================================================
// Tests
// ============================================================================
