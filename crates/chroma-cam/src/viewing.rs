//! Viewing condition derivation.
//!
//! All appearance-model constants are pure functions of five inputs:
//! white point, adapting luminance, background luminance, surround and a
//! discounting flag. Two [`ViewingConditions`] built from equal inputs are
//! interchangeable (and compare equal).

use std::sync::OnceLock;

use chroma_math::{D65, Vec3};
use chroma_transfer::y_from_lstar;

use crate::error::{CamError, CamResult};
use crate::family::CamFamily;
use crate::surround::Surround;

// ============================================================================
// ViewingConditions
// ============================================================================

/// Precomputed appearance-model constants for one viewing context.
///
/// Build once per distinct context via [`ViewingConditions::new`] (or grab a
/// preset) and reuse it across forward and inverse transforms. Derivation
/// runs the adaptation and compression chain on the white point itself, so
/// construction is the expensive step and transforms stay cheap.
///
/// # Example
///
/// ```rust
/// use chroma_cam::{CamFamily, Surround, ViewingConditions};
/// use chroma_math::D65;
///
/// let vc = ViewingConditions::new(
///     CamFamily::Cam16,
///     D65,
///     40.0,  // adapting luminance, cd/m2
///     50.0,  // background luminance
///     Surround::Average,
///     false, // no discounting
/// )
/// .unwrap();
/// assert!(vc.aw > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ViewingConditions {
    /// Model family these constants were derived for.
    pub family: CamFamily,
    /// Reference white tristimulus, Y normalized to 100.
    pub white_point: Vec3,
    /// Adapting field luminance in cd/m2.
    pub adapting_luminance: f32,
    /// Background luminance input (floored to 0.1 during derivation).
    pub background_luminance: f32,
    /// Surround category the induction factors came from.
    pub surround: Surround,
    /// Whether the illuminant is discounted (degree of adaptation forced to 1).
    pub discounting: bool,
    /// Background brightness ratio n.
    pub n: f32,
    /// Achromatic lightness exponent z = 1.48 + sqrt(n).
    pub z: f32,
    /// Luminance-level adaptation factor FL.
    pub fl: f32,
    /// FL^0.25, cached for colorfulness and brightness.
    pub fl_root: f32,
    /// Background induction factor Nbb.
    pub nbb: f32,
    /// Chromatic induction factor Ncb (equal to Nbb).
    pub ncb: f32,
    /// Impact-of-surround exponent c.
    pub c: f32,
    /// Chromatic induction factor Nc from the surround.
    pub nc: f32,
    /// Per-channel chromatic adaptation factors.
    pub rgb_d: Vec3,
    /// Achromatic response of the adapted white.
    pub aw: f32,
}

impl ViewingConditions {
    /// Derives viewing conditions from their five inputs.
    ///
    /// `white_point` must carry positive finite luminance (Y scale of 100)
    /// and `adapting_luminance` must be strictly positive; both are checked
    /// here so downstream transforms never divide by zero.
    /// `background_luminance` is floored to 0.1.
    pub fn new(
        family: CamFamily,
        white_point: Vec3,
        adapting_luminance: f32,
        background_luminance: f32,
        surround: Surround,
        discounting: bool,
    ) -> CamResult<Self> {
        if !(adapting_luminance > 0.0) {
            return Err(CamError::non_positive_luminance(adapting_luminance));
        }
        if !white_point.is_finite() || white_point.y <= 0.0 {
            return Err(CamError::invalid_white_point(white_point.y));
        }
        Ok(Self::derive(
            family,
            white_point,
            adapting_luminance,
            background_luminance,
            surround,
            discounting,
        ))
    }

    /// Derivation body, after input validation.
    fn derive(
        family: CamFamily,
        white_point: Vec3,
        adapting_luminance: f32,
        background_luminance: f32,
        surround: Surround,
        discounting: bool,
    ) -> Self {
        let yw = white_point.y;
        let cone_w = family.xyz_to_cone() * white_point;

        // Degree of adaptation, full when the illuminant is discounted.
        let d = if discounting {
            1.0
        } else {
            let f = surround.f();
            (f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp()))
                .clamp(0.0, 1.0)
        };

        let rgb_d = Vec3::new(
            d * (yw / cone_w.x) + 1.0 - d,
            d * (yw / cone_w.y) + 1.0 - d,
            d * (yw / cone_w.z) + 1.0 - d,
        );

        // Luminance-level adaptation factor FL.
        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let five_la = 5.0 * adapting_luminance;
        let fl = 0.2 * k4 * five_la + 0.1 * (1.0 - k4) * (1.0 - k4) * five_la.cbrt();

        // Background ratio. CAM16 interprets the background input on the
        // L* scale, CAM02 as a plain relative luminance.
        let yb = background_luminance.max(0.1);
        let n = match family {
            CamFamily::Cam02 => yb / yw,
            CamFamily::Cam16 => y_from_lstar(yb) / yw,
        };
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        // Achromatic response of the white itself, through the same
        // adaptation and compression the transforms apply.
        let fl_root = fl.powf(0.25);
        let rw = family.compress(fl, rgb_d.x * cone_w.x);
        let gw = family.compress(fl, rgb_d.y * cone_w.y);
        let bw = family.compress(fl, rgb_d.z * cone_w.z);
        let aw = (2.0 * rw + gw + 0.05 * bw - family.achromatic_offset()) * nbb;

        Self {
            family,
            white_point,
            adapting_luminance,
            background_luminance,
            surround,
            discounting,
            n,
            z,
            fl,
            fl_root,
            nbb,
            ncb,
            c: surround.c(),
            nc: surround.nc(),
            rgb_d,
            aw,
        }
    }

    /// Default CAM16 viewing conditions (D65, dim office lighting).
    ///
    /// Adapting luminance is 200/pi times the luminance of mid gray,
    /// background is L* 50, average surround, no discounting. This is the
    /// context the tone/hue system assumes.
    pub fn default_cam16() -> &'static Self {
        static VC: OnceLock<ViewingConditions> = OnceLock::new();
        VC.get_or_init(|| {
            let la = 200.0 / std::f32::consts::PI * y_from_lstar(50.0) / 100.0;
            Self::derive(CamFamily::Cam16, D65, la, 50.0, Surround::Average, false)
        })
    }

    /// Default CAM02 viewing conditions (D65, textbook booth setup).
    ///
    /// Adapting luminance 64/(5 pi) cd/m2, 20% background, average
    /// surround, no discounting.
    pub fn default_cam02() -> &'static Self {
        static VC: OnceLock<ViewingConditions> = OnceLock::new();
        VC.get_or_init(|| {
            let la = 64.0 / (5.0 * std::f32::consts::PI);
            Self::derive(CamFamily::Cam02, D65, la, 20.0, Surround::Average, false)
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
