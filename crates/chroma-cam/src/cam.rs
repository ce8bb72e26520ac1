//! Appearance coordinates and the forward / inverse transforms.
//!
//! The forward transform maps tristimulus to six appearance correlates.
//! The inverse reconstructs tristimulus from the primary (J, C, h) triple
//! by solving the eccentricity chain per-quadrant instead of dividing by a
//! near-zero trigonometric term.

use chroma_math::{Vec3, difference_degrees, lerp, rotation_direction, sanitize_degrees};

use crate::viewing::ViewingConditions;

// ============================================================================
// Cam
// ============================================================================

/// Appearance correlates of one color under one viewing context.
///
/// `j`, `chroma` and `hue` are the primary triple; `q`, `m` and `s` are
/// derived from them plus the [`ViewingConditions`] and cached by the
/// forward transform. [`Cam::lerp`] leaves the cached three NaN since they
/// do not interpolate linearly.
///
/// # Example
///
/// ```rust
/// use chroma_cam::{Cam, ViewingConditions};
/// use chroma_math::Vec3;
///
/// let vc = ViewingConditions::default_cam16();
/// let cam = Cam::from_xyz(Vec3::new(19.01, 20.0, 21.78), vc);
/// let back = cam.to_xyz(vc);
/// assert!((back.y - 20.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cam {
    /// Lightness J in [0, 100].
    pub j: f32,
    /// Chroma C, zero for achromatic colors.
    pub chroma: f32,
    /// Hue angle in degrees, [0, 360). Meaningless when chroma is zero.
    pub hue: f32,
    /// Brightness Q.
    pub q: f32,
    /// Colorfulness M.
    pub m: f32,
    /// Saturation s.
    pub s: f32,
}

impl Cam {
    /// Forward transform: tristimulus to appearance correlates.
    ///
    /// Expects XYZ on the Y = 100 scale. Non-physical input that drives
    /// the achromatic response to zero or below collapses to black (all
    /// correlates zero).
    pub fn from_xyz(xyz: Vec3, vc: &ViewingConditions) -> Self {
        let family = vc.family;

        // Cone responses, chromatic adaptation, response compression.
        let cones = family.xyz_to_cone() * xyz;
        let ra = family.compress(vc.fl, vc.rgb_d.x * cones.x);
        let ga = family.compress(vc.fl, vc.rgb_d.y * cones.y);
        let ba = family.compress(vc.fl, vc.rgb_d.z * cones.z);

        // Opponent axes and hue angle.
        let a = ra - 12.0 * ga / 11.0 + ba / 11.0;
        let b = (ra + ga - 2.0 * ba) / 9.0;
        let hue = sanitize_degrees(b.atan2(a).to_degrees());

        // Achromatic response and lightness.
        let ac = (2.0 * ra + ga + 0.05 * ba - family.achromatic_offset()) * vc.nbb;
        let j = 100.0 * signed_pow(ac / vc.aw, vc.c * vc.z);
        if j <= 0.0 {
            return Self {
                j: 0.0,
                chroma: 0.0,
                hue: 0.0,
                q: 0.0,
                m: 0.0,
                s: 0.0,
            };
        }

        // Eccentricity-weighted chroma.
        let h_rad = hue.to_radians();
        let et = 0.25 * ((h_rad + 2.0).cos() + 3.8);
        let u = ra + ga + 1.05 * ba + family.t_offset();
        let t = (50000.0 / 13.0 * vc.nc * vc.ncb * et * (a * a + b * b).sqrt() / u).max(0.0);
        let alpha = t.powf(0.9) * (1.64 - 0.29f32.powf(vc.n)).powf(0.73);

        let j_root = (j / 100.0).sqrt();
        let chroma = alpha * j_root;
        let q = (4.0 / vc.c) * j_root * (vc.aw + 4.0) * vc.fl_root;
        let m = chroma * vc.fl_root;
        let s = if q > 0.0 { 100.0 * (m / q).sqrt() } else { 0.0 };

        Self {
            j,
            chroma,
            hue,
            q,
            m,
            s,
        }
    }

    /// Builds appearance coordinates from the primary triple, filling the
    /// derived correlates for the given context.
    ///
    /// `j` must be in [0, 100] and `chroma` non-negative; `hue` is wrapped
    /// into [0, 360).
    pub fn from_jch(j: f32, chroma: f32, hue: f32, vc: &ViewingConditions) -> Self {
        let hue = sanitize_degrees(hue);
        let j_root = (j / 100.0).sqrt();
        let q = (4.0 / vc.c) * j_root * (vc.aw + 4.0) * vc.fl_root;
        let m = chroma * vc.fl_root;
        let s = if q > 0.0 { 100.0 * (m / q).sqrt() } else { 0.0 };
        Self {
            j,
            chroma,
            hue,
            q,
            m,
            s,
        }
    }

    /// Inverse transform: (J, C, h) back to tristimulus.
    ///
    /// Solves the opponent axes per-quadrant. When |sin h| dominates, the
    /// b axis is solved first and a follows from the cotangent; otherwise
    /// a is solved first. Below-tolerance chroma terms force a pure
    /// achromatic reconstruction instead of a 0/0.
    pub fn to_xyz(&self, vc: &ViewingConditions) -> Vec3 {
        if self.j <= 0.0 {
            return Vec3::ZERO;
        }
        let family = vc.family;

        let alpha = if self.chroma == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };
        let t = (alpha / (1.64 - 0.29f32.powf(vc.n)).powf(0.73)).powf(1.0 / 0.9);

        let hue = sanitize_degrees(self.hue);
        let h_rad = hue.to_radians();
        let et = 0.25 * ((h_rad + 2.0).cos() + 3.8);

        let ac = vc.aw * (self.j / 100.0).powf(1.0 / (vc.c * vc.z));
        let p2 = ac / vc.nbb + 0.305;

        let (a, b) = if t < 1e-7 {
            (0.0, 0.0)
        } else {
            let p1 = 50000.0 / 13.0 * vc.nc * vc.ncb * et / t;
            let h_sin = h_rad.sin();
            let h_cos = h_rad.cos();
            // 21/20 is the blue-channel weight of the shared opponent map.
            let p3 = 1.05_f32;
            if h_sin.abs() >= h_cos.abs() {
                let p4 = p1 / h_sin;
                let cb = p2 * (2.0 + p3) * (460.0 / 1403.0)
                    / (p4 + (2.0 + p3) * (220.0 / 1403.0) * (h_cos / h_sin) - 27.0 / 1403.0
                        + p3 * (6300.0 / 1403.0));
                (cb * h_cos / h_sin, cb)
            } else {
                let p5 = p1 / h_cos;
                let ca = p2 * (2.0 + p3) * (460.0 / 1403.0)
                    / (p5 + (2.0 + p3) * (220.0 / 1403.0)
                        - (27.0 / 1403.0 - p3 * (6300.0 / 1403.0)) * (h_sin / h_cos));
                (ca, ca * h_sin / h_cos)
            }
        };

        // Compressed channels from the achromatic term and opponent axes.
        let p2_ch = ac / vc.nbb + family.achromatic_offset();
        let ra = (460.0 * p2_ch + 451.0 * a + 288.0 * b) / 1403.0;
        let ga = (460.0 * p2_ch - 891.0 * a - 261.0 * b) / 1403.0;
        let ba = (460.0 * p2_ch - 220.0 * a - 6300.0 * b) / 1403.0;

        let cones = Vec3::new(
            family.decompress(vc.fl, ra) / vc.rgb_d.x,
            family.decompress(vc.fl, ga) / vc.rgb_d.y,
            family.decompress(vc.fl, ba) / vc.rgb_d.z,
        );
        family.cone_to_xyz() * cones
    }

    /// Interpolates between two appearance coordinates.
    ///
    /// J and chroma interpolate linearly; hue takes the shorter arc
    /// around the circle. The derived correlates are context-dependent
    /// and left NaN; rebuild them with [`Cam::from_jch`] if needed.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let delta = rotation_direction(self.hue, other.hue) * difference_degrees(self.hue, other.hue);
        Self {
            j: lerp(self.j, other.j, t),
            chroma: lerp(self.chroma, other.chroma, t),
            hue: sanitize_degrees(self.hue + delta * t),
            q: f32::NAN,
            m: f32::NAN,
            s: f32::NAN,
        }
    }
}

/// Signed power: |base|^exp with the sign of base.
#[inline]
fn signed_pow(base: f32, exp: f32) -> f32 {
    base.abs().powf(exp).copysign(base)
}

// ============================================================================
// Tests
// ============================================================================
