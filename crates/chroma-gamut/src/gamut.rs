//! Triangle gamut: three primaries, a white point, and the RGB/XYZ maps.

use std::sync::OnceLock;

use chroma_math::{D65_XY, Mat3, Vec2, Vec3, xy_to_uv, xy_to_xyz};

use crate::edge::{EPS, near_point, nearest_on_segment, on_segment, ray_segment};
use crate::error::{GamutError, GamutResult};

// ============================================================================
// GamutVertex
// ============================================================================

/// A boundary vertex cached in both chromaticity flavors.
///
/// Geometry runs on the xy plane; the 1976 u'v' twin is computed once at
/// construction for callers that compare against locus coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutVertex {
    /// CIE 1931 xy chromaticity.
    pub xy: Vec2,
    /// CIE 1976 u'v' chromaticity.
    pub uv: Vec2,
}

impl GamutVertex {
    /// Builds a vertex, deriving the u'v' twin from xy.
    #[inline]
    pub fn new(xy: Vec2) -> Self {
        Self {
            xy,
            uv: xy_to_uv(xy),
        }
    }
}

// ============================================================================
// Gamut
// ============================================================================

/// A triangular gamut on the chromaticity plane.
///
/// Carries the three primary vertices, the white point, and the 3x3 maps
/// between gamut-relative linear RGB and XYZ (white Y normalized to 1).
/// Immutable once built; all queries are read-only.
///
/// # Example
///
/// ```rust
/// use chroma_gamut::Gamut;
/// use chroma_math::Vec2;
///
/// let srgb = Gamut::srgb();
/// assert!(srgb.contains(Vec2::new(0.3127, 0.3290)));
/// assert!(!srgb.contains(Vec2::new(0.9, 0.9)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Gamut {
    /// Red primary vertex.
    pub red: GamutVertex,
    /// Green primary vertex.
    pub green: GamutVertex,
    /// Blue primary vertex.
    pub blue: GamutVertex,
    /// White point vertex.
    pub white: GamutVertex,
    /// Linear RGB to XYZ, scaled so (1,1,1) lands on the white point.
    pub rgb_to_xyz: Mat3,
    /// XYZ to linear RGB, the adjugate inverse of `rgb_to_xyz`.
    pub xyz_to_rgb: Mat3,
}

impl Gamut {
    /// Builds a gamut from primary and white chromaticities.
    ///
    /// Solves the primary scaling by Cramer's rule so that equal RGB
    /// reproduces the white point exactly. Collinear or degenerate
    /// primaries make the system singular and fail fast.
    pub fn new(red: Vec2, green: Vec2, blue: Vec2, white: Vec2) -> GamutResult<Self> {
        let r_xyz = xy_to_xyz(red, 1.0);
        let g_xyz = xy_to_xyz(green, 1.0);
        let b_xyz = xy_to_xyz(blue, 1.0);
        let w_xyz = xy_to_xyz(white, 1.0);

        let det = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz).determinant();
        if !det.is_finite() || det.abs() < 1e-10 {
            return Err(GamutError::CollinearPrimaries);
        }

        // Cramer's rule for the per-primary scale factors.
        let sr = Mat3::from_col_vecs(w_xyz, g_xyz, b_xyz).determinant() / det;
        let sg = Mat3::from_col_vecs(r_xyz, w_xyz, b_xyz).determinant() / det;
        let sb = Mat3::from_col_vecs(r_xyz, g_xyz, w_xyz).determinant() / det;

        let rgb_to_xyz = Mat3::from_col_vecs(r_xyz * sr, g_xyz * sg, b_xyz * sb);
        let xyz_to_rgb = rgb_to_xyz.inverse().ok_or(GamutError::CollinearPrimaries)?;

        Ok(Self {
            red: GamutVertex::new(red),
            green: GamutVertex::new(green),
            blue: GamutVertex::new(blue),
            white: GamutVertex::new(white),
            rgb_to_xyz,
            xyz_to_rgb,
        })
    }

    /// Boundary edges in winding order.
    #[inline]
    fn edges(&self) -> [(Vec2, Vec2); 3] {
        [
            (self.red.xy, self.green.xy),
            (self.green.xy, self.blue.xy),
            (self.blue.xy, self.red.xy),
        ]
    }

    /// Whether a chromaticity point lies inside or on the boundary.
    ///
    /// Half-plane tests against each edge, with the boundary itself made
    /// inclusive by epsilon vertex and on-segment checks. Near-vertical
    /// edges skip the slope test instead of dividing by a tiny run.
    pub fn contains(&self, p: Vec2) -> bool {
        let r = self.red.xy;
        let g = self.green.xy;
        let b = self.blue.xy;
        if near_point(p, r) || near_point(p, g) || near_point(p, b) {
            return true;
        }
        if on_segment(p, r, g) || on_segment(p, g, b) || on_segment(p, b, r) {
            return true;
        }
        same_side(p, r, g, b) && same_side(p, g, b, r) && same_side(p, b, r, g)
    }

    /// Closest boundary-or-interior point to `p`.
    ///
    /// Contained points come back unchanged; outside points project onto
    /// the nearest edge segment.
    pub fn nearest(&self, p: Vec2) -> Vec2 {
        if self.contains(p) {
            return p;
        }
        let mut best = self.red.xy;
        let mut best_d2 = f32::MAX;
        for (a, b) in self.edges() {
            let cand = nearest_on_segment(p, a, b);
            let d2 = p.distance_squared(cand);
            if d2 < best_d2 {
                best_d2 = d2;
                best = cand;
            }
        }
        best
    }

    /// Intersection of the white-through-`p` ray with the boundary.
    ///
    /// Takes the closest forward hit along the ray, which can lie before
    /// or beyond `p`. With no forward hit (degenerate ray, `p` at the
    /// white point) `p` comes back unchanged.
    pub fn raycast(&self, p: Vec2) -> Vec2 {
        let origin = self.white.xy;
        let dir = p - origin;
        let mut best_t: Option<f32> = None;
        for (a, b) in self.edges() {
            if let Some(t) = ray_segment(origin, dir, a, b) {
                if best_t.is_none_or(|bt| t < bt) {
                    best_t = Some(t);
                }
            }
        }
        match best_t {
            Some(t) => origin + dir * t,
            None => p,
        }
    }

    /// Gamut-relative linear RGB to tristimulus.
    #[inline]
    pub fn linear_to_xyz(&self, rgb: Vec3) -> Vec3 {
        self.rgb_to_xyz * rgb
    }

    /// Tristimulus to gamut-relative linear RGB.
    ///
    /// When the brightest channel exceeds 1 the triplet is scaled down to
    /// peak at 1, keeping hue while clipping highlights softly.
    pub fn xyz_to_linear(&self, xyz: Vec3) -> Vec3 {
        let rgb = self.xyz_to_rgb * xyz;
        let peak = rgb.max_element();
        if peak > 1.0 { rgb / peak } else { rgb }
    }

    /// The sRGB / Rec.709 gamut (D65 white).
    pub fn srgb() -> &'static Gamut {
        static G: OnceLock<Gamut> = OnceLock::new();
        G.get_or_init(|| {
            Gamut::new(
                Vec2::new(0.64, 0.33),
                Vec2::new(0.30, 0.60),
                Vec2::new(0.15, 0.06),
                D65_XY,
            )
            .expect("sRGB primaries span a triangle")
        })
    }

    /// The Display P3 gamut (DCI-P3 primaries, D65 white).
    pub fn display_p3() -> &'static Gamut {
        static G: OnceLock<Gamut> = OnceLock::new();
        G.get_or_init(|| {
            Gamut::new(
                Vec2::new(0.680, 0.320),
                Vec2::new(0.265, 0.690),
                Vec2::new(0.150, 0.060),
                D65_XY,
            )
            .expect("Display P3 primaries span a triangle")
        })
    }
}

/// Half-plane test: `p` on the same side of edge `a`..`b` as `reference`.
///
/// Slope form; an edge whose run is below epsilon is treated as satisfied
/// rather than dividing by it.
fn same_side(p: Vec2, a: Vec2, b: Vec2, reference: Vec2) -> bool {
    let dx = b.x - a.x;
    if dx.abs() < EPS {
        return true;
    }
    let slope = (b.y - a.y) / dx;
    let side = |q: Vec2| q.y - a.y - slope * (q.x - a.x);
    side(p) * side(reference) >= 0.0
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_srgb_scenario() {
        let g = Gamut::srgb();
        assert!(g.contains(g.white.xy));
        assert!(g.contains(g.red.xy));
        assert!(g.contains(g.green.xy));
        assert!(g.contains(g.blue.xy));
        assert!(!g.contains(Vec2::new(0.9, 0.9)));
    }

    #[test]
    fn test_edge_midpoints_contained() {
        let g = Gamut::srgb();
        for (a, b) in [
            (g.red.xy, g.green.xy),
            (g.green.xy, g.blue.xy),
            (g.blue.xy, g.red.xy),
        ] {
            assert!(g.contains(a.lerp(b, 0.5)));
            assert!(g.contains(a.lerp(b, 0.125)));
        }
    }

    #[test]
    fn test_vertex_uv_consistent() {
        let g = Gamut::srgb();
        assert_eq!(g.red.uv, xy_to_uv(g.red.xy));
        assert_eq!(g.white.uv, xy_to_uv(g.white.xy));
        // D65 in u'v'
        assert_relative_eq!(g.white.uv.x, 0.19783, epsilon = 1e-4);
        assert_relative_eq!(g.white.uv.y, 0.46832, epsilon = 1e-4);
    }

    #[test]
    fn test_nearest_identity_inside() {
        let g = Gamut::srgb();
        let p = Vec2::new(0.35, 0.35);
        assert_eq!(g.nearest(p), p);
        assert_eq!(g.nearest(g.red.xy), g.red.xy);
    }

    #[test]
    fn test_nearest_outside_lands_on_boundary() {
        let g = Gamut::srgb();
        let p = Vec2::new(0.9, 0.9);
        let n = g.nearest(p);
        assert!(n != p);
        assert!(g.contains(n));
        // Minimal against a boundary sampling
        let d = p.distance(n);
        for (a, b) in [
            (g.red.xy, g.green.xy),
            (g.green.xy, g.blue.xy),
            (g.blue.xy, g.red.xy),
        ] {
            for i in 0..=20 {
                let q = a.lerp(b, i as f32 / 20.0);
                assert!(d <= p.distance(q) + 1e-6);
            }
        }
    }

    #[test]
    fn test_raycast_hits_boundary() {
        let g = Gamut::srgb();
        // Aim at a known edge midpoint: the hit is that midpoint.
        let mid = g.red.xy.lerp(g.green.xy, 0.5);
        let inside = g.white.xy.lerp(mid, 0.25);
        let hit = g.raycast(inside);
        assert_relative_eq!(hit.x, mid.x, epsilon = 1e-5);
        assert_relative_eq!(hit.y, mid.y, epsilon = 1e-5);

        // From outside along the same ray, same boundary point.
        let outside = g.white.xy.lerp(mid, 2.0);
        let hit = g.raycast(outside);
        assert_relative_eq!(hit.x, mid.x, epsilon = 1e-5);
        assert_relative_eq!(hit.y, mid.y, epsilon = 1e-5);
    }

    #[test]
    fn test_raycast_degenerate_returns_query() {
        let g = Gamut::srgb();
        assert_eq!(g.raycast(g.white.xy), g.white.xy);
    }

    #[test]
    fn test_collinear_primaries_rejected() {
        let err = Gamut::new(
            Vec2::new(0.2, 0.2),
            Vec2::new(0.4, 0.4),
            Vec2::new(0.6, 0.6),
            Vec2::new(0.3127, 0.3290),
        )
        .unwrap_err();
        assert!(err.is_collinear());
    }

    #[test]
    fn test_rgb_xyz_matrices() {
        let g = Gamut::srgb();

        // White maps to the white point, Y = 1.
        let white = g.linear_to_xyz(Vec3::ONE);
        assert_relative_eq!(white.y, 1.0, epsilon = 1e-4);
        let w_xy = chroma_math::xyz_to_xy(white);
        assert_relative_eq!(w_xy.x, 0.3127, epsilon = 1e-4);
        assert_relative_eq!(w_xy.y, 0.3290, epsilon = 1e-4);

        // Pure red maps onto the red primary's chromaticity.
        let red = g.linear_to_xyz(Vec3::new(1.0, 0.0, 0.0));
        let r_xy = chroma_math::xyz_to_xy(red);
        assert_relative_eq!(r_xy.x, 0.64, epsilon = 1e-4);
        assert_relative_eq!(r_xy.y, 0.33, epsilon = 1e-4);

        // Known sRGB matrix coefficients.
        assert_relative_eq!(g.rgb_to_xyz[0][0], 0.4124, epsilon = 1e-3);
        assert_relative_eq!(g.rgb_to_xyz[1][1], 0.7152, epsilon = 1e-3);

        // Round trip.
        let rgb = Vec3::new(0.5, 0.3, 0.8);
        let back = g.xyz_to_linear(g.linear_to_xyz(rgb));
        assert_relative_eq!(back.x, rgb.x, epsilon = 1e-4);
        assert_relative_eq!(back.y, rgb.y, epsilon = 1e-4);
        assert_relative_eq!(back.z, rgb.z, epsilon = 1e-4);
    }

    #[test]
    fn test_xyz_to_linear_normalizes_peak() {
        let g = Gamut::srgb();
        let hot = g.linear_to_xyz(Vec3::new(2.0, 0.5, 0.25));
        let rgb = g.xyz_to_linear(hot);
        assert_relative_eq!(rgb.max_element(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(rgb.y / rgb.x, 0.25, epsilon = 1e-4);
    }

    #[test]
    fn test_display_p3_wider_than_srgb() {
        let p3 = Gamut::display_p3();
        let srgb = Gamut::srgb();
        assert!(p3.contains(srgb.red.xy));
        assert!(p3.contains(srgb.green.xy));
        assert!(p3.contains(srgb.blue.xy));
        assert!(!srgb.contains(p3.red.xy));
        assert!(!srgb.contains(p3.green.xy));
    }
}
