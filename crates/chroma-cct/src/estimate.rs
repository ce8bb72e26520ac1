//! Correlated color temperature queries.

use chroma_math::{Vec2, xy_to_uv};

use crate::planck::{LocusSample, MAX_KELVIN, MIN_KELVIN, locus};

/// Queries closer to the locus chord than this accept the triangular
/// answer; farther ones get the parabolic refinement.
const DUV_TOLERANCE: f64 = 0.002;

// ============================================================================
// CctEstimate
// ============================================================================

/// Correlated color temperature and signed locus offset.
///
/// Both fields are NaN when the queried chromaticity resolves to a
/// temperature outside the 1000-100000 K table range; NaN is the "not
/// representable" sentinel, not an error.
///
/// # Example
///
/// ```rust
/// use chroma_cct::CctEstimate;
/// use chroma_math::Vec2;
///
/// // Illuminant A chromaticity: a 2856 K incandescent source.
/// let estimate = CctEstimate::from_xy(Vec2::new(0.4476, 0.4074));
/// assert!((estimate.kelvin - 2856.0).abs() < 15.0);
/// assert!(estimate.duv.abs() < 0.002);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CctEstimate {
    /// Temperature in Kelvin, within [1000, 100000], or NaN.
    pub kelvin: f32,
    /// Perpendicular offset from the Planckian locus in the u'v' plane,
    /// positive above the locus (green side), or NaN.
    pub duv: f32,
}

impl CctEstimate {
    /// Estimates from a CIE 1976 u'v' chromaticity.
    pub fn from_uv(uv: Vec2) -> Self {
        let (kelvin, duv) = estimate(uv.x as f64, uv.y as f64);
        Self {
            kelvin: kelvin as f32,
            duv: duv as f32,
        }
    }

    /// Estimates from a CIE 1931 xy chromaticity.
    ///
    /// Degenerate xy (NaN from a zero projection denominator) flows
    /// through to the NaN estimate.
    pub fn from_xy(xy: Vec2) -> Self {
        Self::from_uv(xy_to_uv(xy))
    }

    /// True when the query resolved inside the representable range.
    #[inline]
    pub fn in_range(&self) -> bool {
        !self.kelvin.is_nan()
    }
}

// ============================================================================
// Estimation
// ============================================================================

fn distance(u: f64, v: f64, s: &LocusSample) -> f64 {
    ((u - s.u) * (u - s.u) + (v - s.v) * (v - s.v)).sqrt()
}

fn estimate(u: f64, v: f64) -> (f64, f64) {
    let table = locus();

    // Nearest sample by squared distance, linear scan.
    let mut nearest = 0;
    let mut best = f64::INFINITY;
    for (i, s) in table.iter().enumerate() {
        let d2 = (u - s.u) * (u - s.u) + (v - s.v) * (v - s.v);
        if d2 < best {
            best = d2;
            nearest = i;
        }
    }
    // An endpoint match means the true temperature lies at or beyond the
    // table edge. Non-finite queries also land here.
    if nearest == 0 || nearest == table.len() - 1 {
        return (f64::NAN, f64::NAN);
    }
    let prev = &table[nearest - 1];
    let next = &table[nearest + 1];

    // Triangular solution: project the query onto the chord between the
    // two neighbors.
    let du = next.u - prev.u;
    let dv = next.v - prev.v;
    let l = du.hypot(dv);
    let d_prev = distance(u, v, prev);
    let d_next = distance(u, v, next);
    let x = (d_prev * d_prev - d_next * d_next + l * l) / (2.0 * l);
    let t_triangular = prev.kelvin + (next.kelvin - prev.kelvin) * x / l;
    let perp2 = (d_prev * d_prev - x * x).max(0.0);

    // Which side of the chord the query falls on fixes the Duv sign.
    let foot_v = prev.v + dv * (x / l);
    let sign = if v >= foot_v { 1.0 } else { -1.0 };

    let (kelvin, duv) = if perp2 < DUV_TOLERANCE * DUV_TOLERANCE {
        (t_triangular, sign * perp2.sqrt())
    } else {
        parabolic(u, v, prev, &table[nearest], next)
            .map(|(t, d)| (t, sign * d))
            .unwrap_or((t_triangular, sign * perp2.sqrt()))
    };

    if (MIN_KELVIN..=MAX_KELVIN).contains(&kelvin) {
        (kelvin, duv)
    } else {
        (f64::NAN, f64::NAN)
    }
}

/// Parabolic refinement: fit distance-to-query over the three sample
/// temperatures and solve for the vertex. `None` when the fit is too
/// flat to carry a vertex, which sends the caller back to the
/// triangular answer.
fn parabolic(
    u: f64,
    v: f64,
    prev: &LocusSample,
    mid: &LocusSample,
    next: &LocusSample,
) -> Option<(f64, f64)> {
    let (t0, t1, t2) = (prev.kelvin, mid.kelvin, next.kelvin);
    let (d0, d1, d2) = (
        distance(u, v, prev),
        distance(u, v, mid),
        distance(u, v, next),
    );
    let det = (t2 - t1) * (t0 - t2) * (t1 - t0);
    let a = (t0 * (d2 - d1) + t1 * (d0 - d2) + t2 * (d1 - d0)) / det;
    if a.abs() < 1e-20 {
        return None;
    }
    let b = -(t0 * t0 * (d2 - d1) + t1 * t1 * (d0 - d2) + t2 * t2 * (d1 - d0)) / det;
    let c = -(d0 * (t2 - t1) * t1 * t2 + d1 * (t0 - t2) * t0 * t2 + d2 * (t1 - t0) * t0 * t1) / det;
    let vertex = -b / (2.0 * a);
    Some((vertex, a * vertex * vertex + b * vertex + c))
}

// ============================================================================
// Tests
// ============================================================================
