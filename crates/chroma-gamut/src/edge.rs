//! Segment geometry shared by the triangle and polygon boundaries.
//!
//! All helpers work on the chromaticity plane and share one epsilon for
//! inclusion and degeneracy guards.

use chroma_math::Vec2;

/// Plane epsilon for vertex/edge inclusion and near-degenerate guards.
pub(crate) const EPS: f32 = 1e-5;

/// True when `p` is within epsilon of `q`.
#[inline]
pub(crate) fn near_point(p: Vec2, q: Vec2) -> bool {
    p.distance_squared(q) < EPS * EPS
}

/// Closest point to `p` on the segment `a`..`b` (clamped projection).
pub(crate) fn nearest_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 <= EPS * EPS {
        return a;
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    a + ab * t
}

/// True when `p` lies within epsilon of the segment `a`..`b`.
#[inline]
pub(crate) fn on_segment(p: Vec2, a: Vec2, b: Vec2) -> bool {
    p.distance_squared(nearest_on_segment(p, a, b)) < EPS * EPS
}

/// Ray/segment intersection on the plane.
///
/// The ray is `origin + t * dir`; the segment runs `a`..`b`. Returns the
/// ray parameter `t` for a forward hit (t > 0) landing inside the segment,
/// `None` for parallel, behind-origin, or out-of-segment solutions.
pub(crate) fn ray_segment(origin: Vec2, dir: Vec2, a: Vec2, b: Vec2) -> Option<f32> {
    let e = b - a;
    let denom = dir.perp_dot(e);
    if denom.abs() < 1e-12 {
        return None;
    }
    let ao = a - origin;
    let t = ao.perp_dot(e) / denom;
    let s = ao.perp_dot(dir) / denom;
    if t > 0.0 && (0.0..=1.0).contains(&s) {
        Some(t)
    } else {
        None
    }
}
