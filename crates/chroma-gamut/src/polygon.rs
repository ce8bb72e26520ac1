//! Arbitrary simple-polygon gamut boundaries.
//!
//! Covers devices whose reproducible region is not a primary triangle
//! (multi-primary displays, measured device hulls). Geometry only; the
//! RGB/XYZ linear maps need exactly three primaries and stay on
//! [`Gamut`](crate::Gamut).

use chroma_math::Vec2;

use crate::edge::{near_point, nearest_on_segment, on_segment, ray_segment};
use crate::error::{GamutError, GamutResult};
use crate::gamut::GamutVertex;

// ============================================================================
// PolygonGamut
// ============================================================================

/// A simple-polygon gamut on the chromaticity plane.
///
/// Vertices are kept in the order given; edges close from the last vertex
/// back to the first. Immutable after construction.
///
/// # Example
///
/// ```rust
/// use chroma_gamut::PolygonGamut;
/// use chroma_math::Vec2;
///
/// let square = PolygonGamut::new(
///     vec![
///         Vec2::new(0.2, 0.2),
///         Vec2::new(0.4, 0.2),
///         Vec2::new(0.4, 0.4),
///         Vec2::new(0.2, 0.4),
///     ],
///     Vec2::new(0.3, 0.3),
/// )
/// .unwrap();
/// assert!(square.contains(Vec2::new(0.25, 0.35)));
/// assert!(!square.contains(Vec2::new(0.5, 0.3)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonGamut {
    /// Boundary vertices in winding order.
    pub vertices: Vec<GamutVertex>,
    /// White point vertex.
    pub white: GamutVertex,
}

impl PolygonGamut {
    /// Builds a polygon gamut from boundary chromaticities and a white
    /// point. Fails fast below three vertices.
    pub fn new(vertices: Vec<Vec2>, white: Vec2) -> GamutResult<Self> {
        if vertices.len() < 3 {
            return Err(GamutError::too_few_vertices(vertices.len()));
        }
        Ok(Self {
            vertices: vertices.into_iter().map(GamutVertex::new).collect(),
            white: GamutVertex::new(white),
        })
    }

    /// Boundary edges, closing back to the first vertex.
    fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i].xy, self.vertices[(i + 1) % n].xy))
    }

    /// Whether a chromaticity point lies inside or on the boundary.
    ///
    /// Even-odd ray parity, with explicit epsilon vertex and on-segment
    /// checks first: parity alone is unreliable exactly on the boundary
    /// and the boundary is inclusive.
    pub fn contains(&self, p: Vec2) -> bool {
        for (a, b) in self.edges() {
            if near_point(p, a) || on_segment(p, a, b) {
                return true;
            }
        }
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Closest boundary-or-interior point to `p`.
    pub fn nearest(&self, p: Vec2) -> Vec2 {
        if self.contains(p) {
            return p;
        }
        let mut best = self.vertices[0].xy;
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
    /// Closest forward hit wins; with none, `p` comes back unchanged.
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
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> PolygonGamut {
        PolygonGamut::new(
            vec![
                Vec2::new(0.2, 0.2),
                Vec2::new(0.4, 0.2),
                Vec2::new(0.4, 0.4),
                Vec2::new(0.2, 0.4),
            ],
            Vec2::new(0.3, 0.3),
        )
        .unwrap()
    }

    // Concave L shape: the notch sits in the upper right quadrant.
    fn l_shape() -> PolygonGamut {
        PolygonGamut::new(
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(0.4, 0.0),
                Vec2::new(0.4, 0.2),
                Vec2::new(0.2, 0.2),
                Vec2::new(0.2, 0.4),
                Vec2::new(0.0, 0.4),
            ],
            Vec2::new(0.1, 0.1),
        )
        .unwrap()
    }

    #[test]
    fn test_too_few_vertices() {
        let err = PolygonGamut::new(vec![Vec2::new(0.1, 0.1), Vec2::new(0.2, 0.2)], Vec2::ZERO)
            .unwrap_err();
        assert_eq!(err, GamutError::TooFewVertices { count: 2 });
    }

    #[test]
    fn test_square_containment() {
        let g = unit_square();
        assert!(g.contains(Vec2::new(0.3, 0.3)));
        assert!(g.contains(Vec2::new(0.2, 0.2))); // vertex
        assert!(g.contains(Vec2::new(0.3, 0.2))); // edge midpoint
        assert!(g.contains(Vec2::new(0.4, 0.3))); // right edge
        assert!(!g.contains(Vec2::new(0.5, 0.3)));
        assert!(!g.contains(Vec2::new(0.19, 0.19)));
    }

    #[test]
    fn test_concave_containment() {
        let g = l_shape();
        assert!(g.contains(Vec2::new(0.1, 0.1)));
        assert!(g.contains(Vec2::new(0.3, 0.1)));
        assert!(g.contains(Vec2::new(0.1, 0.3)));
        // Inside the notch, outside the gamut
        assert!(!g.contains(Vec2::new(0.3, 0.3)));
    }

    #[test]
    fn test_nearest() {
        let g = unit_square();
        let inside = Vec2::new(0.35, 0.25);
        assert_eq!(g.nearest(inside), inside);

        let n = g.nearest(Vec2::new(0.6, 0.3));
        assert_relative_eq!(n.x, 0.4, epsilon = 1e-6);
        assert_relative_eq!(n.y, 0.3, epsilon = 1e-6);

        // Off a corner, the vertex is closest.
        let n = g.nearest(Vec2::new(0.5, 0.5));
        assert_relative_eq!(n.x, 0.4, epsilon = 1e-6);
        assert_relative_eq!(n.y, 0.4, epsilon = 1e-6);
    }

    #[test]
    fn test_raycast() {
        let g = unit_square();
        // Straight right from the white point: exits at x = 0.4.
        let hit = g.raycast(Vec2::new(0.35, 0.3));
        assert_relative_eq!(hit.x, 0.4, epsilon = 1e-6);
        assert_relative_eq!(hit.y, 0.3, epsilon = 1e-6);

        // Degenerate ray at the white point itself.
        assert_eq!(g.raycast(g.white.xy), g.white.xy);
    }

    #[test]
    fn test_vertex_uv_cached() {
        let g = unit_square();
        for v in &g.vertices {
            assert_eq!(v.uv, chroma_math::xy_to_uv(v.xy));
        }
    }
}
