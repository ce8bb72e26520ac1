//! Two-stage numeric solver behind the hue/chroma/tone constructor.
//!
//! Finding the display color for a requested (hue, chroma, tone) triple
//! means inverting the appearance model under an exact luminance
//! constraint, restricted to the sRGB cube. Stage one runs a Newton-style
//! refinement of CAM16 lightness and succeeds whenever the request is
//! reachable. Stage two handles the rest on the cube surface: it brackets
//! the target hue between cube-edge points on the target-luminance plane,
//! then bisects along the 8-bit quantization planes of each axis until
//! the bracket collapses.
//!
//! Everything here runs in `f64`. The bisection compares hues of colors
//! one quantization step apart, which is below `f32` resolution once the
//! compression chain has flattened them.

use std::f64::consts::PI;
use std::sync::OnceLock;

use chroma_math::{in_cyclic_order, sanitize_degrees_f64};
use chroma_transfer::lstar::y_from_lstar_f64;
use chroma_transfer::srgb;

/// Double-precision triplet used throughout the solver.
pub(crate) type V3 = [f64; 3];

/// Row-major double-precision 3x3 matrix.
type M3 = [[f64; 3]; 3];

// ============================================================================
// Constants
// ============================================================================

/// Linear sRGB (0..100) to XYZ (Y = 100), D65 white.
const SRGB_TO_XYZ: M3 = [
    [0.41233895, 0.35762064, 0.18051042],
    [0.2126, 0.7152, 0.0722],
    [0.01932141, 0.11916382, 0.95034478],
];

/// XYZ to the CAM16 cone-like response basis.
const XYZ_TO_CAM16RGB: M3 = [
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
];

/// Luminance weights of linear sRGB, the middle row of [`SRGB_TO_XYZ`].
const K_R: f64 = 0.2126;
const K_G: f64 = 0.7152;
const K_B: f64 = 0.0722;

// ============================================================================
// Matrix helpers
// ============================================================================

#[inline]
fn mat_mul_v(m: &M3, v: &V3) -> V3 {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

fn mat_mul_m(a: &M3, b: &M3) -> M3 {
    let mut out = [[0.0; 3]; 3];
    for (row, a_row) in out.iter_mut().zip(a.iter()) {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a_row[0] * b[0][j] + a_row[1] * b[1][j] + a_row[2] * b[2][j];
        }
    }
    out
}

/// Adjugate-over-determinant inverse. The caller only feeds the folded
/// adaptation matrix, which is non-singular for any physical white point.
fn invert_m3(m: &M3) -> M3 {
    let det = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);
    let inv_det = 1.0 / det;
    [
        [
            (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
            (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
        ],
        [
            (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
            (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
        ],
        [
            (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
            (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
        ],
    ]
}

// ============================================================================
// Solver parameters
// ============================================================================

/// Constants of the tone-mapping viewing context, derived once.
///
/// The context matches the CAM16 default viewing conditions (D65 white,
/// adapting luminance from an L* = 50 background, average surround, no
/// discounting), but is re-derived here in double precision. The
/// luminance-level factor and the per-channel adaptation are folded into
/// a single linear-sRGB-to-scaled-cone matrix so the iteration loop is
/// one matrix multiply plus the response compression.
struct SolverParams {
    scaled_from_linrgb: M3,
    linrgb_from_scaled: M3,
    /// Linear-light heights (0..100 scale) of the 255 boundaries between
    /// adjacent 8-bit encoded values.
    critical_planes: [f64; 255],
    n: f64,
    aw: f64,
    nbb: f64,
    ncb: f64,
    c: f64,
    z: f64,
    nc: f64,
}

fn params() -> &'static SolverParams {
    static PARAMS: OnceLock<SolverParams> = OnceLock::new();
    PARAMS.get_or_init(SolverParams::derive)
}

impl SolverParams {
    fn derive() -> Self {
        let white = [95.047_f64, 100.0, 108.883];
        let mid_gray_y = y_from_lstar_f64(50.0);
        let adapting_luminance = 200.0 / PI * mid_gray_y / 100.0;

        // Average surround.
        let f = 1.0;
        let c = 0.69;
        let nc = 1.0;

        let cone_w = mat_mul_v(&XYZ_TO_CAM16RGB, &white);
        let d = (f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp()))
            .clamp(0.0, 1.0);
        let rgb_d = [
            d * (white[1] / cone_w[0]) + 1.0 - d,
            d * (white[1] / cone_w[1]) + 1.0 - d,
            d * (white[1] / cone_w[2]) + 1.0 - d,
        ];

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let fl = 0.2 * k4 * (5.0 * adapting_luminance)
            + 0.1 * (1.0 - k4) * (1.0 - k4) * (5.0 * adapting_luminance).cbrt();

        let n = mid_gray_y / white[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        let rw = compression(fl * rgb_d[0] * cone_w[0] / 100.0);
        let gw = compression(fl * rgb_d[1] * cone_w[1] / 100.0);
        let bw = compression(fl * rgb_d[2] * cone_w[2] / 100.0);
        let aw = (2.0 * rw + gw + 0.05 * bw) * nbb;

        let cone_from_linrgb = mat_mul_m(&XYZ_TO_CAM16RGB, &SRGB_TO_XYZ);
        let mut scaled_from_linrgb = [[0.0; 3]; 3];
        for (i, row) in scaled_from_linrgb.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = cone_from_linrgb[i][j] * rgb_d[i] * fl / 100.0;
            }
        }
        let linrgb_from_scaled = invert_m3(&scaled_from_linrgb);

        let mut critical_planes = [0.0; 255];
        for (i, plane) in critical_planes.iter_mut().enumerate() {
            *plane = 100.0 * srgb::eotf_f64((i as f64 + 0.5) / 255.0);
        }

        Self {
            scaled_from_linrgb,
            linrgb_from_scaled,
            critical_planes,
            n,
            aw,
            nbb,
            ncb,
            c,
            z,
            nc,
        }
    }
}

/// CAM16 response compression. The luminance factor is pre-folded into
/// the matrix, so the input is already FL-scaled.
#[inline]
fn compression(scaled: f64) -> f64 {
    let x = scaled.abs().powf(0.42);
    (400.0 * x / (x + 27.13)).copysign(scaled)
}

#[inline]
fn inverse_compression(adapted: f64) -> f64 {
    let base = (27.13 * adapted.abs() / (400.0 - adapted.abs())).max(0.0);
    base.powf(1.0 / 0.42).copysign(adapted)
}

// ============================================================================
// Stage one: Newton refinement
// ============================================================================

/// Newton refinement of CAM16 lightness at fixed hue and chroma.
///
/// Seeds J from `sqrt(Y) * 11`, reconstructs a candidate linear RGB each
/// round through the same per-quadrant chain as the appearance-model
/// inverse, and corrects J from the candidate's luminance error. Returns
/// `None` as soon as a channel leaves the cube, which is the explicit
/// signal to fall back to the surface bisection.
fn find_result_by_j(hue_radians: f64, chroma: f64, y: f64) -> Option<V3> {
    let params = params();
    let mut j = y.sqrt() * 11.0;

    let t_inner_coeff = 1.0 / (1.64 - 0.29_f64.powf(params.n)).powf(0.73);
    let e_hue = 0.25 * ((hue_radians + 2.0).cos() + 3.8);
    let p1 = e_hue * (50000.0 / 13.0) * params.nc * params.ncb;
    let h_sin = hue_radians.sin();
    let h_cos = hue_radians.cos();

    for round in 0..5 {
        let j_normalized = j / 100.0;
        let alpha = if chroma == 0.0 || j == 0.0 {
            0.0
        } else {
            chroma / j_normalized.sqrt()
        };
        let t = (alpha * t_inner_coeff).powf(1.0 / 0.9);
        let ac = params.aw * j_normalized.powf(1.0 / (params.c * params.z));
        let p2 = ac / params.nbb;

        let (a, b) = if t < 1e-7 {
            (0.0, 0.0)
        } else {
            // Same per-quadrant solve as the appearance-model inverse.
            let p1_t = p1 / t;
            let p3 = 1.05_f64;
            if h_sin.abs() >= h_cos.abs() {
                let p4 = p1_t / h_sin;
                let cb = (p2 + 0.305) * (2.0 + p3) * (460.0 / 1403.0)
                    / (p4 + (2.0 + p3) * (220.0 / 1403.0) * (h_cos / h_sin) - 27.0 / 1403.0
                        + p3 * (6300.0 / 1403.0));
                (cb * h_cos / h_sin, cb)
            } else {
                let p5 = p1_t / h_cos;
                let ca = (p2 + 0.305) * (2.0 + p3) * (460.0 / 1403.0)
                    / (p5 + (2.0 + p3) * (220.0 / 1403.0)
                        - (27.0 / 1403.0 - p3 * (6300.0 / 1403.0)) * (h_sin / h_cos));
                (ca, ca * h_sin / h_cos)
            }
        };

        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;
        let scaled = [
            inverse_compression(r_a),
            inverse_compression(g_a),
            inverse_compression(b_a),
        ];
        let linrgb = mat_mul_v(&params.linrgb_from_scaled, &scaled);

        if linrgb[0] < 0.0 || linrgb[1] < 0.0 || linrgb[2] < 0.0 {
            return None;
        }
        let fnj = K_R * linrgb[0] + K_G * linrgb[1] + K_B * linrgb[2];
        if fnj <= 0.0 {
            return None;
        }
        if round == 4 || (fnj - y).abs() < 2e-3 {
            if linrgb[0] > 100.01 || linrgb[1] > 100.01 || linrgb[2] > 100.01 {
                return None;
            }
            return Some(linrgb);
        }
        // Newton step with 2 * fn(j) / j approximating fn'(j).
        j -= (fnj - y) * j / (2.0 * fnj);
    }
    None
}

// ============================================================================
// Stage two: surface bisection
// ============================================================================

/// Hue angle of a linear RGB point, in degrees.
///
/// The raw atan2 output is left unwrapped; the cyclic-order comparisons
/// wrap their deltas themselves.
fn hue_degrees_of(linrgb: &V3) -> f64 {
    let params = params();
    let scaled = mat_mul_v(&params.scaled_from_linrgb, linrgb);
    let r_a = compression(scaled[0]);
    let g_a = compression(scaled[1]);
    let b_a = compression(scaled[2]);
    let a = (11.0 * r_a - 12.0 * g_a + b_a) / 11.0;
    let b = (r_a + g_a - 2.0 * b_a) / 9.0;
    b.atan2(a).to_degrees()
}

/// Intersection of the target-luminance plane with cube edge `n`.
///
/// The twelve edges come in three groups of four: `n < 4` solves red
/// given a green/blue corner pair, `n < 8` solves green, the rest solve
/// blue. `None` when the solved channel falls outside [0, 100].
fn nth_vertex(y: f64, n: usize) -> Option<V3> {
    let coord_a = if n % 4 <= 1 { 0.0 } else { 100.0 };
    let coord_b = if n % 2 == 0 { 0.0 } else { 100.0 };
    if n < 4 {
        let g = coord_a;
        let b = coord_b;
        let r = (y - g * K_G - b * K_B) / K_R;
        (0.0..=100.0).contains(&r).then_some([r, g, b])
    } else if n < 8 {
        let b = coord_a;
        let r = coord_b;
        let g = (y - r * K_R - b * K_B) / K_G;
        (0.0..=100.0).contains(&g).then_some([r, g, b])
    } else {
        let r = coord_a;
        let g = coord_b;
        let b = (y - r * K_R - g * K_G) / K_B;
        (0.0..=100.0).contains(&b).then_some([r, g, b])
    }
}

/// Brackets the target hue between two cube-surface points that share
/// the target luminance.
///
/// Walks the valid cube-edge intersections, first opening the bracket to
/// span the whole hue circle (`uncut`), then narrowing it to the pair
/// whose hues cyclically enclose the target.
fn bisect_to_segment(y: f64, target_hue: f64) -> (V3, V3) {
    let mut left = [-1.0; 3];
    let mut right = left;
    let mut left_hue = 0.0;
    let mut right_hue = 0.0;
    let mut initialized = false;
    let mut uncut = true;
    for n in 0..12 {
        let Some(mid) = nth_vertex(y, n) else {
            continue;
        };
        let mid_hue = hue_degrees_of(&mid);
        if !initialized {
            left = mid;
            right = mid;
            left_hue = mid_hue;
            right_hue = mid_hue;
            initialized = true;
            continue;
        }
        if uncut || in_cyclic_order(left_hue, mid_hue, right_hue) {
            uncut = false;
            if in_cyclic_order(left_hue, target_hue, mid_hue) {
                right = mid;
                right_hue = mid_hue;
            } else {
                left = mid;
                left_hue = mid_hue;
            }
        }
    }
    (left, right)
}

/// Encodes a linear component (0..100) onto the continuous 8-bit scale,
/// without rounding.
#[inline]
fn encoded_8bit(component: f64) -> f64 {
    255.0 * srgb::oetf_f64(component / 100.0)
}

/// Index of the critical plane strictly below an 8-bit-scaled value.
#[inline]
fn critical_plane_below(x: f64) -> i32 {
    (x - 0.5).floor() as i32
}

/// Index of the critical plane at or above an 8-bit-scaled value.
#[inline]
fn critical_plane_above(x: f64) -> i32 {
    (x - 0.5).ceil() as i32
}

/// Point on the segment from `source` to `target` whose `axis` component
/// equals `coordinate`.
fn set_coordinate(source: &V3, coordinate: f64, target: &V3, axis: usize) -> V3 {
    let t = (coordinate - source[axis]) / (target[axis] - source[axis]);
    [
        source[0] + (target[0] - source[0]) * t,
        source[1] + (target[1] - source[1]) * t,
        source[2] + (target[2] - source[2]) * t,
    ]
}

#[inline]
fn midpoint(a: &V3, b: &V3) -> V3 {
    [
        (a[0] + b[0]) / 2.0,
        (a[1] + b[1]) / 2.0,
        (a[2] + b[2]) / 2.0,
    ]
}

/// Bisects the hue bracket down to adjacent quantization planes.
///
/// Along every axis where the bracket endpoints differ, the endpoints
/// snap to critical-plane indices and the bracket is halved at plane
/// resolution, at most eight steps per axis (256 planes collapse to a
/// single step in eight halvings). Each midpoint stays on the
/// target-luminance plane since it is a linear blend of two points on
/// that plane.
fn bisect_to_limit(y: f64, target_hue: f64) -> V3 {
    let params = params();
    let (mut left, mut right) = bisect_to_segment(y, target_hue);
    let mut left_hue = hue_degrees_of(&left);
    for axis in 0..3 {
        if left[axis] != right[axis] {
            let (mut l_plane, mut r_plane) = if left[axis] < right[axis] {
                (
                    critical_plane_below(encoded_8bit(left[axis])),
                    critical_plane_above(encoded_8bit(right[axis])),
                )
            } else {
                (
                    critical_plane_above(encoded_8bit(left[axis])),
                    critical_plane_below(encoded_8bit(right[axis])),
                )
            };
            for _ in 0..8 {
                if (r_plane - l_plane).abs() <= 1 {
                    break;
                }
                let m_plane = (l_plane + r_plane) / 2;
                let mid_plane_coordinate = params.critical_planes[m_plane as usize];
                let mid = set_coordinate(&left, mid_plane_coordinate, &right, axis);
                let mid_hue = hue_degrees_of(&mid);
                if in_cyclic_order(left_hue, target_hue, mid_hue) {
                    right = mid;
                    r_plane = m_plane;
                } else {
                    left = mid;
                    left_hue = mid_hue;
                    l_plane = m_plane;
                }
            }
        }
    }
    midpoint(&left, &right)
}

// ============================================================================
// Entry points
// ============================================================================

/// Linear RGB (0..100 scale) of the closest realizable color for the
/// requested hue (degrees), chroma and tone.
///
/// Sub-threshold chroma and near-endpoint tones short-circuit to the
/// exact gray of that tone.
pub(crate) fn solve(hue: f64, chroma: f64, tone: f64) -> V3 {
    let chroma = chroma.max(0.0);
    let tone = tone.clamp(0.0, 100.0);
    if chroma < 1e-4 || tone < 1e-4 || tone > 100.0 - 1e-4 {
        let y = y_from_lstar_f64(tone);
        return [y, y, y];
    }
    let hue = sanitize_degrees_f64(hue);
    let y = y_from_lstar_f64(tone);
    if let Some(exact) = find_result_by_j(hue.to_radians(), chroma, y) {
        return exact;
    }
    bisect_to_limit(y, hue)
}

/// XYZ (Y = 100 scale) of a linear RGB triplet, double precision.
#[inline]
pub(crate) fn xyz_from_linrgb(linrgb: V3) -> V3 {
    mat_mul_v(&SRGB_TO_XYZ, &linrgb)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chroma_cam::ViewingConditions;
    use chroma_transfer::lstar::lstar_from_y_f64;

    fn luminance(linrgb: &V3) -> f64 {
        K_R * linrgb[0] + K_G * linrgb[1] + K_B * linrgb[2]
    }

    #[test]
    fn test_folded_matrix_anchor() {
        // Spot value of the combined adaptation matrix: red row, red
        // column, with FL and the discount factors folded in.
        let p = params();
        assert!(
            (p.scaled_from_linrgb[0][0] - 0.001200833568784504).abs() < 1e-9,
            "fold drifted: {}",
            p.scaled_from_linrgb[0][0]
        );
        // Round trip through the inverse is identity.
        let id = mat_mul_m(&p.scaled_from_linrgb, &p.linrgb_from_scaled);
        for (i, row) in id.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((cell - expected).abs() < 1e-9, "id[{}][{}]={}", i, j, cell);
            }
        }
    }

    #[test]
    fn test_critical_planes() {
        let p = params();
        // First boundary: 0.5/255 encoded, still on the linear toe.
        assert!((p.critical_planes[0] - 0.015176349177441876).abs() < 1e-12);
        // Monotonic, ending just below full scale.
        for w in p.critical_planes.windows(2) {
            assert!(w[0] < w[1]);
        }
        assert!(p.critical_planes[254] > 99.0 && p.critical_planes[254] < 100.0);
    }

    #[test]
    fn test_params_agree_with_viewing_conditions() {
        // The solver re-derives the default CAM16 context in f64; the
        // f32 preset must describe the same context.
        let p = params();
        let vc = ViewingConditions::default_cam16();
        assert_relative_eq!(p.n as f32, vc.n, epsilon = 1e-6);
        assert_relative_eq!(p.aw as f32, vc.aw, epsilon = 1e-3);
        assert_relative_eq!(p.nbb as f32, vc.nbb, epsilon = 1e-6);
        assert_relative_eq!(p.z as f32, vc.z, epsilon = 1e-6);
    }

    #[test]
    fn test_gray_fast_paths() {
        let mid = solve(77.0, 0.0, 50.0);
        let y = y_from_lstar_f64(50.0);
        for channel in mid {
            assert!((channel - y).abs() < 1e-12);
        }
        assert_eq!(solve(120.0, 40.0, 0.0), [0.0, 0.0, 0.0]);
        let white = solve(120.0, 40.0, 100.0);
        for channel in white {
            assert!((channel - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_newton_stage_hits_tone_and_hue() {
        let y = y_from_lstar_f64(46.4);
        let linrgb = solve(27.4, 30.0, 46.4);
        assert!(
            (luminance(&linrgb) - y).abs() < 0.01,
            "luminance {} vs {}",
            luminance(&linrgb),
            y
        );
        let hue = sanitize_degrees_f64(hue_degrees_of(&linrgb));
        assert!((hue - 27.4).abs() < 0.5, "hue {}", hue);
        for channel in linrgb {
            assert!((0.0..=100.01).contains(&channel));
        }
    }

    #[test]
    fn test_bisection_stage_stays_on_luminance_plane() {
        // Chroma far beyond the cube forces the surface fallback. The
        // fallback works entirely inside the target-luminance plane, so
        // the result's luminance is exact.
        let y = y_from_lstar_f64(46.4);
        let linrgb = solve(27.4, 200.0, 46.4);
        assert!((luminance(&linrgb) - y).abs() < 1e-9);
        let hue = sanitize_degrees_f64(hue_degrees_of(&linrgb));
        assert!((hue - 27.4).abs() < 2.0, "hue {}", hue);
        for channel in linrgb {
            assert!((0.0..=100.01).contains(&channel));
        }
    }

    #[test]
    fn test_hue_anchors() {
        let red = sanitize_degrees_f64(hue_degrees_of(&[100.0, 0.0, 0.0]));
        let green = sanitize_degrees_f64(hue_degrees_of(&[0.0, 100.0, 0.0]));
        let blue = sanitize_degrees_f64(hue_degrees_of(&[0.0, 0.0, 100.0]));
        assert!((red - 27.4).abs() < 0.5, "red hue {}", red);
        assert!((green - 142.1).abs() < 0.5, "green hue {}", green);
        assert!((blue - 282.8).abs() < 0.5, "blue hue {}", blue);
    }

    #[test]
    fn test_vertex_enumeration() {
        // Every reported cube-edge vertex sits exactly on the luminance
        // plane and inside the cube.
        let y = 50.0;
        let mut found = 0;
        for n in 0..12 {
            if let Some(v) = nth_vertex(y, n) {
                found += 1;
                assert!((luminance(&v) - y).abs() < 1e-9);
                for channel in v {
                    assert!((0.0..=100.0).contains(&channel));
                }
            }
        }
        // At Y = 50 only the four green-solving edges intersect.
        assert_eq!(found, 4);
    }

    #[test]
    fn test_critical_plane_indexing() {
        assert_eq!(critical_plane_below(0.4), -1);
        assert_eq!(critical_plane_above(0.4), 0);
        assert_eq!(critical_plane_below(10.6), 10);
        assert_eq!(critical_plane_above(10.6), 11);
        // A value exactly on a plane indexes it from both sides.
        assert_eq!(critical_plane_below(10.5), 10);
        assert_eq!(critical_plane_above(10.5), 10);
    }

    #[test]
    fn test_set_coordinate() {
        let source = [0.0, 0.0, 0.0];
        let target = [100.0, 50.0, 10.0];
        let mid = set_coordinate(&source, 50.0, &target, 0);
        assert_eq!(mid, [50.0, 25.0, 5.0]);
    }

    #[test]
    fn test_solver_tone_matches_lstar_axis() {
        for tone in [10.0, 30.0, 50.0, 70.0, 90.0] {
            let linrgb = solve(180.0, 20.0, tone);
            let realized = lstar_from_y_f64(luminance(&linrgb));
            assert!(
                (realized - tone).abs() < 0.3,
                "tone {} realized {}",
                tone,
                realized
            );
        }
    }
}
