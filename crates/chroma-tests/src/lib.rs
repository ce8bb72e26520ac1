//! Integration tests for the chroma crates.
//!
//! End-to-end checks across crate seams: the appearance model fed by the
//! gamut matrices, tone against the L* curve, attribute round-trips
//! through display colors, and the locus table behind color temperature.

#[cfg(test)]
mod tests {
    use chroma_math::Vec3;

    /// XYZ on the Y = 100 scale for a display-referred sRGB triplet.
    fn xyz_of(r: f32, g: f32, b: f32) -> Vec3 {
        use chroma_gamut::Gamut;
        use chroma_transfer::srgb;

        let linear = Vec3::new(srgb::eotf(r), srgb::eotf(g), srgb::eotf(b));
        Gamut::srgb().linear_to_xyz(linear) * 100.0
    }

    #[test]
    fn test_cam_roundtrip_both_families() {
        use chroma_cam::{Cam, ViewingConditions};

        let fixtures = [
            xyz_of(1.0, 0.0, 0.0),
            xyz_of(0.0, 1.0, 0.0),
            xyz_of(0.0, 0.0, 1.0),
            xyz_of(0.9, 0.6, 0.1),
            xyz_of(0.2, 0.4, 0.3),
            xyz_of(0.5, 0.5, 0.5),
            Vec3::ZERO,
        ];
        for vc in [
            ViewingConditions::default_cam16(),
            ViewingConditions::default_cam02(),
        ] {
            for xyz in fixtures {
                let back = Cam::from_xyz(xyz, vc).to_xyz(vc);
                assert!(
                    (back.x - xyz.x).abs() < 0.05,
                    "{:?} x {} vs {}",
                    vc.family,
                    back.x,
                    xyz.x
                );
                assert!((back.y - xyz.y).abs() < 0.05);
                assert!((back.z - xyz.z).abs() < 0.05);
            }
        }
    }

    #[test]
    fn test_ucs_embedding_roundtrips_to_xyz() {
        use chroma_cam::{Cam, UcsCoords, UcsVariant, ViewingConditions};

        let fixtures = [
            xyz_of(0.8, 0.3, 0.2),
            xyz_of(0.2, 0.7, 0.4),
            xyz_of(0.4, 0.4, 0.9),
        ];
        for vc in [
            ViewingConditions::default_cam16(),
            ViewingConditions::default_cam02(),
        ] {
            for variant in [UcsVariant::Ucs, UcsVariant::Lcd, UcsVariant::Scd] {
                for xyz in fixtures {
                    let cam = Cam::from_xyz(xyz, vc);
                    let back = UcsCoords::from_cam(&cam, variant).to_cam(vc).to_xyz(vc);
                    assert!(
                        (back.x - xyz.x).abs() < 0.05,
                        "{:?}/{:?} x {} vs {}",
                        vc.family,
                        variant,
                        back.x,
                        xyz.x
                    );
                    assert!((back.y - xyz.y).abs() < 0.05);
                    assert!((back.z - xyz.z).abs() < 0.05);
                }
            }
        }
    }

    #[test]
    fn test_hue_angle_range_and_shortest_arc() {
        use chroma_cam::{Cam, ViewingConditions};
        use chroma_math::difference_degrees;

        let vc = ViewingConditions::default_cam16();
        for (r, g, b) in [
            (1.0, 0.0, 0.0),
            (1.0, 1.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 1.0, 1.0),
            (0.0, 0.0, 1.0),
            (1.0, 0.0, 1.0),
            (0.3, 0.9, 0.1),
        ] {
            let cam = Cam::from_xyz(xyz_of(r, g, b), vc);
            assert!(cam.hue >= 0.0 && cam.hue < 360.0, "hue {}", cam.hue);
        }

        // Interpolating 350 -> 10 degrees crosses zero, not 180.
        let a = Cam::from_jch(50.0, 40.0, 350.0, vc);
        let b = Cam::from_jch(50.0, 40.0, 10.0, vc);
        let mid = a.lerp(&b, 0.5);
        assert!(difference_degrees(mid.hue, 0.0) < 1e-3, "hue {}", mid.hue);
        assert_eq!(mid.j, 50.0);
        assert_eq!(mid.chroma, 40.0);
        assert!(mid.q.is_nan());
    }

    #[test]
    fn test_white_point_reads_neutral_when_discounted() {
        use chroma_cam::{Cam, CamFamily, Surround, ViewingConditions};
        use chroma_math::D65;

        for family in [CamFamily::Cam16, CamFamily::Cam02] {
            let vc =
                ViewingConditions::new(family, D65, 40.0, 50.0, Surround::Average, true).unwrap();
            let cam = Cam::from_xyz(D65, &vc);
            assert!(cam.chroma < 0.01, "{:?} chroma {}", family, cam.chroma);
            assert!((cam.j - 100.0).abs() < 0.1, "{:?} j {}", family, cam.j);
        }
    }

    #[test]
    fn test_srgb_gamut_scenario() {
        use chroma_gamut::Gamut;
        use chroma_math::Vec2;

        let srgb = Gamut::srgb();

        // Vertices and edge midpoints sit on the inclusive boundary.
        for v in [srgb.red.xy, srgb.green.xy, srgb.blue.xy] {
            assert!(srgb.contains(v));
            assert_eq!(srgb.nearest(v), v);
        }
        let mid_rg = (srgb.red.xy + srgb.green.xy) * 0.5;
        assert!(srgb.contains(mid_rg));

        // A laser-green chromaticity falls outside and maps back in.
        let laser = Vec2::new(0.17, 0.80);
        assert!(!srgb.contains(laser));

        let near = srgb.nearest(laser);
        assert!(srgb.contains(near));
        assert!(near.distance(laser) < srgb.white.xy.distance(laser));
        assert_eq!(srgb.nearest(near), near);

        // The raycast result stays on the white-through-target line.
        let edge = srgb.raycast(laser);
        assert!(srgb.contains(edge));
        let along = edge - srgb.white.xy;
        let toward = laser - srgb.white.xy;
        assert!(along.perp_dot(toward).abs() < 1e-5);
        assert!(along.dot(toward) > 0.0);
    }

    #[test]
    fn test_polygon_agrees_with_triangle() {
        use chroma_gamut::{Gamut, PolygonGamut};
        use chroma_math::Vec2;

        let tri = Gamut::srgb();
        let poly =
            PolygonGamut::new(vec![tri.red.xy, tri.green.xy, tri.blue.xy], tri.white.xy).unwrap();

        for p in [
            Vec2::new(0.3127, 0.3290),
            Vec2::new(0.55, 0.40),
            Vec2::new(0.17, 0.80),
            Vec2::new(0.05, 0.05),
        ] {
            assert_eq!(tri.contains(p), poly.contains(p), "containment at {:?}", p);
            assert!(tri.nearest(p).distance(poly.nearest(p)) < 1e-5, "nearest at {:?}", p);
            assert!(tri.raycast(p).distance(poly.raycast(p)) < 1e-5, "raycast at {:?}", p);
        }
    }

    #[test]
    fn test_gamut_matrices_roundtrip() {
        use approx::assert_relative_eq;
        use chroma_gamut::Gamut;
        use chroma_math::{D65_XY, xyz_to_xy};

        let srgb = Gamut::srgb();

        // Equal drive reproduces the white point at unit luminance.
        let white = srgb.linear_to_xyz(Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(white.y, 1.0, epsilon = 1e-4);
        let wxy = xyz_to_xy(white);
        assert_relative_eq!(wxy.x, D65_XY.x, epsilon = 1e-4);
        assert_relative_eq!(wxy.y, D65_XY.y, epsilon = 1e-4);

        for rgb in [Vec3::new(0.9, 0.1, 0.3), Vec3::new(0.2, 0.6, 0.4)] {
            let back = srgb.xyz_to_linear(srgb.linear_to_xyz(rgb));
            assert_relative_eq!(back.x, rgb.x, epsilon = 1e-4);
            assert_relative_eq!(back.y, rgb.y, epsilon = 1e-4);
            assert_relative_eq!(back.z, rgb.z, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_hct_neutral_axis() {
        use chroma_hct::Hct;
        use chroma_transfer::srgb;

        let white = Hct::new(120.0, 60.0, 100.0);
        let w = white.to_srgb();
        assert!(w.x > 0.9999 && w.y > 0.9999 && w.z > 0.9999);
        assert!(white.tone() > 99.9);

        let black = Hct::new(240.0, 40.0, 0.0);
        assert_eq!(black.to_srgb(), Vec3::ZERO);
        assert!(black.tone() < 0.1 && black.chroma() < 0.1);

        // Mid gray: equal channels at the sRGB encoding of 18.4% luminance.
        let gray = Hct::new(0.0, 0.0, 50.0);
        let g = gray.to_srgb();
        assert!((g.x - g.y).abs() < 1e-6 && (g.y - g.z).abs() < 1e-6);
        assert!((g.x - srgb::oetf(0.18418)).abs() < 2e-3, "gray {}", g.x);
        assert!((gray.tone() - 50.0).abs() < 0.05);
    }

    #[test]
    fn test_hct_display_roundtrip() {
        use chroma_hct::Hct;

        // Realized attributes are reproducible from the display color alone.
        let teal = Hct::new(200.0, 40.0, 55.0);
        assert_eq!(teal, Hct::from_srgb(teal.to_srgb()));

        // Display colors survive the attribute detour within a pixel step.
        for (r, g, b) in [(0.83, 0.24, 0.17), (0.10, 0.64, 0.40), (0.45, 0.36, 0.88)] {
            let srgb = Vec3::new(r, g, b);
            let h = Hct::from_srgb(srgb);
            let back = Hct::new(h.hue(), h.chroma(), h.tone()).to_srgb();
            assert!((back.x - r).abs() < 0.02, "r {} vs {}", back.x, r);
            assert!((back.y - g).abs() < 0.02, "g {} vs {}", back.y, g);
            assert!((back.z - b).abs() < 0.02, "b {} vs {}", back.z, b);
        }
    }

    #[test]
    fn test_hct_agrees_with_appearance_model() {
        use chroma_cam::{Cam, ViewingConditions};
        use chroma_hct::Hct;
        use chroma_math::difference_degrees;

        let vc = ViewingConditions::default_cam16();
        for (r, g, b) in [(0.9, 0.2, 0.3), (0.2, 0.8, 0.3), (0.35, 0.45, 0.95)] {
            let hct = Hct::from_srgb(Vec3::new(r, g, b));
            let cam = Cam::from_xyz(xyz_of(r, g, b), vc);
            assert!(
                difference_degrees(hct.hue(), cam.hue) < 0.5,
                "hue {} vs {}",
                hct.hue(),
                cam.hue
            );
            assert!(
                (hct.chroma() - cam.chroma).abs() < 0.5,
                "chroma {} vs {}",
                hct.chroma(),
                cam.chroma
            );
        }
    }

    #[test]
    fn test_tone_tracks_relative_luminance() {
        use chroma_gamut::Gamut;
        use chroma_hct::Hct;
        use chroma_transfer::{lstar, srgb};

        for (r, g, b) in [(0.8, 0.5, 0.2), (0.1, 0.9, 0.4), (0.25, 0.25, 0.8)] {
            let linear = Vec3::new(srgb::eotf(r), srgb::eotf(g), srgb::eotf(b));
            let y = Gamut::srgb().linear_to_xyz(linear).y * 100.0;
            let hct = Hct::from_srgb(Vec3::new(r, g, b));
            assert!(
                (hct.tone() - lstar::lstar_from_y(y)).abs() < 0.2,
                "tone {} vs L* {}",
                hct.tone(),
                lstar::lstar_from_y(y)
            );
        }
    }

    #[test]
    fn test_cct_anchors_and_range_policy() {
        use chroma_cct::CctEstimate;
        use chroma_math::{D65_XY, Vec2};

        // Illuminant A, a 2856 K blackbody.
        let a = CctEstimate::from_uv(Vec2::new(0.2560, 0.5243));
        assert!(a.in_range());
        assert!((a.kelvin - 2856.0).abs() < 30.0, "kelvin {}", a.kelvin);
        assert!(a.duv.abs() < 0.002, "duv {}", a.duv);

        // D65 daylight reads near 6500 K on the green side of the locus.
        let d65 = CctEstimate::from_xy(D65_XY);
        assert!(d65.in_range());
        assert!(
            d65.kelvin > 6200.0 && d65.kelvin < 6800.0,
            "kelvin {}",
            d65.kelvin
        );
        assert!(d65.duv > 0.0 && d65.duv < 0.01, "duv {}", d65.duv);

        // Far off the locus or out of table range: NaN, not a guess.
        let far = CctEstimate::from_uv(Vec2::new(0.05, 0.05));
        assert!(!far.in_range());
        assert!(far.kelvin.is_nan() && far.duv.is_nan());

        assert!(!CctEstimate::from_uv(Vec2::new(f32::NAN, 0.5)).in_range());
    }
}
