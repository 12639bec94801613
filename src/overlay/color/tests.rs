//! Tests for color conversion functions

use super::*;
use crate::overlay::common::error::OverlayError;
use crate::overlay::frame::Rgba8;

fn sample_colors() -> Vec<Rgba8> {
    let mut colors = Vec::new();
    for r in (0..=255u16).step_by(51) {
        for g in (0..=255u16).step_by(51) {
            for b in (0..=255u16).step_by(51) {
                colors.push(Rgba8::opaque(r as u8, g as u8, b as u8));
            }
        }
    }
    colors.push(Rgba8::opaque(128, 64, 32));
    colors.push(Rgba8::opaque(1, 254, 127));
    colors
}

#[test]
fn test_lms_roundtrip() {
    for step_r in 0..=10 {
        for step_g in 0..=10 {
            for step_b in 0..=10 {
                let rgb = [step_r as f32 / 10.0, step_g as f32 / 10.0, step_b as f32 / 10.0];
                let back = lms_to_rgb(rgb_to_lms(rgb));
                for c in 0..3 {
                    assert!(
                        (rgb[c] - back[c]).abs() < 1e-4,
                        "LMS roundtrip mismatch for {:?}: {:?}",
                        rgb,
                        back
                    );
                }
            }
        }
    }
}

#[test]
fn test_srgb_u8_roundtrip_is_exact() {
    for v in 0..=255u8 {
        assert_eq!(linear_to_srgb_u8(srgb_u8_to_linear(v)), v);
    }
}

#[test]
fn test_linear_to_srgb_u8_clamps() {
    assert_eq!(linear_to_srgb_u8(-0.5), 0);
    assert_eq!(linear_to_srgb_u8(3.0), 255);
    assert_eq!(linear_to_srgb_u8(f32::NAN), 0);
}

#[test]
fn test_transfer_curve_linear_segment() {
    assert!((srgb_to_linear(0.02) - 0.02 / 12.92).abs() < 1e-7);
    assert!((linear_to_srgb(0.002) - 0.002 * 12.92).abs() < 1e-7);
    assert!((linear_to_srgb(srgb_to_linear(0.5)) - 0.5).abs() < 1e-5);
}

#[test]
fn test_simulate_is_idempotent() {
    for px in sample_colors() {
        let lms = rgb_to_lms(linear_rgb_from_srgba(px));
        for blindness in BlindnessType::ALL {
            let once = simulate(lms, blindness);
            let twice = simulate(once, blindness);
            for c in 0..3 {
                assert!(
                    (once[c] - twice[c]).abs() < 1e-7,
                    "{:?} not idempotent for {:?}",
                    blindness,
                    px
                );
            }
        }
    }
}

#[test]
fn test_simulate_only_touches_the_missing_cone() {
    let lms = [0.3, 0.2, 0.1];
    for blindness in BlindnessType::ALL {
        let out = simulate(lms, blindness);
        for c in 0..3 {
            if c != blindness.missing_cone() {
                assert_eq!(out[c], lms[c]);
            }
        }
    }
}

#[test]
fn test_zero_severity_is_normal_vision() {
    let lms = [0.3, 0.2, 0.1];
    for blindness in BlindnessType::ALL {
        assert_eq!(simulate_with_severity(lms, blindness, 0.0), lms);
    }
}

#[test]
fn test_simulated_saturated_red() {
    let red = Rgba8::opaque(255, 0, 0);
    assert_eq!(simulate_srgba(red, BlindnessType::Protanope, 1.0), Rgba8::opaque(94, 94, 13));
    assert_eq!(simulate_srgba(red, BlindnessType::Deuteranope, 1.0), Rgba8::opaque(147, 147, 0));
}

#[test]
fn test_daltonize_deuteranope_saturated_red() {
    let red = Rgba8::new(255, 0, 0, 255);
    let corrected = daltonize_srgba(red, BlindnessType::Deuteranope, 1.0);
    assert_eq!(corrected, Rgba8::new(255, 124, 190, 255));
}

#[test]
fn test_daltonize_keeps_white_and_alpha() {
    for blindness in BlindnessType::ALL {
        let out = daltonize_srgba(Rgba8::new(255, 255, 255, 40), blindness, 1.0);
        assert_eq!(out, Rgba8::new(255, 255, 255, 40));
    }
}

#[test]
fn test_simulation_keeps_grays_close() {
    for blindness in BlindnessType::ALL {
        let out = simulate_srgba(Rgba8::opaque(128, 128, 128), blindness, 1.0);
        for c in [out.r, out.g, out.b] {
            assert!((c as i32 - 128).abs() <= 1, "{:?} moved gray to {:?}", blindness, out);
        }
    }
}

#[test]
fn test_invert_lightness_twice_is_identity() {
    for px in sample_colors() {
        let once = srgba_from_hsl(invert_lightness(hsl_from_srgba(px)), px.a);
        let twice = srgba_from_hsl(invert_lightness(hsl_from_srgba(once)), once.a);
        assert_eq!(twice, px);
    }
}

#[test]
fn test_invert_lightness_keeps_hue_and_saturation() {
    for px in sample_colors() {
        let original = hsl_from_srgba(px);
        let inverted = hsl_from_srgba(srgba_from_hsl(invert_lightness(original), 255));

        assert!((original.l + inverted.l - 1.0).abs() < 1e-3);
        if original.s > 1e-3 && original.l > 1e-3 && original.l < 1.0 - 1e-3 {
            assert!((original.s - inverted.s).abs() < 1e-3, "saturation changed for {:?}", px);
            let dh = (original.h - inverted.h).abs();
            assert!(dh.min(360.0 - dh) < 0.5, "hue changed for {:?}", px);
        }
    }
}

#[test]
fn test_invert_lightness_swaps_black_and_white() {
    let white = srgba_from_hsl(invert_lightness(hsl_from_srgba(Rgba8::opaque(0, 0, 0))), 255);
    let black = srgba_from_hsl(invert_lightness(hsl_from_srgba(Rgba8::opaque(255, 255, 255))), 255);
    assert_eq!(white, Rgba8::opaque(255, 255, 255));
    assert_eq!(black, Rgba8::opaque(0, 0, 0));
}

#[test]
fn test_lab_reference_points() {
    let white = srgb_to_lab(Rgba8::opaque(255, 255, 255));
    assert!((white.l - 100.0).abs() < 0.01);
    assert!(white.a.abs() < 0.01 && white.b.abs() < 0.01);

    let black = srgb_to_lab(Rgba8::opaque(0, 0, 0));
    assert!(black.l.abs() < 0.01);
}

#[test]
fn test_lab_roundtrip() {
    for px in sample_colors() {
        let back = lab_to_srgb(srgb_to_lab(px), px.a);
        for (a, b) in [(px.r, back.r), (px.g, back.g), (px.b, back.b)] {
            assert!((a as i32 - b as i32).abs() <= 1, "{:?} -> {:?}", px, back);
        }
    }
}

#[test]
fn test_delta_e2000_reference_pair() {
    // First pair of the Sharma, Wu & Dalal test data.
    let lab_1 = Lab { l: 50.0, a: 2.6772, b: -79.7751 };
    let lab_2 = Lab { l: 50.0, a: 0.0, b: -82.7485 };
    let d = delta_e2000(&lab_1, &lab_2);
    assert!((d - 2.0425).abs() < 1e-3, "got {}", d);
    assert!(delta_e2000(&lab_1, &lab_1).abs() < 1e-9);
}

#[test]
fn test_delta_e76_is_euclidean() {
    let a = Lab { l: 10.0, a: 0.0, b: 0.0 };
    let b = Lab { l: 13.0, a: 4.0, b: 0.0 };
    assert!((delta_e76(&a, &b) - 5.0).abs() < 1e-6);
}

#[test]
fn test_closest_color_names() {
    let [best, second] = closest_colors(Rgba8::opaque(255, 0, 0), ColorDistance::Cie2000);
    assert_eq!(best.entry.color_name, "Red");
    assert_eq!(best.entry.class_name, "Red");
    assert!(best.distance < 1e-6);
    assert!(second.distance > best.distance);

    let [best, _] = closest_colors(Rgba8::opaque(1, 1, 126), ColorDistance::RgbL1);
    assert_eq!(best.entry.color_name, "Navy");
}

#[test]
fn test_luminance_weights() {
    assert_eq!(luminance_weighted(Rgba8::opaque(255, 255, 255)), 2_550_000);
    assert!(luminance_weighted(Rgba8::opaque(0, 255, 0)) > luminance_weighted(Rgba8::opaque(255, 0, 0)));
    assert!(luminance_weighted(Rgba8::opaque(255, 0, 0)) > luminance_weighted(Rgba8::opaque(0, 0, 255)));
    assert_eq!(gray_level(Rgba8::opaque(200, 200, 200)), 200);
}

#[test]
fn test_colorfulness() {
    assert_eq!(colorfulness(Rgba8::opaque(90, 90, 90)), 0);
    assert_eq!(colorfulness(Rgba8::opaque(255, 0, 0)), 510);
}

#[test]
fn test_blindness_type_from_raw_value() {
    assert_eq!(BlindnessType::try_from(1).unwrap(), BlindnessType::Deuteranope);
    assert!(matches!(
        BlindnessType::try_from(7),
        Err(OverlayError::InvalidBlindnessType(7))
    ));
    for blindness in BlindnessType::ALL {
        assert_eq!(BlindnessType::try_from(u32::from(blindness)).unwrap(), blindness);
    }
}
