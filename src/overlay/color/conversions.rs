//! Color space conversions: sRGB transfer curve, LMS cone space, HSL and CIE L*a*b*
//!
//! All routines are pure. Linear values are unclamped `f32`; clamping happens
//! only when a value is encoded back to an 8-bit sRGB channel.

use std::sync::LazyLock;

use crate::overlay::frame::Rgba8;

/// Row-major 3x3 matrix
pub type Mat3 = [[f32; 3]; 3];

/// Three color components (linear RGB, LMS, XYZ... depending on context)
pub type Vec3 = [f32; 3];

/// Smith & Pokorny 1975 cone fundamentals for sRGB primaries.
pub const LMS_FROM_LINEAR_RGB: Mat3 = [
    [0.17882, 0.43516, 0.04119],
    [0.03456, 0.27155, 0.03867],
    [0.00030, 0.00184, 0.01467],
];

pub const LINEAR_RGB_FROM_LMS: Mat3 = invert(LMS_FROM_LINEAR_RGB);

/// sRGB (D65) to XYZ matrix
pub const XYZ_FROM_LINEAR_RGB: Mat3 = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ to sRGB (D65) matrix
pub const LINEAR_RGB_FROM_XYZ: Mat3 = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// D65 reference white
const D65_WHITE: Vec3 = [0.95047, 1.00000, 1.08883];

const SRGB_DECODE_THRESHOLD: f32 = 0.04045;
const SRGB_ENCODE_THRESHOLD: f32 = 0.0031308;

/// Inverse of a 3x3 matrix through its adjugate. The matrix must be invertible.
pub const fn invert(m: Mat3) -> Mat3 {
    let [[a, b, c], [d, e, f], [g, h, i]] = m;

    let c00 = e * i - f * h;
    let c01 = -(d * i - f * g);
    let c02 = d * h - e * g;
    let c10 = -(b * i - c * h);
    let c11 = a * i - c * g;
    let c12 = -(a * h - b * g);
    let c20 = b * f - c * e;
    let c21 = -(a * f - c * d);
    let c22 = a * e - b * d;

    let inv_det = 1.0 / (a * c00 + b * c01 + c * c02);

    [
        [c00 * inv_det, c10 * inv_det, c20 * inv_det],
        [c01 * inv_det, c11 * inv_det, c21 * inv_det],
        [c02 * inv_det, c12 * inv_det, c22 * inv_det],
    ]
}

#[inline]
pub fn mul(m: &Mat3, v: Vec3) -> Vec3 {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// sRGB-encoded value in [0,1] to linear light.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= SRGB_DECODE_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear light in [0,1] to an sRGB-encoded value.
#[inline]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= SRGB_ENCODE_THRESHOLD {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

static SRGB_U8_TO_LINEAR: LazyLock<[f32; 256]> = LazyLock::new(|| {
    let mut table = [0.0f32; 256];
    for (v, entry) in table.iter_mut().enumerate() {
        *entry = srgb_to_linear(v as f32 / 255.0);
    }
    table
});

#[inline]
pub fn srgb_u8_to_linear(v: u8) -> f32 {
    SRGB_U8_TO_LINEAR[v as usize]
}

/// Clamps `c` to [0,1], encodes it and rounds to the nearest 8-bit level.
#[inline]
pub fn linear_to_srgb_u8(c: f32) -> u8 {
    let c = if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) };
    (linear_to_srgb(c) * 255.0).round().clamp(0.0, 255.0) as u8
}

#[inline]
pub fn linear_rgb_from_srgba(px: Rgba8) -> Vec3 {
    [
        srgb_u8_to_linear(px.r),
        srgb_u8_to_linear(px.g),
        srgb_u8_to_linear(px.b),
    ]
}

#[inline]
pub fn srgba_from_linear_rgb(rgb: Vec3, alpha: u8) -> Rgba8 {
    Rgba8::new(
        linear_to_srgb_u8(rgb[0]),
        linear_to_srgb_u8(rgb[1]),
        linear_to_srgb_u8(rgb[2]),
        alpha,
    )
}

#[inline]
pub fn rgb_to_lms(linear_rgb: Vec3) -> Vec3 {
    mul(&LMS_FROM_LINEAR_RGB, linear_rgb)
}

#[inline]
pub fn lms_to_rgb(lms: Vec3) -> Vec3 {
    mul(&LINEAR_RGB_FROM_LMS, lms)
}

/// HSL color representation
/// - H (hue): 0.0-360.0 degrees
/// - S (saturation): 0.0-1.0
/// - L (lightness): 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// RGB in [0,1] (sRGB-encoded, as HSL is usually applied) to HSL.
#[inline]
pub fn rgb_to_hsl(r: f32, g: f32, b: f32) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta < 1e-6 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let h = if max == r {
        let h = (g - b) / delta;
        if h < 0.0 { h + 6.0 } else { h }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl { h: (h * 60.0) % 360.0, s, l }
}

#[inline]
pub fn hsl_to_rgb(hsl: Hsl) -> Vec3 {
    let Hsl { h, s, l } = hsl;

    if s < 1e-6 {
        return [l, l, l];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h.rem_euclid(360.0) / 360.0;

    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

#[inline]
fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[inline]
pub fn hsl_from_srgba(px: Rgba8) -> Hsl {
    rgb_to_hsl(px.r as f32 / 255.0, px.g as f32 / 255.0, px.b as f32 / 255.0)
}

#[inline]
pub fn srgba_from_hsl(hsl: Hsl, alpha: u8) -> Rgba8 {
    let [r, g, b] = hsl_to_rgb(hsl);
    let encode = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba8::new(encode(r), encode(g), encode(b), alpha)
}

/// Mirrors the lightness around 0.5, keeping hue and saturation.
#[inline]
pub fn invert_lightness(hsl: Hsl) -> Hsl {
    Hsl { l: 1.0 - hsl.l, ..hsl }
}

/// CIE L*a*b* color (D65), L in 0-100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

const LAB_EPSILON: f32 = 0.008856;
const LAB_KAPPA_SLOPE: f32 = 7.787;

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA_SLOPE * t + 16.0 / 116.0
    }
}

#[inline]
fn lab_f_inv(t: f32) -> f32 {
    let t3 = t * t * t;
    if t3 > LAB_EPSILON {
        t3
    } else {
        (t - 16.0 / 116.0) / LAB_KAPPA_SLOPE
    }
}

pub fn srgb_to_lab(px: Rgba8) -> Lab {
    let xyz = mul(&XYZ_FROM_LINEAR_RGB, linear_rgb_from_srgba(px));
    let fx = lab_f(xyz[0] / D65_WHITE[0]);
    let fy = lab_f(xyz[1] / D65_WHITE[1]);
    let fz = lab_f(xyz[2] / D65_WHITE[2]);
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

pub fn lab_to_srgb(lab: Lab, alpha: u8) -> Rgba8 {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;
    let xyz = [
        lab_f_inv(fx) * D65_WHITE[0],
        lab_f_inv(fy) * D65_WHITE[1],
        lab_f_inv(fz) * D65_WHITE[2],
    ];
    srgba_from_linear_rgb(mul(&LINEAR_RGB_FROM_XYZ, xyz), alpha)
}

/// Euclidean (CIE76) distance in L*a*b*.
#[inline]
pub fn delta_e76(p1: &Lab, p2: &Lab) -> f32 {
    let dl = p1.l - p2.l;
    let da = p1.a - p2.a;
    let db = p1.b - p2.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Mean absolute channel difference, in 8-bit levels.
#[inline]
pub fn rgb_l1_distance(p1: Rgba8, p2: Rgba8) -> f64 {
    let d = |a: u8, b: u8| (a as i32 - b as i32).abs();
    (d(p1.r, p2.r) + d(p1.g, p2.g) + d(p1.b, p2.b)) as f64 / 3.0
}

/// CIEDE2000 color difference (Sharma et al. 2005 formulation).
pub fn delta_e2000(lab_1: &Lab, lab_2: &Lab) -> f64 {
    use std::f64::consts::PI;

    const EPS: f64 = 1e-5;
    const POW25_7: f64 = 6_103_515_625.0;

    let sqr = |x: f64| x * x;
    let pow7 = |x: f64| x.powi(7);
    let (l1, a1, b1) = (lab_1.l as f64, lab_1.a as f64, lab_1.b as f64);
    let (l2, a2, b2) = (lab_2.l as f64, lab_2.a as f64, lab_2.b as f64);

    let c1 = (sqr(a1) + sqr(b1)).sqrt();
    let c2 = (sqr(a2) + sqr(b2)).sqrt();
    let mean_c7 = pow7((c1 + c2) / 2.0);
    let g = 0.5 * (1.0 - (mean_c7 / (mean_c7 + POW25_7)).sqrt());
    let a1p = a1 * (1.0 + g);
    let a2p = a2 * (1.0 + g);

    let c1p = (sqr(a1p) + sqr(b1)).sqrt();
    let c2p = (sqr(a2p) + sqr(b2)).sqrt();
    let hue = |b: f64, a: f64| if b == 0.0 && a == 0.0 { 0.0 } else { b.atan2(a).rem_euclid(2.0 * PI) };
    let h1 = hue(b1, a1p);
    let h2 = hue(b2, a2p);

    let delta_l = l2 - l1;
    let delta_c = c2p - c1p;
    let chroma_product = c1p * c2p;

    let delta_h_angle = if chroma_product < EPS {
        0.0
    } else if (h2 - h1).abs() <= PI {
        h2 - h1
    } else if h2 > h1 {
        h2 - h1 - 2.0 * PI
    } else {
        h2 - h1 + 2.0 * PI
    };
    let delta_h = 2.0 * chroma_product.sqrt() * (delta_h_angle / 2.0).sin();

    let mean_l = (l1 + l2) / 2.0;
    let mean_cp = (c1p + c2p) / 2.0;
    let mean_cp7 = pow7(mean_cp);
    let mean_h = if chroma_product < EPS {
        h1 + h2
    } else if (h1 - h2).abs() <= PI {
        (h1 + h2) / 2.0
    } else if h1 + h2 < 2.0 * PI {
        (h1 + h2 + 2.0 * PI) / 2.0
    } else {
        (h1 + h2 - 2.0 * PI) / 2.0
    };

    let t = 1.0 - 0.17 * (mean_h - 30f64.to_radians()).cos()
        + 0.24 * (2.0 * mean_h).cos()
        + 0.32 * (3.0 * mean_h + 6f64.to_radians()).cos()
        - 0.20 * (4.0 * mean_h - 63f64.to_radians()).cos();
    let sl = 1.0 + (0.015 * sqr(mean_l - 50.0)) / (20.0 + sqr(mean_l - 50.0)).sqrt();
    let sc = 1.0 + 0.045 * mean_cp;
    let sh = 1.0 + 0.015 * mean_cp * t;
    let rc = 2.0 * (mean_cp7 / (mean_cp7 + POW25_7)).sqrt();
    let rt = -(60.0 * (-sqr((mean_h.to_degrees() - 275.0) / 25.0)).exp())
        .to_radians()
        .sin()
        * rc;

    (sqr(delta_l / sl)
        + sqr(delta_c / sc)
        + sqr(delta_h / sh)
        + rt * (delta_c / sc) * (delta_h / sh))
        .sqrt()
}

/// Rec. 709 luma in integer form, `2126 r + 7152 g + 722 b` (max 2_550_000).
#[inline]
pub fn luminance_weighted(px: Rgba8) -> u32 {
    2126 * px.r as u32 + 7152 * px.g as u32 + 722 * px.b as u32
}

/// Rec. 709 luma of an sRGB pixel, as an 8-bit gray level.
#[inline]
pub fn gray_level(px: Rgba8) -> u8 {
    ((luminance_weighted(px) + 5_000) / 10_000).min(255) as u8
}

/// Sum of pairwise channel differences; low for grays.
#[inline]
pub fn colorfulness(px: Rgba8) -> u32 {
    let (r, g, b) = (px.r as i32, px.g as i32, px.b as i32);
    ((r - g).abs() + (r - b).abs() + (g - b).abs()) as u32
}
