//! Dichromacy simulation and Daltonize correction

use crate::overlay::color::conversions::{
    Mat3, Vec3, linear_rgb_from_srgba, lms_to_rgb, mul, rgb_to_lms, srgba_from_linear_rgb,
};
use crate::overlay::common::error::OverlayError;
use crate::overlay::frame::Rgba8;

/// Kind of dichromacy being simulated or corrected for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlindnessType {
    /// Missing L cones (red-blind)
    #[default]
    Protanope,
    /// Missing M cones (green-blind)
    Deuteranope,
    /// Missing S cones (blue-blind)
    Tritanope,
}

impl BlindnessType {
    pub const ALL: [BlindnessType; 3] = [
        BlindnessType::Protanope,
        BlindnessType::Deuteranope,
        BlindnessType::Tritanope,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BlindnessType::Protanope => "Protanope",
            BlindnessType::Deuteranope => "Deuteranope",
            BlindnessType::Tritanope => "Tritanope",
        }
    }

    /// Index of the cone response this type cannot perceive.
    pub const fn missing_cone(&self) -> usize {
        match self {
            BlindnessType::Protanope => 0,
            BlindnessType::Deuteranope => 1,
            BlindnessType::Tritanope => 2,
        }
    }

    /// Viénot 1999 projection onto the plane of the two remaining cones.
    pub const fn projection(&self) -> Mat3 {
        match self {
            BlindnessType::Protanope => [
                [0.0, 2.02344, -2.52580],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
            BlindnessType::Deuteranope => [
                [1.0, 0.0, 0.0],
                [0.49421, 0.0, 1.24827],
                [0.0, 0.0, 1.0],
            ],
            BlindnessType::Tritanope => [
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [-0.01224, 0.07203, 0.0],
            ],
        }
    }
}

impl From<BlindnessType> for u32 {
    fn from(value: BlindnessType) -> Self {
        value.missing_cone() as u32
    }
}

impl TryFrom<u32> for BlindnessType {
    type Error = OverlayError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BlindnessType::Protanope),
            1 => Ok(BlindnessType::Deuteranope),
            2 => Ok(BlindnessType::Tritanope),
            other => Err(OverlayError::InvalidBlindnessType(other)),
        }
    }
}

/// Fidaner et al. error redistribution: the red error is shifted onto green
/// and blue, green and blue errors stay in their own channel.
pub const DALTONIZE_ERROR_MATRIX: Mat3 = [
    [0.0, 0.0, 0.0],
    [0.7, 1.0, 0.0],
    [0.7, 0.0, 1.0],
];

/// Replaces the missing cone response with its projection. Applying it twice
/// is the same as applying it once.
#[inline]
pub fn simulate(lms: Vec3, blindness: BlindnessType) -> Vec3 {
    let mut out = lms;
    let missing = blindness.missing_cone();
    out[missing] = mul(&blindness.projection(), lms)[missing];
    out
}

/// `severity` in [0,1] mixes between normal vision (0) and full dichromacy (1).
#[inline]
pub fn simulate_with_severity(lms: Vec3, blindness: BlindnessType, severity: f32) -> Vec3 {
    let projected = simulate(lms, blindness);
    if severity >= 1.0 {
        return projected;
    }
    let missing = blindness.missing_cone();
    let mut out = lms;
    out[missing] = lms[missing] + severity * (projected[missing] - lms[missing]);
    out
}

/// Linear RGB as perceived by a dichromat, unclamped.
#[inline]
pub fn simulate_linear_rgb(rgb: Vec3, blindness: BlindnessType, severity: f32) -> Vec3 {
    lms_to_rgb(simulate_with_severity(rgb_to_lms(rgb), blindness, severity))
}

/// Adds the redistributed simulation error back to the original linear color.
/// The result is unclamped; it is clamped when encoded to sRGB.
#[inline]
pub fn daltonize_correct(rgb: Vec3, blindness: BlindnessType, severity: f32) -> Vec3 {
    let simulated = simulate_linear_rgb(rgb, blindness, severity);
    let error = [rgb[0] - simulated[0], rgb[1] - simulated[1], rgb[2] - simulated[2]];
    let shift = mul(&DALTONIZE_ERROR_MATRIX, error);
    [rgb[0] + shift[0], rgb[1] + shift[1], rgb[2] + shift[2]]
}

pub fn simulate_srgba(px: Rgba8, blindness: BlindnessType, severity: f32) -> Rgba8 {
    srgba_from_linear_rgb(simulate_linear_rgb(linear_rgb_from_srgba(px), blindness, severity), px.a)
}

pub fn daltonize_srgba(px: Rgba8, blindness: BlindnessType, severity: f32) -> Rgba8 {
    srgba_from_linear_rgb(daltonize_correct(linear_rgb_from_srgba(px), blindness, severity), px.a)
}
