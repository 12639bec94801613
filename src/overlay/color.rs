//! Color math: transfer curves, cone space, dichromacy models and color naming

pub mod conversions;
pub mod names;
pub mod simulation;

#[cfg(test)]
mod tests;

pub use conversions::{
    Hsl, Lab, Mat3, Vec3, colorfulness, delta_e76, delta_e2000, gray_level, hsl_from_srgba,
    invert_lightness, lab_to_srgb, linear_rgb_from_srgba, linear_to_srgb, linear_to_srgb_u8,
    lms_to_rgb, luminance_weighted, rgb_l1_distance, rgb_to_lms, srgb_to_lab, srgb_to_linear,
    srgb_u8_to_linear, srgba_from_hsl, srgba_from_linear_rgb,
};
pub use names::{ColorDistance, ColorEntry, ColorMatch, closest_colors};
pub use simulation::{
    BlindnessType, DALTONIZE_ERROR_MATRIX, daltonize_correct, daltonize_srgba, simulate,
    simulate_linear_rgb, simulate_srgba, simulate_with_severity,
};
