//! Per-pixel kernels shared by the CPU backends
//!
//! A [`PixelKernel`] is prepared once per frame from the [`TransformParams`]
//! and then applied to every pixel independently. The horizontal mirror of
//! `SwapAndFlipChannels` is a pure index permutation done per row after the
//! kernel, so rows can be processed in any order.

use crate::overlay::color::{
    BlindnessType, Lab, daltonize_srgba, delta_e76, gray_level, hsl_from_srgba, invert_lightness,
    simulate_srgba, srgb_to_lab, srgba_from_hsl,
};
use crate::overlay::frame::{BYTES_PER_PIXEL, Rgba8};
use crate::overlay::transform::types::{HighlightMatch, ProcessingMode, TransformParams};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PixelKernel {
    Identity,
    Simulate {
        blindness: BlindnessType,
        severity: f32,
    },
    Daltonize {
        blindness: BlindnessType,
        severity: f32,
    },
    SwapRedBlue,
    InvertLightness,
    Highlight {
        target: Rgba8,
        target_lab: Lab,
        matching: HighlightMatch,
        threshold: f32,
        dim_factor: f32,
    },
}

impl PixelKernel {
    pub fn prepare(params: &TransformParams) -> Self {
        match params.mode {
            ProcessingMode::None | ProcessingMode::GrabScreenRegion => PixelKernel::Identity,
            ProcessingMode::SimulateBlindness => PixelKernel::Simulate {
                blindness: params.blindness,
                severity: params.severity,
            },
            ProcessingMode::DaltonizeCorrection => PixelKernel::Daltonize {
                blindness: params.blindness,
                severity: params.severity,
            },
            ProcessingMode::SwapChannels | ProcessingMode::SwapAndFlipChannels => {
                PixelKernel::SwapRedBlue
            }
            ProcessingMode::InvertLightness => PixelKernel::InvertLightness,
            ProcessingMode::HighlightColorUnderCursor(matching) => PixelKernel::Highlight {
                target: params.cursor_color,
                target_lab: srgb_to_lab(params.cursor_color),
                matching,
                threshold: params.highlight.fuzzy_threshold,
                dim_factor: params.highlight.dim_factor,
            },
        }
    }

    #[inline]
    pub fn apply(&self, px: Rgba8) -> Rgba8 {
        match *self {
            PixelKernel::Identity => px,
            PixelKernel::Simulate { blindness, severity } => simulate_srgba(px, blindness, severity),
            PixelKernel::Daltonize { blindness, severity } => {
                daltonize_srgba(px, blindness, severity)
            }
            PixelKernel::SwapRedBlue => Rgba8::new(px.b, px.g, px.r, px.a),
            PixelKernel::InvertLightness => {
                srgba_from_hsl(invert_lightness(hsl_from_srgba(px)), px.a)
            }
            PixelKernel::Highlight {
                target,
                target_lab,
                matching,
                threshold,
                dim_factor,
            } => {
                let matches = match matching {
                    HighlightMatch::Exact => px.same_rgb(target),
                    HighlightMatch::Fuzzy => delta_e76(&srgb_to_lab(px), &target_lab) <= threshold,
                };
                if matches { px } else { dim_to_gray(px, dim_factor) }
            }
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, PixelKernel::Identity)
    }
}

/// Rec. 709 gray of `px` scaled by `dim_factor`, alpha kept.
#[inline]
pub fn dim_to_gray(px: Rgba8, dim_factor: f32) -> Rgba8 {
    let level = (gray_level(px) as f32 * dim_factor).round().clamp(0.0, 255.0) as u8;
    Rgba8::new(level, level, level, px.a)
}

/// Applies `kernel` to every pixel of an RGBA8 row, then mirrors it if asked.
pub fn transform_row(kernel: &PixelKernel, row: &mut [u8], mirror: bool) {
    if !kernel.is_identity() {
        for px in row.chunks_exact_mut(BYTES_PER_PIXEL) {
            kernel.apply(Rgba8::from_slice(px)).write_to(px);
        }
    }
    if mirror {
        mirror_row(row);
    }
}

/// Reverses the pixel order of an RGBA8 row in place.
pub fn mirror_row(row: &mut [u8]) {
    let width = row.len() / BYTES_PER_PIXEL;
    for left in 0..width / 2 {
        let right = width - 1 - left;
        for c in 0..BYTES_PER_PIXEL {
            row.swap(left * BYTES_PER_PIXEL + c, right * BYTES_PER_PIXEL + c);
        }
    }
}
