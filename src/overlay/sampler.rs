//! Cursor color sampling over a small neighborhood of the pointer

use crate::overlay::color::{ColorDistance, ColorMatch, closest_colors, colorfulness, luminance_weighted};
use crate::overlay::common::error::{OverlayError, Result};
use crate::overlay::frame::{Frame, PixelPoint, Rgba8};

/// Default side of the square sampling window
pub const DEFAULT_SAMPLE_WINDOW: usize = 9;

/// Below this colorfulness the center pixel is considered gray.
const MIN_CENTER_COLORFULNESS: u32 = 10;

/// How a representative color is picked inside the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingHeuristic {
    /// Darkest pixel by Rec. 709 luminance, so thin dark text wins over
    /// its light background.
    #[default]
    Darkest,
    /// Center pixel, or the most colorful pixel when the center is gray.
    MostColorful,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleProvenance {
    Darkest,
    MostColorful,
    /// No sample was possible; the color is a mid gray placeholder.
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorColorSample {
    pub color: Rgba8,
    pub provenance: SampleProvenance,
    pub name: Option<ColorMatch>,
}

impl CursorColorSample {
    pub const NEUTRAL_COLOR: Rgba8 = Rgba8::opaque(128, 128, 128);

    pub fn neutral() -> Self {
        Self {
            color: Self::NEUTRAL_COLOR,
            provenance: SampleProvenance::Neutral,
            name: None,
        }
    }

    /// Attaches the closest entry of the named color table.
    pub fn with_name(mut self, distance: ColorDistance) -> Self {
        let [best, _] = closest_colors(self.color, distance);
        self.name = Some(best);
        self
    }
}

impl Default for CursorColorSample {
    fn default() -> Self {
        Self::neutral()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ColorSampler {
    window: usize,
    heuristic: SamplingHeuristic,
}

impl Default for ColorSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_WINDOW, SamplingHeuristic::default())
    }
}

impl ColorSampler {
    /// An even window is widened by one so it stays centered.
    pub fn new(window: usize, heuristic: SamplingHeuristic) -> Self {
        let window = window.max(1) | 1;
        Self { window, heuristic }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn heuristic(&self) -> SamplingHeuristic {
        self.heuristic
    }

    pub fn sample(&self, frame: &Frame, point: PixelPoint) -> Result<CursorColorSample> {
        if !frame.contains(point) {
            return Err(OverlayError::OutOfBounds {
                x: point.x,
                y: point.y,
                width: frame.width(),
                height: frame.height(),
            });
        }

        let (cx, cy) = (point.x as usize, point.y as usize);
        let (x0, x1) = self.clamped_span(cx, frame.width());
        let (y0, y1) = self.clamped_span(cy, frame.height());

        let sample = match self.heuristic {
            SamplingHeuristic::Darkest => {
                let mut darkest = frame.pixel(x0, y0);
                let mut darkest_luma = luminance_weighted(darkest);
                for y in y0..y1 {
                    for x in x0..x1 {
                        let px = frame.pixel(x, y);
                        let luma = luminance_weighted(px);
                        if luma < darkest_luma {
                            darkest = px;
                            darkest_luma = luma;
                        }
                    }
                }
                CursorColorSample {
                    color: darkest,
                    provenance: SampleProvenance::Darkest,
                    name: None,
                }
            }
            SamplingHeuristic::MostColorful => {
                let center = frame.pixel(cx, cy);
                let mut best = center;
                if colorfulness(center) < MIN_CENTER_COLORFULNESS {
                    let mut best_score = colorfulness(center);
                    for y in y0..y1 {
                        for x in x0..x1 {
                            let px = frame.pixel(x, y);
                            let score = colorfulness(px);
                            if score > best_score {
                                best = px;
                                best_score = score;
                            }
                        }
                    }
                }
                CursorColorSample {
                    color: best,
                    provenance: SampleProvenance::MostColorful,
                    name: None,
                }
            }
        };
        Ok(sample)
    }

    /// Half-open `[start, end)` span of the window along one axis. The center
    /// is moved inwards so the whole window fits; a dimension smaller than the
    /// window is used entirely.
    fn clamped_span(&self, center: usize, size: usize) -> (usize, usize) {
        let extent = self.window.min(size);
        let half = extent / 2;
        let start = center.saturating_sub(half).min(size - extent);
        (start, start + extent)
    }
}
