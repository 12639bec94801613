use crate::overlay::color::BlindnessType;
use crate::overlay::common::error::OverlayError;
use crate::overlay::frame::Rgba8;

/// How the highlight mode decides that a pixel matches the cursor color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightMatch {
    /// Perceptual distance (CIE76) below the configured threshold
    Fuzzy,
    /// Bit-exact RGB equality
    Exact,
}

/// The single active processing mode of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProcessingMode {
    #[default]
    None,
    SimulateBlindness,
    DaltonizeCorrection,
    SwapChannels,
    SwapAndFlipChannels,
    InvertLightness,
    HighlightColorUnderCursor(HighlightMatch),
    GrabScreenRegion,
}

impl ProcessingMode {
    /// Every mode, in the order of their raw values.
    pub const ALL: [ProcessingMode; 9] = [
        ProcessingMode::None,
        ProcessingMode::SimulateBlindness,
        ProcessingMode::DaltonizeCorrection,
        ProcessingMode::SwapChannels,
        ProcessingMode::SwapAndFlipChannels,
        ProcessingMode::InvertLightness,
        ProcessingMode::HighlightColorUnderCursor(HighlightMatch::Fuzzy),
        ProcessingMode::HighlightColorUnderCursor(HighlightMatch::Exact),
        ProcessingMode::GrabScreenRegion,
    ];

    pub fn raw_value(&self) -> u32 {
        match self {
            ProcessingMode::None => 0,
            ProcessingMode::SimulateBlindness => 1,
            ProcessingMode::DaltonizeCorrection => 2,
            ProcessingMode::SwapChannels => 3,
            ProcessingMode::SwapAndFlipChannels => 4,
            ProcessingMode::InvertLightness => 5,
            ProcessingMode::HighlightColorUnderCursor(HighlightMatch::Fuzzy) => 6,
            ProcessingMode::HighlightColorUnderCursor(HighlightMatch::Exact) => 7,
            ProcessingMode::GrabScreenRegion => 8,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProcessingMode::None => "Disabled",
            ProcessingMode::SimulateBlindness => "Simulate color blindness",
            ProcessingMode::DaltonizeCorrection => "Daltonize",
            ProcessingMode::SwapChannels => "Swap red and blue",
            ProcessingMode::SwapAndFlipChannels => "Swap red and blue, mirrored",
            ProcessingMode::InvertLightness => "Invert lightness",
            ProcessingMode::HighlightColorUnderCursor(HighlightMatch::Fuzzy) => {
                "Highlight similar colors"
            }
            ProcessingMode::HighlightColorUnderCursor(HighlightMatch::Exact) => {
                "Highlight exact color"
            }
            ProcessingMode::GrabScreenRegion => "Grab screen region",
        }
    }

    /// Next mode in raw-value order, wrapping around.
    pub fn next(&self) -> ProcessingMode {
        let index = self.raw_value() as usize;
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous mode in raw-value order, wrapping around.
    pub fn previous(&self) -> ProcessingMode {
        let index = self.raw_value() as usize;
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether the horizontal mirror is applied after the per-pixel kernel.
    pub fn mirrors(&self) -> bool {
        matches!(self, ProcessingMode::SwapAndFlipChannels)
    }
}

impl From<ProcessingMode> for u32 {
    fn from(value: ProcessingMode) -> Self {
        value.raw_value()
    }
}

impl TryFrom<u32> for ProcessingMode {
    type Error = OverlayError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(OverlayError::InvalidMode(value))
    }
}

/// Highlight mode tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightSettings {
    /// Maximum CIE76 distance for a fuzzy match
    pub fuzzy_threshold: f32,
    /// Scale applied to the gray level of non-matching pixels
    pub dim_factor: f32,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 12.0,
            dim_factor: 0.35,
        }
    }
}

/// Everything a transformer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    pub mode: ProcessingMode,
    pub blindness: BlindnessType,
    pub severity: f32,
    pub cursor_color: Rgba8,
    pub highlight: HighlightSettings,
}

impl TransformParams {
    pub fn new(mode: ProcessingMode, blindness: BlindnessType) -> Self {
        Self {
            mode,
            blindness,
            ..Self::default()
        }
    }

    pub fn with_cursor_color(mut self, color: Rgba8) -> Self {
        self.cursor_color = color;
        self
    }

    pub fn with_severity(mut self, severity: f32) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_highlight(mut self, highlight: HighlightSettings) -> Self {
        self.highlight = highlight;
        self
    }
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            mode: ProcessingMode::None,
            blindness: BlindnessType::default(),
            severity: 1.0,
            cursor_color: Rgba8::opaque(128, 128, 128),
            highlight: HighlightSettings::default(),
        }
    }
}

/// Which transformer implementation processes the frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformBackend {
    /// Sequential, row by row
    Cpu,
    /// One rayon task per row
    #[default]
    Parallel,
    /// CUDA kernel, only when built with `DALTONLENS_CUDA`
    Cuda,
}
