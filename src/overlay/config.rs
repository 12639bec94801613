use crate::overlay::capture::WindowId;
use crate::overlay::sampler::{DEFAULT_SAMPLE_WINDOW, SamplingHeuristic};
use crate::overlay::transform::{HighlightSettings, TransformBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiffCompression {
    #[default]
    None,
    Lzw,
    Deflate,
}

#[derive(Debug, Clone)]
pub struct OverlayConfig {
    pub backend: TransformBackend,
    pub target_fps: u32,
    pub sample_window: usize,
    pub sampling: SamplingHeuristic,
    pub severity: f32,
    pub highlight: HighlightSettings,
    /// Window excluded from capture (the overlay itself)
    pub overlay_window: WindowId,
    pub export_compression: TiffCompression,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            backend: TransformBackend::Parallel,
            target_fps: 30,
            sample_window: DEFAULT_SAMPLE_WINDOW,
            sampling: SamplingHeuristic::Darkest,
            severity: 1.0,
            highlight: HighlightSettings::default(),
            overlay_window: WindowId(0),
            export_compression: TiffCompression::None,
        }
    }
}

impl OverlayConfig {
    pub fn builder() -> OverlayConfigBuilder {
        OverlayConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct OverlayConfigBuilder {
    backend: Option<TransformBackend>,
    target_fps: Option<u32>,
    sample_window: Option<usize>,
    sampling: Option<SamplingHeuristic>,
    severity: Option<f32>,
    highlight: Option<HighlightSettings>,
    overlay_window: Option<WindowId>,
    export_compression: Option<TiffCompression>,
}

impl OverlayConfigBuilder {
    pub fn backend(mut self, backend: TransformBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn target_fps(mut self, fps: u32) -> Self {
        self.target_fps = Some(fps);
        self
    }

    pub fn sample_window(mut self, size: usize) -> Self {
        self.sample_window = Some(size);
        self
    }

    pub fn sampling(mut self, heuristic: SamplingHeuristic) -> Self {
        self.sampling = Some(heuristic);
        self
    }

    pub fn severity(mut self, severity: f32) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn highlight(mut self, highlight: HighlightSettings) -> Self {
        self.highlight = Some(highlight);
        self
    }

    pub fn overlay_window(mut self, window: WindowId) -> Self {
        self.overlay_window = Some(window);
        self
    }

    pub fn export_compression(mut self, compression: TiffCompression) -> Self {
        self.export_compression = Some(compression);
        self
    }

    /// Unset fields take their default. Severity is clamped to [0,1], the
    /// sample window made odd and at least 1, the frame rate at least 1.
    pub fn build(self) -> OverlayConfig {
        let default = OverlayConfig::default();
        let severity = self.severity.unwrap_or(default.severity);
        OverlayConfig {
            backend: self.backend.unwrap_or(default.backend),
            target_fps: self.target_fps.unwrap_or(default.target_fps).max(1),
            sample_window: self.sample_window.unwrap_or(default.sample_window).max(1) | 1,
            sampling: self.sampling.unwrap_or(default.sampling),
            severity: if severity.is_nan() { default.severity } else { severity.clamp(0.0, 1.0) },
            highlight: self.highlight.unwrap_or(default.highlight),
            overlay_window: self.overlay_window.unwrap_or(default.overlay_window),
            export_compression: self.export_compression.unwrap_or(default.export_compression),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = OverlayConfig::builder().build();
        assert_eq!(config.backend, TransformBackend::Parallel);
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.sample_window, 9);
        assert_eq!(config.sampling, SamplingHeuristic::Darkest);
        assert_eq!(config.severity, 1.0);
        assert_eq!(config.highlight.fuzzy_threshold, 12.0);
        assert_eq!(config.overlay_window, WindowId(0));
        assert_eq!(config.export_compression, TiffCompression::None);
    }

    #[test]
    fn test_config_builder() {
        let config = OverlayConfig::builder()
            .backend(TransformBackend::Cpu)
            .target_fps(60)
            .sample_window(5)
            .sampling(SamplingHeuristic::MostColorful)
            .severity(0.5)
            .overlay_window(WindowId(42))
            .export_compression(TiffCompression::Lzw)
            .build();

        assert_eq!(config.backend, TransformBackend::Cpu);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.sample_window, 5);
        assert_eq!(config.sampling, SamplingHeuristic::MostColorful);
        assert_eq!(config.severity, 0.5);
        assert_eq!(config.overlay_window, WindowId(42));
        assert_eq!(config.export_compression, TiffCompression::Lzw);
    }

    #[test]
    fn test_config_builder_clamps() {
        let config = OverlayConfig::builder()
            .target_fps(0)
            .sample_window(4)
            .severity(3.0)
            .build();
        assert_eq!(config.target_fps, 1);
        assert_eq!(config.sample_window, 5);
        assert_eq!(config.severity, 1.0);

        let config = OverlayConfig::builder().sample_window(0).severity(-1.0).build();
        assert_eq!(config.sample_window, 1);
        assert_eq!(config.severity, 0.0);
    }
}
