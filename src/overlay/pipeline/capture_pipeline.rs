use std::time::{Duration, Instant};
use tracing::{debug, debug_span, error, info, warn};

use crate::overlay::capture::{ClipboardExporter, Presenter, ScreenCapture};
use crate::overlay::color::ColorDistance;
use crate::overlay::common::error::{OverlayError, Result};
use crate::overlay::config::OverlayConfig;
use crate::overlay::frame::{Frame, ImageRect, PixelPoint};
use crate::overlay::pipeline::timing::{FpsMonitor, PipelineTimings, Timer};
use crate::overlay::sampler::{ColorSampler, CursorColorSample};
use crate::overlay::selection::{Point, WindowRect};
use crate::overlay::session::Session;
use crate::overlay::transform::{PixelTransformer, ProcessingMode, TransformParams, create_transformer};

/// Convention of the pointer coordinates handed to [`CapturePipeline::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerOrigin {
    #[default]
    TopLeft,
    /// y grows upwards from the bottom of the display
    BottomLeft,
}

/// Per-tick input: pointer position in display points and the display size
/// in points, used to derive the capture scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    pub pointer: Point,
    pub display_size: Option<(f32, f32)>,
    pub origin: PointerOrigin,
}

impl TickInput {
    pub fn at(pointer: Point) -> Self {
        Self {
            pointer,
            ..Self::default()
        }
    }

    pub fn with_display_size(mut self, width: f32, height: f32) -> Self {
        self.display_size = Some((width, height));
        self
    }

    pub fn with_origin(mut self, origin: PointerOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Captured pixels per display point; 1.0 when the display size is unknown.
    pub fn scale(&self, captured_width: usize) -> f32 {
        match self.display_size {
            Some((width, _)) if width > 0.0 => captured_width as f32 / width,
            _ => 1.0,
        }
    }

    /// Pointer in top-left display points.
    pub fn pointer_top_left(&self) -> Point {
        match (self.origin, self.display_size) {
            (PointerOrigin::BottomLeft, Some((_, height))) => {
                Point::new(self.pointer.x, height - self.pointer.y)
            }
            _ => self.pointer,
        }
    }

    pub fn pixel_position(&self, scale: f32) -> PixelPoint {
        let point = self.pointer_top_left();
        PixelPoint::new((point.x * scale).floor() as i64, (point.y * scale).floor() as i64)
    }
}

/// What happened during one tick
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Mode `None`: nothing captured
    Idle,
    /// Capture failed, the next tick retries
    CaptureSkipped,
    Presented,
    /// A finalized grab was exported
    Exported(ImageRect),
    /// A finalized grab could not be exported; the message is meant for the user
    ExportFailed(String),
    /// The grab rectangle was empty
    GrabCancelled,
    /// Transform or present failed, no frame was produced
    FrameDropped,
}

/// Drives capture, sampling, transform and presentation, one tick per
/// display refresh.
pub struct CapturePipeline<C: ScreenCapture, P: Presenter, E: ClipboardExporter> {
    capture: C,
    presenter: P,
    exporter: E,
    transformer: Box<dyn PixelTransformer>,
    sampler: ColorSampler,
    config: OverlayConfig,
    frame_count: u64,
    fps: FpsMonitor,
    capture_failures: u32,
    last_sample: CursorColorSample,
}

impl<C: ScreenCapture, P: Presenter, E: ClipboardExporter> CapturePipeline<C, P, E> {
    /// Builds the pipeline with the transformer selected by `config.backend`.
    pub fn with_custom(capture: C, presenter: P, exporter: E, config: OverlayConfig) -> Result<Self> {
        let transformer = create_transformer(config.backend)?;
        Ok(Self::with_transformer(capture, presenter, exporter, transformer, config))
    }

    pub fn with_transformer(
        capture: C,
        presenter: P,
        exporter: E,
        transformer: Box<dyn PixelTransformer>,
        config: OverlayConfig,
    ) -> Self {
        let sampler = ColorSampler::new(config.sample_window, config.sampling);
        Self {
            capture,
            presenter,
            exporter,
            transformer,
            sampler,
            config,
            frame_count: 0,
            fps: FpsMonitor::new(),
            capture_failures: 0,
            last_sample: CursorColorSample::neutral(),
        }
    }

    pub fn tick(&mut self, session: &mut Session, input: &TickInput) -> TickOutcome {
        let mode = session.mode();
        if mode == ProcessingMode::None {
            return TickOutcome::Idle;
        }

        let _span = debug_span!("tick", frame = self.frame_count, mode = mode.label()).entered();
        self.fps.tick();
        let mut timings = PipelineTimings::new();

        let timer = Timer::start("capture");
        let frame = match self.capture.capture(self.config.overlay_window) {
            Ok(frame) => {
                if self.capture_failures > 0 {
                    info!("Screen capture recovered after {} failed attempts", self.capture_failures);
                    self.capture_failures = 0;
                }
                frame
            }
            Err(e) => {
                self.capture_failures += 1;
                if self.capture_failures == 1 {
                    warn!("Screen capture failed, skipping frame: {}", e);
                } else {
                    debug!("Screen capture still failing ({}): {}", self.capture_failures, e);
                }
                return TickOutcome::CaptureSkipped;
            }
        };
        timings.record(timer);

        let scale = input.scale(frame.width());

        let timer = Timer::start("sample");
        self.last_sample = self.sample_cursor(&frame, input.pixel_position(scale));
        timings.record(timer);

        if mode == ProcessingMode::GrabScreenRegion {
            if let Some(window_rect) = session.selection_mut().consume() {
                return self.export_region(session, &frame, window_rect, scale);
            }
        }

        let selection_overlay = if mode == ProcessingMode::GrabScreenRegion {
            session
                .selection()
                .current_rect()
                .map(|rect| rect.to_image_rect(scale, frame.width(), frame.height()))
        } else {
            None
        };

        let params = TransformParams::new(mode, session.blindness())
            .with_cursor_color(self.last_sample.color)
            .with_severity(self.config.severity)
            .with_highlight(self.config.highlight);

        let timer = Timer::start("transform");
        let transformed = match self.transformer.apply(&params, frame) {
            Ok(frame) => frame,
            Err(e) => {
                error!("{} transform failed: {}", self.transformer.name(), e);
                return TickOutcome::FrameDropped;
            }
        };
        timings.record(timer);

        let timer = Timer::start("present");
        if let Err(e) = self.presenter.present(transformed, selection_overlay) {
            error!("Failed to present frame: {}", e);
            return TickOutcome::FrameDropped;
        }
        timings.record(timer);

        self.frame_count += 1;
        timings.log_summary(self.frame_count);
        TickOutcome::Presented
    }

    /// Runs `ticks` ticks paced to `config.target_fps`. `input_fn` is called
    /// before each tick and may update the session (pointer events, keys).
    pub fn run_for<F>(&mut self, session: &mut Session, ticks: u64, mut input_fn: F) -> Vec<TickOutcome>
    where
        F: FnMut(u64, &mut Session) -> TickInput,
    {
        let frame_budget = Duration::from_secs_f64(1.0 / self.config.target_fps.max(1) as f64);
        let mut outcomes = Vec::with_capacity(ticks as usize);

        for tick in 0..ticks {
            let started = Instant::now();
            let input = input_fn(tick, session);
            outcomes.push(self.tick(session, &input));

            let elapsed = started.elapsed();
            if elapsed < frame_budget {
                std::thread::sleep(frame_budget - elapsed);
            }
        }
        outcomes
    }

    fn sample_cursor(&self, frame: &Frame, point: PixelPoint) -> CursorColorSample {
        match self.sampler.sample(frame, point) {
            Ok(sample) => sample.with_name(ColorDistance::Cie2000),
            Err(OverlayError::OutOfBounds { .. }) => CursorColorSample::neutral(),
            Err(e) => {
                warn!("Cursor sampling failed: {}", e);
                CursorColorSample::neutral()
            }
        }
    }

    fn export_region(
        &mut self,
        session: &mut Session,
        frame: &Frame,
        window_rect: WindowRect,
        scale: f32,
    ) -> TickOutcome {
        session.set_mode(ProcessingMode::None);

        let rect = window_rect.to_image_rect(scale, frame.width(), frame.height());
        if rect.is_empty() {
            info!("Grab cancelled: empty selection {:?}", window_rect);
            return TickOutcome::GrabCancelled;
        }

        let result = frame
            .crop(rect)
            .and_then(|region| self.exporter.copy_region(region, rect));
        match result {
            Ok(()) => {
                info!("Grabbed {}x{} region at ({}, {})", rect.width, rect.height, rect.x, rect.y);
                TickOutcome::Exported(rect)
            }
            Err(e) => {
                error!("Failed to export grabbed region: {}", e);
                TickOutcome::ExportFailed(e.to_string())
            }
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn last_sample(&self) -> &CursorColorSample {
        &self.last_sample
    }

    pub fn transformer_name(&self) -> &'static str {
        self.transformer.name()
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn capture(&self) -> &C {
        &self.capture
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn exporter(&self) -> &E {
        &self.exporter
    }
}
