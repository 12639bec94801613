use daltonlens_rs::logger;
use daltonlens_rs::overlay::{
    BlindnessType, CapturePipeline, Key, NullPresenter, OverlayConfig, Point, ProcessingMode,
    Session, SyntheticCapture, TickInput, TickOutcome, TiffCompression, TiffExporter,
    TransformBackend, WindowId,
};

use anyhow::Context;
use tracing::{error, info, warn};

const SCREEN_WIDTH: usize = 1280;
const SCREEN_HEIGHT: usize = 800;
const DISPLAY_SCALE: f32 = 2.0;

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting DaltonLens overlay (synthetic screen)...");

    let output = std::env::args().nth(1).unwrap_or_else(|| "region.tiff".to_string());

    let config = OverlayConfig::builder()
        .backend(TransformBackend::Parallel)
        .target_fps(30)
        .overlay_window(WindowId(1))
        .export_compression(TiffCompression::Lzw)
        .build();

    let capture = SyntheticCapture::test_pattern(SCREEN_WIDTH, SCREEN_HEIGHT)
        .context("creating the synthetic screen")?
        .fail_on_calls([3]);
    let exporter = TiffExporter::to_file(&output, config.export_compression);

    let mut pipeline = match CapturePipeline::with_custom(
        capture,
        NullPresenter::new(),
        exporter.clone(),
        config.clone(),
    ) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            warn!("{}; falling back to the CPU backend", e);
            let config = OverlayConfig { backend: TransformBackend::Cpu, ..config };
            CapturePipeline::with_custom(
                SyntheticCapture::test_pattern(SCREEN_WIDTH, SCREEN_HEIGHT)?,
                NullPresenter::new(),
                exporter,
                config,
            )?
        }
    };

    info!("Capture pipeline initialized ({} backend)", pipeline.transformer_name());

    let display = (
        SCREEN_WIDTH as f32 / DISPLAY_SCALE,
        SCREEN_HEIGHT as f32 / DISPLAY_SCALE,
    );
    let mut session = Session::new(ProcessingMode::None, BlindnessType::Deuteranope);
    session.apply_shortcut(Key::Digit(1));

    // Daltonize for a few frames, then grab a region with a scripted drag
    let outcomes = pipeline.run_for(&mut session, 12, |tick, session| {
        match tick {
            6 => {
                session.apply_shortcut(Key::Space);
                session.pointer_pressed(Point::new(40.0, 30.0));
            }
            7 => {
                session.pointer_dragged(Point::new(200.0, 120.0));
            }
            8 => {
                session.pointer_released(Point::new(240.0, 150.0));
            }
            _ => {}
        }
        let cursor = Point::new(20.0 + tick as f32 * 30.0, 100.0);
        TickInput::at(cursor).with_display_size(display.0, display.1)
    });

    for (tick, outcome) in outcomes.iter().enumerate() {
        match outcome {
            TickOutcome::Exported(rect) => info!("Tick {}: exported {:?} to {}", tick, rect, output),
            TickOutcome::ExportFailed(message) => error!("Tick {}: export failed: {}", tick, message),
            other => info!("Tick {}: {:?}", tick, other),
        }
    }

    let sample = pipeline.last_sample();
    info!(
        "Frames presented: {}, last cursor color {:?} ({})",
        pipeline.presenter().frames_presented(),
        sample.color,
        sample.name.map(|m| m.entry.color_name).unwrap_or("unknown")
    );

    Ok(())
}
