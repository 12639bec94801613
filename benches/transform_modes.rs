use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use daltonlens_rs::overlay::{
    BlindnessType, ColorSampler, Frame, HighlightMatch, PixelPoint, PixelTransformer,
    ProcessingMode, Rgba8, SamplingHeuristic, TransformParams,
    transform::{CpuTransformer, ParallelTransformer},
};

fn generate_screen(width: usize, height: usize) -> Frame {
    Frame::from_fn(width, height, |x, y| {
        Rgba8::opaque(((x + y) % 256) as u8, (x * 3 % 256) as u8, (y * 7 % 256) as u8)
    })
    .expect("valid dimensions")
}

fn benchmark_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_modes");
    let screen = generate_screen(1280, 800);

    let modes = vec![
        (ProcessingMode::SimulateBlindness, "simulate"),
        (ProcessingMode::DaltonizeCorrection, "daltonize"),
        (ProcessingMode::SwapAndFlipChannels, "swap_flip"),
        (ProcessingMode::InvertLightness, "invert_lightness"),
        (ProcessingMode::HighlightColorUnderCursor(HighlightMatch::Fuzzy), "highlight_fuzzy"),
    ];

    for (mode, label) in modes {
        let params = TransformParams::new(mode, BlindnessType::Deuteranope)
            .with_cursor_color(screen.pixel(100, 100));

        group.bench_with_input(BenchmarkId::new("cpu", label), &screen, |b, screen| {
            b.iter(|| CpuTransformer.apply(&params, black_box(screen.clone())))
        });
        group.bench_with_input(BenchmarkId::new("parallel", label), &screen, |b, screen| {
            b.iter(|| ParallelTransformer.apply(&params, black_box(screen.clone())))
        });
    }

    group.finish();
}

fn benchmark_screen_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("daltonize_by_size");
    let params = TransformParams::new(ProcessingMode::DaltonizeCorrection, BlindnessType::Protanope);

    let sizes = vec![
        (640, 400, "640x400"),
        (1280, 800, "1280x800"),
        (2560, 1600, "2560x1600"),
    ];

    for (width, height, label) in sizes {
        let screen = generate_screen(width, height);
        group.bench_with_input(BenchmarkId::from_parameter(label), &screen, |b, screen| {
            b.iter(|| ParallelTransformer.apply(&params, black_box(screen.clone())))
        });
    }

    group.finish();
}

fn benchmark_sampler(c: &mut Criterion) {
    let screen = generate_screen(1280, 800);
    let darkest = ColorSampler::new(9, SamplingHeuristic::Darkest);
    let colorful = ColorSampler::new(9, SamplingHeuristic::MostColorful);

    c.bench_function("sample_darkest_9x9", |b| {
        b.iter(|| darkest.sample(&screen, black_box(PixelPoint::new(640, 400))))
    });
    c.bench_function("sample_most_colorful_9x9", |b| {
        b.iter(|| colorful.sample(&screen, black_box(PixelPoint::new(640, 400))))
    });
}

criterion_group!(benches, benchmark_modes, benchmark_screen_sizes, benchmark_sampler);
criterion_main!(benches);
