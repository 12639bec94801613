use crate::overlay::color::BlindnessType;
use crate::overlay::common::error::OverlayError;
use crate::overlay::frame::{Frame, Rgba8};
use crate::overlay::transform::{
    CpuTransformer, HighlightMatch, ParallelTransformer, PixelTransformer, ProcessingMode,
    TransformBackend, TransformParams, create_transformer,
};

fn test_pattern(width: usize, height: usize) -> Frame {
    Frame::from_fn(width, height, |x, y| {
        Rgba8::new(
            (x * 37 % 256) as u8,
            (y * 53 % 256) as u8,
            ((x * y + 11) % 256) as u8,
            (255 - y * 3) as u8,
        )
    })
    .unwrap()
}

fn apply(mode: ProcessingMode, frame: Frame) -> Frame {
    let params = TransformParams::new(mode, BlindnessType::Deuteranope);
    CpuTransformer.apply(&params, frame).unwrap()
}

#[test]
fn test_identity_modes_return_the_input() {
    let frame = test_pattern(16, 9);
    for mode in [ProcessingMode::None, ProcessingMode::GrabScreenRegion] {
        assert_eq!(apply(mode, frame.clone()), frame);
    }
}

#[test]
fn test_swap_channels_twice_is_identity() {
    let frame = test_pattern(13, 7);
    let once = apply(ProcessingMode::SwapChannels, frame.clone());
    assert_ne!(once, frame);
    assert_eq!(once.pixel(3, 2).r, frame.pixel(3, 2).b);
    assert_eq!(apply(ProcessingMode::SwapChannels, once), frame);
}

#[test]
fn test_swap_and_flip_mirrors_each_row() {
    let frame = Frame::from_fn(3, 1, |x, _| Rgba8::new(x as u8, 100, 200, 10 + x as u8)).unwrap();
    let out = apply(ProcessingMode::SwapAndFlipChannels, frame);

    assert_eq!(out.pixel(0, 0), Rgba8::new(200, 100, 2, 12));
    assert_eq!(out.pixel(1, 0), Rgba8::new(200, 100, 1, 11));
    assert_eq!(out.pixel(2, 0), Rgba8::new(200, 100, 0, 10));
}

#[test]
fn test_swap_and_flip_twice_is_identity() {
    let frame = test_pattern(10, 4);
    let twice = apply(
        ProcessingMode::SwapAndFlipChannels,
        apply(ProcessingMode::SwapAndFlipChannels, frame.clone()),
    );
    assert_eq!(twice, frame);
}

#[test]
fn test_invert_lightness_twice_is_identity() {
    let frame = test_pattern(16, 16);
    let twice = apply(
        ProcessingMode::InvertLightness,
        apply(ProcessingMode::InvertLightness, frame.clone()),
    );
    assert_eq!(twice, frame);
}

#[test]
fn test_daltonize_deuteranope_red_frame() {
    let frame = Frame::filled(4, 4, Rgba8::new(255, 0, 0, 255)).unwrap();
    let out = apply(ProcessingMode::DaltonizeCorrection, frame);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(out.pixel(x, y), Rgba8::new(255, 124, 190, 255));
        }
    }
}

#[test]
fn test_simulate_uses_the_blindness_type() {
    let frame = Frame::filled(2, 2, Rgba8::opaque(255, 0, 0)).unwrap();
    let protan = TransformParams::new(ProcessingMode::SimulateBlindness, BlindnessType::Protanope);
    let out = CpuTransformer.apply(&protan, frame).unwrap();
    assert_eq!(out.pixel(1, 1), Rgba8::opaque(94, 94, 13));
}

#[test]
fn test_alpha_is_preserved_in_every_mode() {
    let frame = test_pattern(12, 12);
    for mode in ProcessingMode::ALL {
        let out = apply(mode, frame.clone());
        for y in 0..12 {
            for x in 0..12 {
                assert_eq!(out.pixel(x, y).a, frame.pixel(x, y).a, "alpha changed in {:?}", mode);
            }
        }
    }
}

#[test]
fn test_highlight_exact_keeps_only_the_cursor_color() {
    let target = Rgba8::opaque(200, 10, 10);
    let frame = Frame::from_fn(2, 1, |x, _| {
        if x == 0 { target } else { Rgba8::new(0, 0, 255, 200) }
    })
    .unwrap();

    let params = TransformParams::new(
        ProcessingMode::HighlightColorUnderCursor(HighlightMatch::Exact),
        BlindnessType::Protanope,
    )
    .with_cursor_color(target);
    let out = CpuTransformer.apply(&params, frame).unwrap();

    assert_eq!(out.pixel(0, 0), target);
    assert_eq!(out.pixel(1, 0), Rgba8::new(6, 6, 6, 200));
}

#[test]
fn test_highlight_fuzzy_keeps_similar_colors() {
    let target = Rgba8::opaque(200, 10, 10);
    let frame = Frame::from_fn(3, 1, |x, _| match x {
        0 => Rgba8::opaque(201, 10, 10),
        1 => Rgba8::opaque(10, 200, 10),
        _ => target,
    })
    .unwrap();

    let params = TransformParams::new(
        ProcessingMode::HighlightColorUnderCursor(HighlightMatch::Fuzzy),
        BlindnessType::Protanope,
    )
    .with_cursor_color(target);
    let out = CpuTransformer.apply(&params, frame).unwrap();

    assert_eq!(out.pixel(0, 0), Rgba8::opaque(201, 10, 10));
    assert_eq!(out.pixel(1, 0), Rgba8::opaque(51, 51, 51));
    assert_eq!(out.pixel(2, 0), target);
}

#[test]
fn test_parallel_matches_cpu_for_every_mode() {
    let frame = test_pattern(33, 17);
    for blindness in BlindnessType::ALL {
        for mode in ProcessingMode::ALL {
            let params = TransformParams::new(mode, blindness)
                .with_cursor_color(frame.pixel(5, 5))
                .with_severity(0.8);
            let cpu = CpuTransformer.apply(&params, frame.clone()).unwrap();
            let parallel = ParallelTransformer.apply(&params, frame.clone()).unwrap();
            assert_eq!(cpu, parallel, "backends disagree for {:?} / {:?}", mode, blindness);
        }
    }
}

#[test]
fn test_transform_keeps_dimensions() {
    let frame = test_pattern(7, 3);
    for mode in ProcessingMode::ALL {
        let out = apply(mode, frame.clone());
        assert_eq!((out.width(), out.height()), (7, 3));
    }
}

#[test]
fn test_mode_raw_values() {
    for mode in ProcessingMode::ALL {
        assert_eq!(ProcessingMode::try_from(u32::from(mode)).unwrap(), mode);
    }
    assert_eq!(
        ProcessingMode::try_from(7).unwrap(),
        ProcessingMode::HighlightColorUnderCursor(HighlightMatch::Exact)
    );
    assert!(matches!(ProcessingMode::try_from(42), Err(OverlayError::InvalidMode(42))));
}

#[test]
fn test_mode_cycling_wraps_around() {
    assert_eq!(ProcessingMode::None.next(), ProcessingMode::SimulateBlindness);
    assert_eq!(ProcessingMode::GrabScreenRegion.next(), ProcessingMode::None);
    assert_eq!(ProcessingMode::None.previous(), ProcessingMode::GrabScreenRegion);
    for mode in ProcessingMode::ALL {
        assert_eq!(mode.next().previous(), mode);
    }
}

#[test]
fn test_create_cpu_backends() {
    assert_eq!(create_transformer(TransformBackend::Cpu).unwrap().name(), "cpu");
    assert_eq!(create_transformer(TransformBackend::Parallel).unwrap().name(), "parallel");
}

#[cfg(not(cuda_backend))]
#[test]
fn test_cuda_backend_unavailable_without_toolchain() {
    let result = create_transformer(TransformBackend::Cuda);
    assert!(matches!(result, Err(OverlayError::BackendUnavailable(_))));
}
