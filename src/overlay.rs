//! Colorblind overlay engine
//!
//! Each display refresh the capture pipeline grabs the screen under the
//! overlay, samples the color under the cursor, applies the active
//! processing mode and hands the result to a presenter. A region grab is
//! exported once its selection is finalized.

pub mod capture;
pub mod color;
pub mod common;
pub mod config;
pub mod frame;
pub mod pipeline;
pub mod sampler;
pub mod selection;
pub mod session;
pub mod shortcuts;
pub mod transform;

pub use common::{
    OverlayError,
    Result,
};

pub use color::{
    BlindnessType,
    ColorDistance,
    ColorMatch,
};

pub use frame::{
    Frame,
    ImageRect,
    PixelPoint,
    Rgba8,
};

pub use transform::{
    HighlightMatch,
    HighlightSettings,
    PixelTransformer,
    ProcessingMode,
    TransformBackend,
    TransformParams,
    create_transformer,
};

pub use sampler::{
    ColorSampler,
    CursorColorSample,
    SampleProvenance,
    SamplingHeuristic,
};

pub use selection::{
    Point,
    RegionSelection,
    WindowRect,
};

pub use session::Session;
pub use shortcuts::Key;

pub use capture::{
    ClipboardExporter,
    NullPresenter,
    Presenter,
    ScreenCapture,
    SyntheticCapture,
    TiffExporter,
    WindowId,
};

pub use config::{
    OverlayConfig,
    OverlayConfigBuilder,
    TiffCompression,
};

pub use pipeline::{
    CapturePipeline,
    PointerOrigin,
    TickInput,
    TickOutcome,
};
