mod capture_pipeline;
mod timing;


pub use capture_pipeline::{CapturePipeline, PointerOrigin, TickInput, TickOutcome};
pub use timing::{FpsMonitor, PipelineTimings, StepTiming, Timer};
