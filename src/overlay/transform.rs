//! Per-pixel transform engine and its backends

#[cfg(cuda_backend)]
pub mod cuda_transformer;
pub mod cpu_transformer;
pub mod kernels;
pub mod parallel_transformer;
pub mod transformer;
pub mod types;

#[cfg(test)]
mod tests;

// Stand-in when built without the CUDA toolchain
#[cfg(not(cuda_backend))]
pub struct CudaTransformer;

#[cfg(not(cuda_backend))]
impl CudaTransformer {
    pub fn new() -> Result<Self> {
        Err(OverlayError::BackendUnavailable(
            "built without CUDA support (set DALTONLENS_CUDA to enable it)".to_string(),
        ))
    }
}

#[cfg(not(cuda_backend))]
impl PixelTransformer for CudaTransformer {
    fn name(&self) -> &'static str {
        "cuda"
    }

    fn apply(&self, _params: &TransformParams, _frame: Frame) -> Result<Frame> {
        Err(OverlayError::BackendUnavailable("CUDA transform".to_string()))
    }
}

#[cfg(cuda_backend)]
pub use cuda_transformer::CudaTransformer;
pub use cpu_transformer::CpuTransformer;
pub use kernels::PixelKernel;
pub use parallel_transformer::ParallelTransformer;
pub use transformer::PixelTransformer;
pub use types::{HighlightMatch, HighlightSettings, ProcessingMode, TransformBackend, TransformParams};

use tracing::info;

use crate::overlay::common::error::Result;
#[cfg(not(cuda_backend))]
use crate::overlay::common::error::OverlayError;
#[cfg(not(cuda_backend))]
use crate::overlay::frame::Frame;

/// Builds the transformer for `backend`. Fails with `BackendUnavailable`
/// when the CUDA backend was not compiled in.
pub fn create_transformer(backend: TransformBackend) -> Result<Box<dyn PixelTransformer>> {
    let transformer: Box<dyn PixelTransformer> = match backend {
        TransformBackend::Cpu => Box::new(CpuTransformer::new()),
        TransformBackend::Parallel => Box::new(ParallelTransformer::new()),
        TransformBackend::Cuda => Box::new(CudaTransformer::new()?),
    };
    info!("Using {} transform backend", transformer.name());
    Ok(transformer)
}
