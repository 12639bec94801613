use tracing::trace;

use crate::overlay::common::error::Result;
use crate::overlay::frame::Frame;
use crate::overlay::transform::kernels::{PixelKernel, transform_row};
use crate::overlay::transform::transformer::PixelTransformer;
use crate::overlay::transform::types::TransformParams;

/// Sequential reference backend
pub struct CpuTransformer;

impl CpuTransformer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CpuTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelTransformer for CpuTransformer {
    fn name(&self) -> &'static str {
        "cpu"
    }

    fn apply(&self, params: &TransformParams, mut frame: Frame) -> Result<Frame> {
        let kernel = PixelKernel::prepare(params);
        let mirror = params.mode.mirrors();
        if kernel.is_identity() && !mirror {
            return Ok(frame);
        }

        trace!("CPU transform {:?} on {}x{}", params.mode, frame.width(), frame.height());
        let stride = frame.stride();
        for row in frame.data_mut().chunks_exact_mut(stride) {
            transform_row(&kernel, row, mirror);
        }
        Ok(frame)
    }
}
