use rayon::prelude::*;
use tracing::trace;

use crate::overlay::common::error::Result;
use crate::overlay::frame::Frame;
use crate::overlay::transform::kernels::{PixelKernel, transform_row};
use crate::overlay::transform::transformer::PixelTransformer;
use crate::overlay::transform::types::TransformParams;

/// Data-parallel backend: one rayon task per row on the global pool.
pub struct ParallelTransformer;

impl ParallelTransformer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ParallelTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelTransformer for ParallelTransformer {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn apply(&self, params: &TransformParams, mut frame: Frame) -> Result<Frame> {
        let kernel = PixelKernel::prepare(params);
        let mirror = params.mode.mirrors();
        if kernel.is_identity() && !mirror {
            return Ok(frame);
        }

        trace!(
            "Parallel transform {:?} on {}x{} ({} threads)",
            params.mode,
            frame.width(),
            frame.height(),
            rayon::current_num_threads()
        );
        let stride = frame.stride();
        frame
            .data_mut()
            .par_chunks_mut(stride)
            .for_each(|row| transform_row(&kernel, row, mirror));
        Ok(frame)
    }
}
