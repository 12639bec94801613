use cudarc::driver::safe::*;
use cudarc::nvrtc::Ptx;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::overlay::color::conversions::{LINEAR_RGB_FROM_LMS, LMS_FROM_LINEAR_RGB, Mat3};
use crate::overlay::color::DALTONIZE_ERROR_MATRIX;
use crate::overlay::common::error::{OverlayError, Result};
use crate::overlay::frame::Frame;
use crate::overlay::transform::kernels::PixelKernel;
use crate::overlay::transform::transformer::PixelTransformer;
use crate::overlay::transform::types::{HighlightMatch, TransformParams};

// Kernel operation codes, kept in sync with pixel_transform.cu
const OP_IDENTITY: i32 = 0;
const OP_SIMULATE: i32 = 1;
const OP_DALTONIZE: i32 = 2;
const OP_SWAP_RED_BLUE: i32 = 3;
const OP_INVERT_LIGHTNESS: i32 = 4;
const OP_HIGHLIGHT_FUZZY: i32 = 5;
const OP_HIGHLIGHT_EXACT: i32 = 6;

/// CUDA backend: one thread per pixel, frame copied to and from the device.
pub struct CudaTransformer {
    stream: Arc<CudaStream>,
    kernel: CudaFunction,
}

impl CudaTransformer {
    /// Initializes the CUDA context and loads the PTX compiled by build.rs
    pub fn new() -> Result<Self> {
        Self::init().map_err(|e| OverlayError::CudaError(e.to_string()))
    }

    fn init() -> anyhow::Result<Self> {
        let ptx = include_str!(concat!(env!("OUT_DIR"), "/pixel_transform.ptx"));
        let kernel_name = "transform_rgba8";

        let ctx = CudaContext::new(0)?;
        let stream = ctx.default_stream();
        let module = ctx.load_module(Ptx::from_src(ptx))?;
        let kernel = module.load_function(kernel_name)?;
        debug!("Loaded CUDA kernel {}", kernel_name);

        Ok(Self { stream, kernel })
    }

    fn run(&self, params: &TransformParams, frame: Frame) -> anyhow::Result<Frame> {
        let kernel = PixelKernel::prepare(params);
        let mirror = params.mode.mirrors();
        if kernel.is_identity() && !mirror {
            return Ok(frame);
        }

        let width = frame.width();
        let height = frame.height();

        let mut op = OP_IDENTITY;
        let mut severity = 1.0f32;
        let mut projection: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let mut missing_cone = 0i32;
        let mut target = [0i32; 3];
        let mut target_lab = [0.0f32; 3];
        let mut threshold = 0.0f32;
        let mut dim_factor = 1.0f32;

        match kernel {
            PixelKernel::Identity => {}
            PixelKernel::Simulate { blindness, severity: s }
            | PixelKernel::Daltonize { blindness, severity: s } => {
                op = if matches!(kernel, PixelKernel::Simulate { .. }) {
                    OP_SIMULATE
                } else {
                    OP_DALTONIZE
                };
                severity = s;
                projection = blindness.projection();
                missing_cone = blindness.missing_cone() as i32;
            }
            PixelKernel::SwapRedBlue => op = OP_SWAP_RED_BLUE,
            PixelKernel::InvertLightness => op = OP_INVERT_LIGHTNESS,
            PixelKernel::Highlight {
                target: color,
                target_lab: lab,
                matching,
                threshold: t,
                dim_factor: d,
            } => {
                op = match matching {
                    HighlightMatch::Fuzzy => OP_HIGHLIGHT_FUZZY,
                    HighlightMatch::Exact => OP_HIGHLIGHT_EXACT,
                };
                target = [color.r as i32, color.g as i32, color.b as i32];
                target_lab = [lab.l, lab.a, lab.b];
                threshold = t;
                dim_factor = d;
            }
        }

        // Flatten the 3x3 matrices row-major, in the order the kernel expects
        let matrices: Vec<f32> = [LMS_FROM_LINEAR_RGB, LINEAR_RGB_FROM_LMS, projection, DALTONIZE_ERROR_MATRIX]
            .iter()
            .flat_map(|m| m.iter().flat_map(|row| row.iter().copied()))
            .collect();
        let mut d_matrices = self.stream.clone_htod(&matrices)?;

        let mut d_src = self.stream.clone_htod(frame.data())?;
        let mut d_dst = self.stream.alloc_zeros::<u8>(frame.data().len())?;

        let width_arg = width as i32;
        let height_arg = height as i32;
        let mirror_arg = mirror as i32;
        let mut launch_args = self.stream.launch_builder(&self.kernel);
        launch_args.arg(&mut d_src);
        launch_args.arg(&mut d_dst);
        launch_args.arg(&width_arg);
        launch_args.arg(&height_arg);
        launch_args.arg(&op);
        launch_args.arg(&mirror_arg);
        launch_args.arg(&mut d_matrices);
        launch_args.arg(&missing_cone);
        launch_args.arg(&severity);
        launch_args.arg(&target[0]);
        launch_args.arg(&target[1]);
        launch_args.arg(&target[2]);
        launch_args.arg(&target_lab[0]);
        launch_args.arg(&target_lab[1]);
        launch_args.arg(&target_lab[2]);
        launch_args.arg(&threshold);
        launch_args.arg(&dim_factor);

        let threads = (32, 8, 1);
        let blocks = (width.div_ceil(32), height.div_ceil(8), 1);
        let cfg = LaunchConfig {
            grid_dim: (blocks.0 as u32, blocks.1 as u32, blocks.2 as u32),
            block_dim: threads,
            shared_mem_bytes: 0,
        };

        trace!("Launching CUDA transform op={} grid={:?}", op, cfg.grid_dim);
        unsafe { launch_args.launch(cfg)? };

        let data = self.stream.clone_dtoh(&d_dst)?;
        Ok(Frame::new(width, height, data)?)
    }
}

impl PixelTransformer for CudaTransformer {
    fn name(&self) -> &'static str {
        "cuda"
    }

    fn apply(&self, params: &TransformParams, frame: Frame) -> Result<Frame> {
        self.run(params, frame)
            .map_err(|e| OverlayError::CudaError(e.to_string()))
    }
}
