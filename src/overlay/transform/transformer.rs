use crate::overlay::common::error::Result;
use crate::overlay::frame::Frame;
use crate::overlay::transform::types::TransformParams;

/// Applies the active processing mode to a whole frame.
///
/// The frame is taken by value and returned with the same dimensions, so a
/// backend can work in place or hand back a new buffer.
pub trait PixelTransformer {
    fn name(&self) -> &'static str;
    fn apply(&self, params: &TransformParams, frame: Frame) -> Result<Frame>;
}
