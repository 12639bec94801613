use crate::overlay::common::error::Result;
use crate::overlay::frame::{Frame, ImageRect};

/// Platform window handle, used to keep the overlay out of its own capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowId(pub u64);

/// Grabs the current screen content below `exclude`.
pub trait ScreenCapture {
    fn capture(&mut self, exclude: WindowId) -> Result<Frame>;
}

/// Displays a transformed frame, with the grab rectangle drawn on top when given.
pub trait Presenter {
    fn present(&mut self, frame: Frame, selection: Option<ImageRect>) -> Result<()>;
}

/// Receives the pixels of a finalized region grab.
pub trait ClipboardExporter {
    fn copy_region(&mut self, region: Frame, rect: ImageRect) -> Result<()>;
}
