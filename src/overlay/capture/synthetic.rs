use std::collections::HashSet;
use tracing::trace;

use crate::overlay::capture::source::{ScreenCapture, WindowId};
use crate::overlay::common::error::{OverlayError, Result};
use crate::overlay::frame::{Frame, Rgba8};

const COLOR_BARS: [Rgba8; 8] = [
    Rgba8::opaque(255, 255, 255),
    Rgba8::opaque(255, 255, 0),
    Rgba8::opaque(0, 255, 255),
    Rgba8::opaque(0, 255, 0),
    Rgba8::opaque(255, 0, 255),
    Rgba8::opaque(255, 0, 0),
    Rgba8::opaque(0, 0, 255),
    Rgba8::opaque(0, 0, 0),
];

/// Deterministic stand-in for a screen: returns the same frame on every
/// call, except for the calls scripted to fail.
#[derive(Debug, Clone)]
pub struct SyntheticCapture {
    screen: Frame,
    calls: u64,
    failing_calls: HashSet<u64>,
}

impl SyntheticCapture {
    /// Color bars over the top two thirds, a gray ramp below.
    pub fn test_pattern(width: usize, height: usize) -> Result<Self> {
        let bars_height = height * 2 / 3;
        let screen = Frame::from_fn(width, height, |x, y| {
            if y < bars_height {
                COLOR_BARS[x * COLOR_BARS.len() / width]
            } else {
                let level = (x * 255 / width.saturating_sub(1).max(1)) as u8;
                Rgba8::opaque(level, level, level)
            }
        })?;
        Ok(Self::from_frame(screen))
    }

    pub fn from_frame(screen: Frame) -> Self {
        Self {
            screen,
            calls: 0,
            failing_calls: HashSet::new(),
        }
    }

    /// Makes the given (zero-based) capture calls fail with `CaptureUnavailable`.
    pub fn fail_on_calls(mut self, calls: impl IntoIterator<Item = u64>) -> Self {
        self.failing_calls.extend(calls);
        self
    }

    pub fn calls(&self) -> u64 {
        self.calls
    }

    pub fn screen(&self) -> &Frame {
        &self.screen
    }
}

impl ScreenCapture for SyntheticCapture {
    fn capture(&mut self, exclude: WindowId) -> Result<Frame> {
        let call = self.calls;
        self.calls += 1;
        if self.failing_calls.contains(&call) {
            return Err(OverlayError::CaptureUnavailable(format!(
                "scripted failure on capture {}",
                call
            )));
        }
        trace!("Synthetic capture {} excluding window {}", call, exclude.0);
        Ok(self.screen.clone())
    }
}
