use tracing::trace;

use crate::overlay::capture::source::Presenter;
use crate::overlay::common::error::Result;
use crate::overlay::frame::{Frame, ImageRect};

/// Presenter for headless runs: drops the frames and keeps a count.
#[derive(Debug, Default)]
pub struct NullPresenter {
    frames_presented: u64,
    last_selection: Option<ImageRect>,
}

impl NullPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn last_selection(&self) -> Option<ImageRect> {
        self.last_selection
    }
}

impl Presenter for NullPresenter {
    fn present(&mut self, frame: Frame, selection: Option<ImageRect>) -> Result<()> {
        self.frames_presented += 1;
        self.last_selection = selection;
        trace!(
            "Presented frame {} ({}x{}, selection {:?})",
            self.frames_presented,
            frame.width(),
            frame.height(),
            selection
        );
        Ok(())
    }
}
