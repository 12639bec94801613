//! The overlay's view-model: active mode, blindness type and region selection
//!
//! Event handlers and the capture pipeline both receive the session by
//! `&mut`, so there is no shared global state to synchronize.

use tracing::info;

use crate::overlay::color::BlindnessType;
use crate::overlay::selection::{Point, RegionSelection};
use crate::overlay::shortcuts::{Key, shortcut_for};
use crate::overlay::transform::ProcessingMode;

#[derive(Debug, Clone, Default)]
pub struct Session {
    mode: ProcessingMode,
    blindness: BlindnessType,
    selection: RegionSelection,
}

impl Session {
    pub fn new(mode: ProcessingMode, blindness: BlindnessType) -> Self {
        Self {
            mode,
            blindness,
            selection: RegionSelection::new(),
        }
    }

    pub fn mode(&self) -> ProcessingMode {
        self.mode
    }

    /// Switching mode always discards the region selection.
    pub fn set_mode(&mut self, mode: ProcessingMode) {
        if mode != self.mode {
            info!("Processing mode: {} -> {}", self.mode.label(), mode.label());
        }
        self.mode = mode;
        self.selection.cancel();
    }

    pub fn blindness(&self) -> BlindnessType {
        self.blindness
    }

    pub fn set_blindness(&mut self, blindness: BlindnessType) {
        if blindness != self.blindness {
            info!("Blindness type: {}", blindness.label());
        }
        self.blindness = blindness;
    }

    pub fn selection(&self) -> &RegionSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut RegionSelection {
        &mut self.selection
    }

    pub fn pointer_pressed(&mut self, point: Point) -> bool {
        self.selection.press(point, self.mode)
    }

    pub fn pointer_dragged(&mut self, point: Point) -> bool {
        self.selection.drag_to(point)
    }

    pub fn pointer_released(&mut self, point: Point) -> bool {
        self.selection.release(point)
    }

    /// Escape cancels the selection (and leaves the grab mode); any other
    /// key goes through the shortcut table. Returns whether it was handled.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if key == Key::Escape {
            self.selection.cancel();
            if self.mode == ProcessingMode::GrabScreenRegion {
                self.set_mode(ProcessingMode::None);
            }
            return true;
        }
        self.apply_shortcut(key).is_some()
    }

    /// Applies the shortcut bound to `key` and returns the new mode.
    pub fn apply_shortcut(&mut self, key: Key) -> Option<ProcessingMode> {
        let mode = shortcut_for(key)?.resolve(self.mode);
        self.set_mode(mode);
        Some(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::selection::SelectionState;

    #[test]
    fn test_escape_while_dragging_returns_to_idle() {
        let mut session = Session::new(ProcessingMode::GrabScreenRegion, BlindnessType::Deuteranope);
        session.pointer_pressed(Point::new(10.0, 10.0));
        session.pointer_dragged(Point::new(40.0, 40.0));

        assert!(session.handle_key(Key::Escape));
        assert_eq!(session.selection().state(), SelectionState::Idle);
        assert_eq!(session.mode(), ProcessingMode::None);

        // A new grab starts from scratch
        session.apply_shortcut(Key::Space);
        assert!(session.pointer_pressed(Point::new(1.0, 1.0)));
        assert_eq!(session.selection().state(), SelectionState::Dragging);
    }

    #[test]
    fn test_set_mode_resets_selection() {
        let mut session = Session::new(ProcessingMode::GrabScreenRegion, BlindnessType::Protanope);
        session.pointer_pressed(Point::new(0.0, 0.0));
        session.pointer_released(Point::new(5.0, 5.0));
        assert!(session.selection().is_finalized());

        session.set_mode(ProcessingMode::InvertLightness);
        assert_eq!(session.selection().state(), SelectionState::Idle);
    }

    #[test]
    fn test_shortcuts_change_mode() {
        let mut session = Session::default();
        assert_eq!(session.apply_shortcut(Key::Digit(1)), Some(ProcessingMode::DaltonizeCorrection));
        assert_eq!(session.mode(), ProcessingMode::DaltonizeCorrection);
        assert_eq!(session.apply_shortcut(Key::Down), Some(ProcessingMode::SwapChannels));
        assert_eq!(session.apply_shortcut(Key::Digit(7)), None);
        assert_eq!(session.mode(), ProcessingMode::SwapChannels);
    }

    #[test]
    fn test_escape_outside_grab_keeps_mode() {
        let mut session = Session::new(ProcessingMode::DaltonizeCorrection, BlindnessType::Tritanope);
        assert!(session.handle_key(Key::Escape));
        assert_eq!(session.mode(), ProcessingMode::DaltonizeCorrection);
    }
}
