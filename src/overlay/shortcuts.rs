//! Global shortcut keys (pressed together with Cmd+Ctrl+Alt) mapped to modes

use crate::overlay::transform::{HighlightMatch, ProcessingMode};

/// Keys the overlay reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(u8),
    Space,
    Up,
    Down,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    SetMode(ProcessingMode),
    PreviousMode,
    NextMode,
}

impl ShortcutAction {
    /// Mode that results from applying this action while in `current`.
    pub fn resolve(&self, current: ProcessingMode) -> ProcessingMode {
        match self {
            ShortcutAction::SetMode(mode) => *mode,
            ShortcutAction::PreviousMode => current.previous(),
            ShortcutAction::NextMode => current.next(),
        }
    }
}

pub fn shortcut_for(key: Key) -> Option<ShortcutAction> {
    let action = match key {
        Key::Digit(0) => ShortcutAction::SetMode(ProcessingMode::None),
        Key::Digit(1) => ShortcutAction::SetMode(ProcessingMode::DaltonizeCorrection),
        Key::Digit(2) => ShortcutAction::SetMode(ProcessingMode::SwapChannels),
        Key::Digit(3) => ShortcutAction::SetMode(ProcessingMode::SwapAndFlipChannels),
        Key::Digit(4) => ShortcutAction::SetMode(ProcessingMode::InvertLightness),
        Key::Digit(8) => ShortcutAction::SetMode(ProcessingMode::HighlightColorUnderCursor(
            HighlightMatch::Fuzzy,
        )),
        Key::Digit(9) => ShortcutAction::SetMode(ProcessingMode::HighlightColorUnderCursor(
            HighlightMatch::Exact,
        )),
        Key::Space => ShortcutAction::SetMode(ProcessingMode::GrabScreenRegion),
        Key::Up => ShortcutAction::PreviousMode,
        Key::Down => ShortcutAction::NextMode,
        Key::Digit(_) | Key::Escape => return None,
    };
    Some(action)
}
