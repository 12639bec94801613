//! Region-grab selection state machine
//!
//! `Idle -> Dragging -> Provisional -> Finalized -> (consumed) -> Idle`.
//! Corners are kept as given, in window coordinates; they are only ordered
//! when the rectangle is read for display or consumed.

use crate::overlay::frame::ImageRect;
use crate::overlay::transform::ProcessingMode;

/// A position in window coordinates (points, not pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Normalized rectangle in window coordinates, `min <= max` on both axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowRect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl WindowRect {
    pub fn normalized(a: Point, b: Point) -> Self {
        Self {
            x_min: a.x.min(b.x),
            y_min: a.y.min(b.y),
            x_max: a.x.max(b.x),
            y_max: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Scales to image pixels, rounding outwards, and clamps to the frame.
    /// The result may be empty if the rectangle is degenerate or off-frame.
    pub fn to_image_rect(&self, scale: f32, frame_width: usize, frame_height: usize) -> ImageRect {
        let clamp = |v: f32, max: usize| -> usize {
            if v.is_nan() { 0 } else { v.clamp(0.0, max as f32) as usize }
        };
        let x0 = clamp((self.x_min * scale).floor(), frame_width);
        let y0 = clamp((self.y_min * scale).floor(), frame_height);
        let x1 = clamp((self.x_max * scale).ceil(), frame_width);
        let y1 = clamp((self.y_max * scale).ceil(), frame_height);
        ImageRect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    /// Button down, the pointer has not moved yet
    Dragging,
    /// Button down with a second corner
    Provisional,
    /// Button released, waiting for the pipeline to consume it
    Finalized,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RegionSelection {
    state: SelectionState,
    start: Point,
    end: Point,
}

impl RegionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SelectionState::Dragging | SelectionState::Provisional)
    }

    pub fn has_provisional(&self) -> bool {
        self.state == SelectionState::Provisional
    }

    pub fn is_finalized(&self) -> bool {
        self.state == SelectionState::Finalized
    }

    /// Starts (or restarts) a drag. Only honoured in `GrabScreenRegion` and
    /// ignored while a finalized rectangle is pending.
    pub fn press(&mut self, point: Point, mode: ProcessingMode) -> bool {
        if mode != ProcessingMode::GrabScreenRegion || self.is_finalized() {
            return false;
        }
        self.state = SelectionState::Dragging;
        self.start = point;
        self.end = point;
        true
    }

    pub fn drag_to(&mut self, point: Point) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.state = SelectionState::Provisional;
        self.end = point;
        true
    }

    pub fn release(&mut self, point: Point) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.state = SelectionState::Finalized;
        self.end = point;
        true
    }

    /// Rectangle to draw while grabbing: the provisional or finalized one.
    pub fn current_rect(&self) -> Option<WindowRect> {
        match self.state {
            SelectionState::Provisional | SelectionState::Finalized => {
                Some(WindowRect::normalized(self.start, self.end))
            }
            SelectionState::Idle | SelectionState::Dragging => None,
        }
    }

    /// Hands out the finalized rectangle once and returns to `Idle`.
    pub fn consume(&mut self) -> Option<WindowRect> {
        if !self.is_finalized() {
            return None;
        }
        let rect = WindowRect::normalized(self.start, self.end);
        self.cancel();
        Some(rect)
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAB: ProcessingMode = ProcessingMode::GrabScreenRegion;

    fn expected_rect() -> WindowRect {
        WindowRect { x_min: 10.0, y_min: 10.0, x_max: 50.0, y_max: 80.0 }
    }

    #[test]
    fn test_drag_normalizes_on_consume() {
        let mut selection = RegionSelection::new();
        assert!(selection.press(Point::new(10.0, 10.0), GRAB));
        assert!(selection.drag_to(Point::new(50.0, 80.0)));
        assert!(selection.has_provisional());
        assert!(selection.release(Point::new(50.0, 80.0)));
        assert!(selection.is_finalized());

        assert_eq!(selection.consume(), Some(expected_rect()));
    }

    #[test]
    fn test_reverse_drag_normalizes_the_same() {
        let mut selection = RegionSelection::new();
        selection.press(Point::new(50.0, 80.0), GRAB);
        selection.drag_to(Point::new(10.0, 10.0));
        selection.release(Point::new(10.0, 10.0));

        assert_eq!(selection.consume(), Some(expected_rect()));
    }

    #[test]
    fn test_consume_happens_exactly_once() {
        let mut selection = RegionSelection::new();
        selection.press(Point::new(1.0, 2.0), GRAB);
        selection.release(Point::new(3.0, 4.0));

        assert!(selection.consume().is_some());
        assert_eq!(selection.consume(), None);
        assert_eq!(selection.state(), SelectionState::Idle);
    }

    #[test]
    fn test_cancel_while_dragging_resets() {
        let mut selection = RegionSelection::new();
        selection.press(Point::new(10.0, 10.0), GRAB);
        selection.drag_to(Point::new(30.0, 30.0));
        selection.cancel();

        assert_eq!(selection.state(), SelectionState::Idle);
        assert_eq!(selection.current_rect(), None);

        // Next press starts fresh from the new point
        selection.press(Point::new(100.0, 100.0), GRAB);
        selection.drag_to(Point::new(120.0, 110.0));
        assert_eq!(
            selection.current_rect(),
            Some(WindowRect { x_min: 100.0, y_min: 100.0, x_max: 120.0, y_max: 110.0 })
        );
    }

    #[test]
    fn test_press_outside_grab_mode_is_ignored() {
        let mut selection = RegionSelection::new();
        assert!(!selection.press(Point::new(1.0, 1.0), ProcessingMode::DaltonizeCorrection));
        assert!(!selection.drag_to(Point::new(5.0, 5.0)));
        assert!(!selection.release(Point::new(5.0, 5.0)));
        assert_eq!(selection.state(), SelectionState::Idle);
    }

    #[test]
    fn test_press_while_finalized_is_ignored() {
        let mut selection = RegionSelection::new();
        selection.press(Point::new(10.0, 10.0), GRAB);
        selection.release(Point::new(50.0, 80.0));

        assert!(!selection.press(Point::new(0.0, 0.0), GRAB));
        assert_eq!(selection.consume(), Some(expected_rect()));
    }

    #[test]
    fn test_press_while_dragging_restarts() {
        let mut selection = RegionSelection::new();
        selection.press(Point::new(0.0, 0.0), GRAB);
        selection.drag_to(Point::new(5.0, 5.0));
        assert!(selection.press(Point::new(10.0, 10.0), GRAB));
        assert_eq!(selection.state(), SelectionState::Dragging);
        selection.release(Point::new(50.0, 80.0));
        assert_eq!(selection.consume(), Some(expected_rect()));
    }

    #[test]
    fn test_to_image_rect_scales_and_clamps() {
        let rect = WindowRect { x_min: 10.2, y_min: 10.0, x_max: 50.5, y_max: 80.0 };
        assert_eq!(rect.to_image_rect(2.0, 1000, 1000), ImageRect::new(20, 20, 81, 140));
        assert_eq!(rect.to_image_rect(1.0, 30, 40), ImageRect::new(10, 10, 20, 30));

        let off_frame = WindowRect { x_min: 500.0, y_min: 500.0, x_max: 600.0, y_max: 600.0 };
        assert!(off_frame.to_image_rect(1.0, 100, 100).is_empty());
    }
}
