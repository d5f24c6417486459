//! Per-frame input handed over by the platform layer.

use crate::types::Point;

/// Held-key state for one frame plus edge-triggered events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    /// Set on the frame the mode-toggle key goes down.
    pub toggle_mode: bool,
    /// Pointer position in world space, when the pointer is available.
    pub cursor: Option<Point>,
    /// Net wall-height change requested this frame.
    pub wall_height_delta: i32,
}

impl InputSnapshot {
    pub fn is_moving(&self) -> bool {
        self.forward || self.back || self.strafe_left || self.strafe_right
    }

    pub fn with_cursor(mut self, cursor: Point) -> Self {
        self.cursor = Some(cursor);
        self
    }
}
