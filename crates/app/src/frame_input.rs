//! Keyboard and pointer collection for one rendered frame.

use app::app_loop::{HELD_KEYS, PRESSED_KEYS};
use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed, mouse_position};
use maze_core::Point;

#[derive(Default)]
pub struct FrameInput {
    pub keys_down: Vec<KeyCode>,
    pub keys_pressed: Vec<KeyCode>,
    pub cursor: Option<Point>,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_down = HELD_KEYS.into_iter().filter(|key| is_key_down(*key)).collect();
    let keys_pressed = PRESSED_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect();

    // Window coordinates map one-to-one onto the top-down play area.
    let (mouse_x, mouse_y) = mouse_position();
    let cursor = Some(Point::new(f64::from(mouse_x), f64::from(mouse_y)));

    FrameInput { keys_down, keys_pressed, cursor }
}
