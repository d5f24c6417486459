use maze_core::{FrameOutput, InputSnapshot, Point, Simulation};
use macroquad::prelude::KeyCode;

/// Keys read as held state every frame.
pub const HELD_KEYS: [KeyCode; 6] =
    [KeyCode::Left, KeyCode::Right, KeyCode::W, KeyCode::S, KeyCode::A, KeyCode::D];

/// Keys that only act on the frame they go down.
pub const PRESSED_KEYS: [KeyCode; 4] =
    [KeyCode::Space, KeyCode::Up, KeyCode::Down, KeyCode::Escape];

/// Translates raw key state into the simulation's input snapshot.
pub fn input_snapshot(
    keys_down: &[KeyCode],
    keys_pressed: &[KeyCode],
    cursor: Option<Point>,
) -> InputSnapshot {
    let held = |key| keys_down.contains(&key);
    let pressed = |key| keys_pressed.contains(&key);
    InputSnapshot {
        turn_left: held(KeyCode::Left),
        turn_right: held(KeyCode::Right),
        forward: held(KeyCode::W),
        back: held(KeyCode::S),
        strafe_left: held(KeyCode::A),
        strafe_right: held(KeyCode::D),
        toggle_mode: pressed(KeyCode::Space),
        cursor,
        wall_height_delta: i32::from(pressed(KeyCode::Up)) - i32::from(pressed(KeyCode::Down)),
    }
}

#[derive(Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Running,
    Quit,
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Draw commands produced by the most recent tick.
    pub last_frame: FrameOutput,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.mode == AppMode::Running
    }

    /// Process input and logic for a single frame. Escape ends the loop
    /// without advancing the simulation.
    pub fn tick(
        &mut self,
        sim: &mut Simulation,
        keys_down: &[KeyCode],
        keys_pressed: &[KeyCode],
        cursor: Option<Point>,
    ) {
        match self.mode {
            AppMode::Running => {
                if keys_pressed.contains(&KeyCode::Escape) {
                    log::info!("quit requested after {} frames", sim.frame());
                    self.mode = AppMode::Quit;
                    return;
                }
                let input = input_snapshot(keys_down, keys_pressed, cursor);
                self.last_frame = sim.step(&input);
            }
            AppMode::Quit => {
                // No inputs valid after quitting
            }
        }
    }
}
