pub mod app_loop;
pub mod config_file;
pub mod seed;

use maze_core::Simulation;

pub const APP_NAME: &str = "Ray Maze";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a maze fingerprint as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_fingerprint(fingerprint: u64) -> String {
    format!("0x{fingerprint:016x}")
}

/// One-line summary shown above the first-person panel.
pub fn status_line(sim: &Simulation) -> String {
    format!(
        "[Space] mode: {}  seed: {}  maze: {}  wall height: {}",
        sim.mode().label(),
        format_seed(sim.seed()),
        format_fingerprint(sim.grid().fingerprint()),
        sim.wall_height()
    )
}
