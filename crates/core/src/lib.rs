pub mod config;
pub mod input;
pub mod maze;
pub mod raycast;
pub mod render;
pub mod state;
pub mod types;
pub mod viewer;

pub use config::{ConfigError, SimConfig};
pub use input::InputSnapshot;
pub use maze::{Grid, MazeGenerator, MazeStats, extract_wall_segments, generate_maze};
pub use raycast::{RayHit, nearest_hit};
pub use render::{FrameOutput, RenderMode, StripDraw};
pub use state::Simulation;
pub use types::*;
pub use viewer::{MoveOutcome, Viewer};
