use crate::config::{ConfigError, SimConfig};
use crate::input::InputSnapshot;
use crate::maze::{Grid, extract_wall_segments, generate_maze};
use crate::render::{FrameOutput, RenderMode, SceneContext, render_scene};
use crate::types::{Point, Segment};
use crate::viewer::{MoveOutcome, Viewer};

/// Everything one running maze owns: the carved grid, its walls, the viewer,
/// and the active view. Built once, then advanced one frame at a time.
pub struct Simulation {
    config: SimConfig,
    seed: u64,
    grid: Grid,
    walls: Vec<Segment>,
    viewer: Viewer,
    mode: RenderMode,
    wall_height: i32,
    frame: u64,
}

impl Simulation {
    pub fn new(seed: u64, config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = generate_maze(seed, config.grid_width(), config.grid_height());
        let walls = extract_wall_segments(&grid, f64::from(config.cell_size));
        let viewer = Viewer::new(Point::new(config.start_x, config.start_y), 0.0);
        let wall_height = config.wall_height;
        Ok(Self {
            config,
            seed,
            grid,
            walls,
            viewer,
            mode: RenderMode::default(),
            wall_height,
            frame: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn walls(&self) -> &[Segment] {
        &self.walls
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn wall_height(&self) -> i32 {
        self.wall_height
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Applies one frame of input, then renders.
    ///
    /// Order: mode toggle and wall height, position (pointer in top-down modes,
    /// collision-checked movement in render mode), clamp into the play area,
    /// turning, and finally ray casting.
    pub fn step(&mut self, input: &InputSnapshot) -> FrameOutput {
        self.frame += 1;
        if input.toggle_mode {
            self.mode = self.mode.next();
            log::debug!("mode -> {}", self.mode.label());
        }
        if input.wall_height_delta != 0 {
            self.wall_height = self.wall_height.saturating_add(input.wall_height_delta).max(1);
            log::debug!("wall height -> {}", self.wall_height);
        }

        if self.mode.follows_cursor() {
            if let Some(cursor) = input.cursor {
                self.viewer.follow_cursor(cursor);
            }
        } else {
            let outcome =
                self.viewer.move_with_collision(input, self.config.move_speed, &self.walls);
            if outcome == MoveOutcome::Blocked {
                log::trace!(
                    "frame {} move from {:?} rejected by wall",
                    self.frame,
                    self.viewer.position()
                );
            }
        }

        self.viewer.clamp_to_area(
            f64::from(self.config.play_area_width),
            f64::from(self.config.play_area_height),
            self.config.edge_margin,
        );
        self.viewer.apply_turn(input, self.config.turn_step_radians());

        self.render()
    }

    /// Renders the current state without advancing it.
    pub fn render(&self) -> FrameOutput {
        render_scene(&SceneContext {
            config: &self.config,
            walls: &self.walls,
            mode: self.mode,
            origin: self.viewer.position(),
            heading: self.viewer.heading(),
            wall_height: self.wall_height,
        })
    }

    /// Places the viewer directly, bypassing collision. Used for headless frames.
    pub fn place_viewer(&mut self, position: Point, heading: f64) {
        self.viewer = Viewer::new(position, heading);
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }
}
