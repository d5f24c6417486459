//! Per-frame scene rendering into backend-neutral draw commands.

mod fan;
mod projection;

pub use fan::{ViewColumn, cast_full_circle, cast_view_fan, full_circle_angles, view_offsets};
pub use projection::{Projection, corrected_distance, shade, strip_height};

use crate::config::SimConfig;
use crate::types::{Point, Segment};

/// Which view the frame shows. Cycles visualize -> render -> full-visualize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Top-down, viewer pinned to the pointer.
    #[default]
    Visualize,
    /// First-person play with keyboard movement and collision.
    Render,
    /// Top-down with a 360° ray sweep from the pointer.
    FullVisualize,
}

impl RenderMode {
    pub fn next(self) -> RenderMode {
        match self {
            RenderMode::Visualize => RenderMode::Render,
            RenderMode::Render => RenderMode::FullVisualize,
            RenderMode::FullVisualize => RenderMode::Visualize,
        }
    }

    pub fn follows_cursor(self) -> bool {
        matches!(self, RenderMode::Visualize | RenderMode::FullVisualize)
    }

    pub fn label(self) -> &'static str {
        match self {
            RenderMode::Visualize => "visualize",
            RenderMode::Render => "render",
            RenderMode::FullVisualize => "full visualize",
        }
    }
}

/// A filled one-column rectangle of the first-person view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripDraw {
    pub column: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub intensity: u8,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutput {
    /// Top-down ray lines from the viewer to each hit.
    pub rays: Vec<Segment>,
    pub strips: Vec<StripDraw>,
}

impl FrameOutput {
    /// Every top-down line to draw this frame: walls first, then rays.
    pub fn line_draws<'a>(&'a self, walls: &'a [Segment]) -> impl Iterator<Item = &'a Segment> {
        walls.iter().chain(self.rays.iter())
    }
}

pub struct SceneContext<'a> {
    pub config: &'a SimConfig,
    pub walls: &'a [Segment],
    pub mode: RenderMode,
    pub origin: Point,
    pub heading: f64,
    pub wall_height: i32,
}

/// Casts the rays `mode` calls for and converts first-person hits into strips.
///
/// The field-of-view fan is cast in every mode, so top-down modes still show
/// what the viewer would see. Hits with no positive distance along the view
/// direction produce no strip.
pub fn render_scene(ctx: &SceneContext<'_>) -> FrameOutput {
    let config = ctx.config;
    let mut rays = Vec::new();
    if ctx.mode == RenderMode::FullVisualize {
        rays = cast_full_circle(ctx.origin, config.full_ray_count, config.ray_length, ctx.walls);
    }

    let columns = cast_view_fan(
        ctx.origin,
        ctx.heading,
        config.view_ray_count,
        config.field_of_view_radians(),
        config.ray_length,
        ctx.walls,
    );
    rays.extend(
        columns
            .iter()
            .filter_map(|column| column.hit)
            .map(|hit| Segment { start: ctx.origin, end: hit.point }),
    );

    let projection = Projection::from_config(config, ctx.wall_height);
    let strips = columns
        .iter()
        .filter_map(|column| {
            let corrected = column.corrected_distance().filter(|distance| *distance > 0.0)?;
            Some(strip_for(config, &projection, column.column, corrected))
        })
        .collect();

    FrameOutput { rays, strips }
}

fn strip_for(
    config: &SimConfig,
    projection: &Projection,
    column: usize,
    corrected: f64,
) -> StripDraw {
    let height = projection.strip_height(corrected);
    StripDraw {
        column,
        x: config.view_panel_x + column as f64,
        y: config.view_center_y - height / 2.0,
        width: 1.0,
        height,
        intensity: projection.shade(corrected),
    }
}
