//! Draws the simulation's line and strip commands with macroquad.

use app::status_line;
use macroquad::prelude::*;
use maze_core::{FrameOutput, Segment, Simulation, StripDraw};

const LINE_COLOR: Color = WHITE;
const LINE_THICKNESS: f32 = 1.0;
const STATUS_FONT_SIZE: f32 = 16.0;

pub fn draw_scene(sim: &Simulation, frame: &FrameOutput) {
    for strip in &frame.strips {
        draw_strip(strip);
    }
    for line in frame.line_draws(sim.walls()) {
        draw_segment(line);
    }
    let config = sim.config();
    draw_text(
        &status_line(sim),
        config.view_panel_x as f32 + 6.0,
        STATUS_FONT_SIZE,
        STATUS_FONT_SIZE,
        YELLOW,
    );
}

fn draw_segment(segment: &Segment) {
    draw_line(
        segment.start.x as f32,
        segment.start.y as f32,
        segment.end.x as f32,
        segment.end.y as f32,
        LINE_THICKNESS,
        LINE_COLOR,
    );
}

fn draw_strip(strip: &StripDraw) {
    let level = strip.intensity;
    draw_rectangle(
        strip.x as f32,
        strip.y as f32,
        strip.width as f32,
        strip.height as f32,
        Color::from_rgba(level, level, level, 255),
    );
}
