//! Conversion of a carved grid into world-space wall segments.

use crate::types::{CellPos, Direction, Segment};

use super::grid::Grid;

/// How far the closing boundary segments reach past the play-area corner.
pub const BOUNDARY_OVERHANG: f64 = 1.0;

/// Emits each cell's up and left walls when present, then the right and bottom
/// boundary of the grid. A down or right wall always equals the up or left wall
/// of the next cell, so no edge is emitted twice.
///
/// Segments are ordered row by row, up before left, boundaries last.
pub fn extract_wall_segments(grid: &Grid, cell_size: f64) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(grid.len() * 2 + 2);
    for pos in grid.positions() {
        let CellPos { x, y } = pos;
        let left = x as f64 * cell_size;
        let top = y as f64 * cell_size;
        if grid.has_wall(pos, Direction::Up) {
            segments.push(Segment::new(left, top, left + cell_size, top));
        }
        if grid.has_wall(pos, Direction::Left) {
            segments.push(Segment::new(left, top, left, top + cell_size));
        }
    }
    segments.extend(boundary_segments(grid, cell_size));
    segments
}

fn boundary_segments(grid: &Grid, cell_size: f64) -> [Segment; 2] {
    let right = grid.width() as f64 * cell_size;
    let bottom = grid.height() as f64 * cell_size;
    [
        Segment::new(right, -BOUNDARY_OVERHANG, right, bottom),
        Segment::new(-BOUNDARY_OVERHANG, bottom, right, bottom),
    ]
}
