//! Cell storage and wall bookkeeping for a rectangular maze.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::types::{CellPos, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    walls: [bool; 4],
    visited: bool,
}

impl Cell {
    const SEALED: Cell = Cell { walls: [true; 4], visited: false };

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn open_sides(&self) -> usize {
        self.walls.iter().filter(|wall| !**wall).count()
    }

    fn wall_bits(&self) -> u8 {
        Direction::ALL
            .iter()
            .enumerate()
            .fold(0_u8, |bits, (shift, direction)| {
                bits | (u8::from(self.has_wall(*direction)) << shift)
            })
    }
}

/// Row-major grid of cells. Every cell starts sealed and unvisited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![Cell::SEALED; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, pos: CellPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn cell(&self, pos: CellPos) -> Option<&Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(&self.cells[self.index(pos)])
    }

    /// Row-major iteration over every position in the grid.
    pub fn positions(&self) -> impl Iterator<Item = CellPos> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| CellPos::new(x, y)))
    }

    /// The adjacent position in `direction`, or `None` when it would leave the grid.
    pub fn neighbor(&self, pos: CellPos, direction: Direction) -> Option<CellPos> {
        let next = match direction {
            Direction::Up => CellPos::new(pos.x, pos.y.checked_sub(1)?),
            Direction::Down => CellPos::new(pos.x, pos.y + 1),
            Direction::Left => CellPos::new(pos.x.checked_sub(1)?, pos.y),
            Direction::Right => CellPos::new(pos.x + 1, pos.y),
        };
        self.in_bounds(next).then_some(next)
    }

    /// Out-of-bounds positions report every wall as present.
    pub fn has_wall(&self, pos: CellPos, direction: Direction) -> bool {
        self.cell(pos).is_none_or(|cell| cell.has_wall(direction))
    }

    pub fn is_open(&self, pos: CellPos, direction: Direction) -> bool {
        !self.has_wall(pos, direction) && self.neighbor(pos, direction).is_some()
    }

    /// Clears the wall on both sides of the shared edge. Callers must only
    /// pass edges that have a neighbour inside the grid.
    pub fn remove_wall_between(&mut self, pos: CellPos, direction: Direction) {
        let Some(next) = self.neighbor(pos, direction) else {
            debug_assert!(false, "no neighbour {direction:?} of {pos:?}");
            return;
        };
        let here = self.index(pos);
        let there = self.index(next);
        self.cells[here].walls[direction.index()] = false;
        self.cells[there].walls[direction.opposite().index()] = false;
    }

    pub(super) fn mark_visited(&mut self, pos: CellPos) {
        debug_assert!(self.in_bounds(pos), "visited out of bounds: {pos:?}");
        let idx = self.index(pos);
        self.cells[idx].visited = true;
    }

    pub(super) fn is_visited(&self, pos: CellPos) -> bool {
        self.cell(pos).is_some_and(Cell::is_visited)
    }

    /// Stable identity of the carved layout; equal seeds and sizes give equal values.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.width as u64);
        hasher.write_u64(self.height as u64);
        for cell in &self.cells {
            hasher.write_u8(cell.wall_bits());
        }
        hasher.finish()
    }

    /// Box-drawing rendition using `+`, `--`, and `|`, one text row per wall row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width * 3 + 2) * (self.height * 2 + 1));
        for y in 0..self.height {
            for x in 0..self.width {
                out.push('+');
                let up = self.has_wall(CellPos::new(x, y), Direction::Up);
                out.push_str(if up { "--" } else { "  " });
            }
            out.push_str("+\n");
            for x in 0..self.width {
                let left = self.has_wall(CellPos::new(x, y), Direction::Left);
                out.push(if left { '|' } else { ' ' });
                out.push_str("  ");
            }
            let right_edge = CellPos::new(self.width.saturating_sub(1), y);
            out.push(if self.has_wall(right_edge, Direction::Right) { '|' } else { ' ' });
            out.push('\n');
        }
        for x in 0..self.width {
            out.push('+');
            let bottom = CellPos::new(x, self.height.saturating_sub(1));
            out.push_str(if self.has_wall(bottom, Direction::Down) { "--" } else { "  " });
        }
        out.push_str("+\n");
        out
    }

    pub(super) fn index(&self, pos: CellPos) -> usize {
        pos.y * self.width + pos.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_sealed_and_unvisited() {
        let grid = Grid::new(3, 2);
        assert_eq!(grid.len(), 6);
        for pos in grid.positions() {
            let cell = grid.cell(pos).expect("position should be in bounds");
            assert!(!cell.is_visited());
            for direction in Direction::ALL {
                assert!(cell.has_wall(direction));
            }
        }
    }

    #[test]
    fn neighbor_never_leaves_the_grid() {
        let grid = Grid::new(2, 2);
        assert_eq!(grid.neighbor(CellPos::ORIGIN, Direction::Up), None);
        assert_eq!(grid.neighbor(CellPos::ORIGIN, Direction::Left), None);
        assert_eq!(grid.neighbor(CellPos::new(1, 1), Direction::Down), None);
        assert_eq!(grid.neighbor(CellPos::new(1, 1), Direction::Right), None);
        assert_eq!(grid.neighbor(CellPos::ORIGIN, Direction::Right), Some(CellPos::new(1, 0)));
    }

    #[test]
    fn removing_a_wall_clears_both_sides() {
        let mut grid = Grid::new(2, 2);
        grid.remove_wall_between(CellPos::new(0, 1), Direction::Up);

        assert!(!grid.has_wall(CellPos::new(0, 1), Direction::Up));
        assert!(!grid.has_wall(CellPos::new(0, 0), Direction::Down));
        assert!(grid.has_wall(CellPos::new(0, 0), Direction::Right));
        assert!(grid.is_open(CellPos::ORIGIN, Direction::Down));
    }

    #[test]
    fn out_of_bounds_lookups_are_walls() {
        let grid = Grid::new(1, 1);
        assert!(grid.cell(CellPos::new(1, 0)).is_none());
        assert!(grid.has_wall(CellPos::new(4, 4), Direction::Left));
    }

    #[test]
    fn fingerprint_tracks_wall_changes() {
        let sealed = Grid::new(3, 3);
        let mut carved = sealed.clone();
        carved.remove_wall_between(CellPos::new(1, 1), Direction::Right);

        assert_eq!(sealed.fingerprint(), Grid::new(3, 3).fingerprint());
        assert_ne!(sealed.fingerprint(), carved.fingerprint());
        assert_ne!(Grid::new(2, 3).fingerprint(), Grid::new(3, 2).fingerprint());
    }

    #[test]
    fn ascii_shows_removed_walls() {
        let mut grid = Grid::new(2, 1);
        grid.remove_wall_between(CellPos::ORIGIN, Direction::Right);
        assert_eq!(grid.to_ascii(), "+--+--+\n|     |\n+--+--+\n");
    }
}
