//! Structural summary of a carved grid.

use std::collections::VecDeque;

use serde::Serialize;

use crate::types::{CellPos, Direction};

use super::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MazeStats {
    pub cells: usize,
    /// Open edges between adjacent cells, each counted once.
    pub passages: usize,
    /// Cells with exactly one open side.
    pub dead_ends: usize,
    /// Cells reachable from the top-left cell through open passages.
    pub reachable: usize,
}

impl MazeStats {
    pub fn collect(grid: &Grid) -> Self {
        let mut passages = 0;
        let mut dead_ends = 0;
        for pos in grid.positions() {
            passages += usize::from(grid.is_open(pos, Direction::Right));
            passages += usize::from(grid.is_open(pos, Direction::Down));
            let open = Direction::ALL.iter().filter(|direction| grid.is_open(pos, **direction));
            if open.count() == 1 {
                dead_ends += 1;
            }
        }
        Self { cells: grid.len(), passages, dead_ends, reachable: reachable_from_origin(grid) }
    }

    /// Connected and acyclic: every cell reachable with exactly `cells - 1` passages.
    pub fn is_perfect(&self) -> bool {
        self.cells > 0 && self.reachable == self.cells && self.passages == self.cells - 1
    }
}

fn reachable_from_origin(grid: &Grid) -> usize {
    if grid.is_empty() {
        return 0;
    }
    let mut seen = vec![false; grid.len()];
    let mut queue = VecDeque::from([CellPos::ORIGIN]);
    seen[grid.index(CellPos::ORIGIN)] = true;
    let mut count = 0;
    while let Some(pos) = queue.pop_front() {
        count += 1;
        for direction in Direction::ALL {
            if !grid.is_open(pos, direction) {
                continue;
            }
            let Some(next) = grid.neighbor(pos, direction) else {
                continue;
            };
            let idx = grid.index(next);
            if !seen[idx] {
                seen[idx] = true;
                queue.push_back(next);
            }
        }
    }
    count
}
