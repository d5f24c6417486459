//! Randomized depth-first carving (recursive backtracker) over a sealed grid.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

use crate::types::{CellPos, Direction};

use super::grid::Grid;

pub struct MazeGenerator {
    rng: ChaCha8Rng,
}

impl MazeGenerator {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Builds a `width` x `height` grid and carves it from the top-left cell.
    pub fn generate(&mut self, width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height);
        self.carve(&mut grid, CellPos::ORIGIN);
        grid
    }

    /// Carves passages starting at `start` until every reachable cell is visited.
    ///
    /// Uses an explicit stack instead of recursion. The top frame re-collects its
    /// unvisited neighbours each time it is resumed, so the sequence of random
    /// draws matches the recursive formulation exactly.
    pub fn carve(&mut self, grid: &mut Grid, start: CellPos) {
        if !grid.in_bounds(start) {
            return;
        }
        grid.mark_visited(start);
        let mut stack = vec![start];
        let mut candidates = Vec::with_capacity(Direction::ALL.len());

        while let Some(&current) = stack.last() {
            collect_unvisited_neighbors(grid, current, &mut candidates);
            if candidates.is_empty() {
                stack.pop();
                continue;
            }
            let (direction, next) = candidates[self.pick_index(candidates.len())];
            grid.remove_wall_between(current, direction);
            grid.mark_visited(next);
            stack.push(next);
        }
    }

    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.rng.next_u64() as usize % len
    }
}

/// Neighbours are bounds-checked before they become candidates.
pub(super) fn collect_unvisited_neighbors(
    grid: &Grid,
    pos: CellPos,
    out: &mut Vec<(Direction, CellPos)>,
) {
    out.clear();
    for direction in Direction::ALL {
        if let Some(next) = grid.neighbor(pos, direction)
            && !grid.is_visited(next)
        {
            out.push((direction, next));
        }
    }
}
