//! Perfect-maze generation split into grid storage, carving, wall extraction, and stats.

mod generator;
mod grid;
mod stats;
mod walls;

pub use generator::MazeGenerator;
pub use grid::{Cell, Grid};
pub use stats::MazeStats;
pub use walls::{BOUNDARY_OVERHANG, extract_wall_segments};

pub fn generate_maze(seed: u64, width: usize, height: usize) -> Grid {
    let grid = MazeGenerator::new(seed).generate(width, height);
    let stats = MazeStats::collect(&grid);
    log::info!(
        "generated {width}x{height} maze seed={seed} passages={} dead_ends={} fingerprint=0x{:016x}",
        stats.passages,
        stats.dead_ends,
        grid.fingerprint()
    );
    grid
}
