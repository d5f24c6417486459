use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use maze_core::{
    MazeStats, Point, RenderMode, Segment, SimConfig, Simulation, StripDraw, extract_wall_segments,
    generate_maze,
};
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about = "Headless maze and ray-cast inspection", long_about = None)]
struct Args {
    /// TOML config overriding the built-in defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Carve a maze and print it
    Generate {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
        format: OutputFormat,
    },
    /// Print structural statistics and the fingerprint of a maze
    Stats {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
    },
    /// Render one first-person frame as text
    Frame {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long)]
        x: Option<f64>,
        #[arg(short, long)]
        y: Option<f64>,
        /// Heading in degrees, 0 facing +x and increasing clockwise
        #[arg(long, default_value_t = 0.0)]
        heading: f64,
        #[arg(long, default_value_t = 80)]
        columns: usize,
        #[arg(long, default_value_t = 24)]
        rows: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

#[derive(Serialize)]
struct MazeReport<'a> {
    seed: u64,
    width: usize,
    height: usize,
    fingerprint: String,
    stats: MazeStats,
    walls: &'a [Segment],
}

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = SimConfig::from_toml(&text)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    log::info!("loaded config from {}", path.display());
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Generate { seed, format } => {
            log::info!("generating maze for seed {seed}");
            let grid = generate_maze(seed, config.grid_width(), config.grid_height());
            match format {
                OutputFormat::Ascii => print!("{}", grid.to_ascii()),
                OutputFormat::Json => {
                    let walls = extract_wall_segments(&grid, f64::from(config.cell_size));
                    let report = MazeReport {
                        seed,
                        width: grid.width(),
                        height: grid.height(),
                        fingerprint: format!("0x{:016x}", grid.fingerprint()),
                        stats: MazeStats::collect(&grid),
                        walls: &walls,
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }
        Command::Stats { seed } => {
            let grid = generate_maze(seed, config.grid_width(), config.grid_height());
            let stats = MazeStats::collect(&grid);
            println!("Seed: {seed}");
            println!("Size: {}x{}", grid.width(), grid.height());
            println!("Fingerprint: 0x{:016x}", grid.fingerprint());
            println!("Passages: {}", stats.passages);
            println!("Dead ends: {}", stats.dead_ends);
            println!("Reachable: {}/{}", stats.reachable, stats.cells);
            println!("Perfect: {}", stats.is_perfect());
        }
        Command::Frame { seed, x, y, heading, columns, rows } => {
            let start = Point::new(x.unwrap_or(config.start_x), y.unwrap_or(config.start_y));
            log::info!(
                "rendering seed {seed} from ({:.2}, {:.2}) heading {heading}°",
                start.x,
                start.y
            );
            let view_rays = config.view_ray_count as usize;
            let max_height = config.max_strip_height;
            let center_y = config.view_center_y;

            let mut sim = Simulation::new(seed, config).context("Cannot build simulation")?;
            sim.set_mode(RenderMode::Render);
            sim.place_viewer(start, heading.to_radians());
            let frame = sim.render();
            log::debug!("{} of {view_rays} columns hit a wall", frame.strips.len());
            print!("{}", strips_to_text(&frame.strips, view_rays, center_y, max_height, columns, rows));
        }
    }
    Ok(())
}

const SHADE_RAMP: &[u8] = b" .:-=+*#%@";

/// Downsamples the first-person strips into a character grid. Brighter
/// strips use denser glyphs.
fn strips_to_text(
    strips: &[StripDraw],
    view_rays: usize,
    center_y: f64,
    max_height: f64,
    columns: usize,
    rows: usize,
) -> String {
    let columns = columns.max(1);
    let rows = rows.max(1);
    let mut canvas = vec![vec![b' '; columns]; rows];
    let top = center_y - max_height / 2.0;
    let row_height = max_height / rows as f64;

    for strip in strips {
        let col = strip.column * columns / view_rays.max(1);
        if col >= columns {
            continue;
        }
        let glyph_index = usize::from(strip.intensity) * (SHADE_RAMP.len() - 1) / 255;
        let glyph = SHADE_RAMP[glyph_index.max(1)];
        for (row, line) in canvas.iter_mut().enumerate() {
            let row_mid = top + (row as f64 + 0.5) * row_height;
            if row_mid >= strip.y && row_mid <= strip.y + strip.height {
                line[col] = glyph;
            }
        }
    }

    let mut out = String::with_capacity((columns + 1) * rows);
    for line in canvas {
        out.extend(line.into_iter().map(char::from));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn strip(column: usize, height: f64, intensity: u8) -> StripDraw {
        StripDraw { column, x: column as f64, y: 250.0 - height / 2.0, width: 1.0, height, intensity }
    }

    #[test]
    fn full_height_bright_strip_fills_its_column() {
        let text = strips_to_text(&[strip(0, 500.0, 240)], 4, 250.0, 500.0, 4, 5);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|line| line.starts_with('%')));
        assert!(lines.iter().all(|line| line[1..].trim().is_empty()));
    }

    #[test]
    fn short_strip_only_covers_middle_rows() {
        let text = strips_to_text(&[strip(2, 100.0, 120)], 4, 250.0, 500.0, 4, 5);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].as_bytes()[2], b' ');
        assert_ne!(lines[2].as_bytes()[2], b' ');
        assert_eq!(lines[4].as_bytes()[2], b' ');
    }

    #[test]
    fn config_file_is_parsed_and_validated() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("maze.toml");
        fs::write(&path, "cell_size = 50\n").expect("write");
        assert_eq!(load_config(Some(&path)).expect("valid file").grid_width(), 10);

        fs::write(&path, "field_of_view_degrees = 270.0\n").expect("write");
        let err = load_config(Some(&path)).expect_err("too wide");
        assert!(format!("{err:#}").contains("below 180"), "unexpected error: {err:#}");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        assert!(load_config(Some(Path::new("/definitely/not/here.toml"))).is_err());
        assert_eq!(load_config(None).expect("defaults"), SimConfig::default());
    }
}
