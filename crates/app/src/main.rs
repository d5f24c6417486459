mod frame_input;
mod scene_draw;
mod window_config;

use std::env;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use app::app_loop::AppState;
use app::format_fingerprint;
use app::seed::{SeedChoice, generate_runtime_seed, resolve_launch_options};
use macroquad::prelude::*;
use maze_core::{SimConfig, Simulation};

use crate::frame_input::capture_frame_input;
use crate::scene_draw::draw_scene;
use crate::window_config::{build_window_conf, launch_config};

static LAUNCH_CONFIG: OnceLock<SimConfig> = OnceLock::new();

/// Runs before `main`, so logging starts here.
fn window_conf() -> Conf {
    let _ = env_logger::try_init();
    build_window_conf(LAUNCH_CONFIG.get_or_init(launch_config))
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        log::error!("{err:#}");
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let launch = resolve_launch_options(&args, generate_runtime_seed())
        .map_err(anyhow::Error::msg)
        .context("invalid command line")?;
    let config = LAUNCH_CONFIG.get_or_init(launch_config).clone();
    let seed = launch.seed.value();

    let mut sim = Simulation::new(seed, config).context("cannot start simulation")?;
    let source = match launch.seed {
        SeedChoice::Cli(_) => "command line",
        SeedChoice::Generated(_) => "generated",
    };
    log::info!(
        "seed {seed} ({source}), maze {}",
        format_fingerprint(sim.grid().fingerprint())
    );

    let mut app = AppState::new();
    app.last_frame = sim.render();
    loop {
        let input = capture_frame_input();
        app.tick(&mut sim, &input.keys_down, &input.keys_pressed, input.cursor);
        if !app.is_running() {
            break;
        }

        clear_background(BLACK);
        draw_scene(&sim, &app.last_frame);
        next_frame().await
    }
    Ok(())
}
