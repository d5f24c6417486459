use anyhow::{Result, ensure};
use clap::Parser;
use maze_core::{InputSnapshot, Point, RenderMode, SimConfig, Simulation, raycast::path_blocked};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 10_000)]
    frames: u32,
}

fn random_input(rng: &mut ChaCha8Rng, config: &SimConfig) -> InputSnapshot {
    let bits = rng.next_u64();
    let bit = |n: u32| bits & (1 << n) != 0;
    let cursor = bit(8).then(|| {
        Point::new(
            (rng.next_u64() % u64::from(config.play_area_width)) as f64,
            (rng.next_u64() % u64::from(config.play_area_height)) as f64,
        )
    });
    InputSnapshot {
        turn_left: bit(0),
        turn_right: bit(1),
        forward: bit(2),
        back: bit(3),
        strafe_left: bit(4),
        strafe_right: bit(5),
        // Rare, so render mode runs for long stretches.
        toggle_mode: (bits >> 32) & 0x3f == 0,
        cursor,
        wall_height_delta: match (bits >> 40) & 0x1f {
            0 => 1,
            1 => -1,
            _ => 0,
        },
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for {} frames...", args.seed, args.frames);
    let config = SimConfig { full_ray_count: 120, view_ray_count: 80, ..Default::default() };
    let max_x = f64::from(config.play_area_width) - config.edge_margin;
    let max_y = f64::from(config.play_area_height) - config.edge_margin;
    let mut sim = Simulation::new(args.seed, config.clone())?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut render_frames = 0u32;

    for index in 0..args.frames {
        if index > 0 && index % 1000 == 0 {
            log::info!("{index} frames, {render_frames} in render mode, mode {}", sim.mode().label());
        }
        let input = random_input(&mut rng, &config);
        let before = sim.viewer().position();
        let was_render = sim.mode() == RenderMode::Render && !input.toggle_mode;
        let frame = sim.step(&input);
        let after = sim.viewer().position();

        if was_render {
            render_frames += 1;
            ensure!(
                after == before || !path_blocked(after, before, sim.walls()),
                "Invariant failed: frame {} moved through a wall {before:?} -> {after:?}",
                sim.frame()
            );
        }
        ensure!(
            (0.0..=max_x).contains(&after.x) && (0.0..=max_y).contains(&after.y),
            "Invariant failed: viewer left the play area at {after:?}"
        );
        ensure!(sim.wall_height() >= 1, "Invariant failed: wall height below 1");
        ensure!(
            frame.strips.len() <= config.view_ray_count as usize,
            "Invariant failed: more strips than view columns"
        );
    }

    log::info!("final viewer {:?} wall height {}", sim.viewer().position(), sim.wall_height());
    println!("Fuzzing completed successfully ({render_frames} render-mode frames).");
    Ok(())
}
