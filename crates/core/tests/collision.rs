use std::f64::consts::{FRAC_PI_2, PI};

use maze_core::raycast::path_blocked;
use maze_core::{InputSnapshot, Point, RenderMode, SimConfig, Simulation};
use proptest::prelude::*;

fn play_config() -> SimConfig {
    SimConfig { full_ray_count: 8, view_ray_count: 8, ..Default::default() }
}

fn render_mode_sim(seed: u64) -> Simulation {
    let mut sim = Simulation::new(seed, play_config()).expect("valid config");
    sim.set_mode(RenderMode::Render);
    sim
}

#[test]
fn walking_into_the_outer_wall_leaves_position_unchanged() {
    let mut sim = render_mode_sim(5);
    let start = Point::new(12.5, 0.3);
    // Facing up the screen, toward the top border of cell (0, 0).
    sim.place_viewer(start, 3.0 * FRAC_PI_2);

    sim.step(&InputSnapshot { forward: true, ..Default::default() });
    assert_eq!(sim.viewer().position(), start);
    assert_eq!(sim.viewer().previous_position(), start);
}

#[test]
fn walking_into_the_left_border_leaves_position_unchanged() {
    let mut sim = render_mode_sim(6);
    let start = Point::new(0.2, 12.5);
    sim.place_viewer(start, PI);

    sim.step(&InputSnapshot { forward: true, ..Default::default() });
    assert_eq!(sim.viewer().position(), start);
}

#[test]
fn walking_in_open_space_moves_by_speed() {
    let mut sim = render_mode_sim(6);
    // Centre of a cell, heading right; half a unit cannot reach any wall.
    sim.place_viewer(Point::new(12.5, 12.5), 0.0);
    sim.step(&InputSnapshot { forward: true, ..Default::default() });
    let moved = sim.viewer().position();
    assert!((moved.x - 13.0).abs() < 1e-9 && (moved.y - 12.5).abs() < 1e-9);
}

fn input_strategy() -> impl Strategy<Value = InputSnapshot> {
    (any::<[bool; 6]>()).prop_map(|keys| InputSnapshot {
        turn_left: keys[0],
        turn_right: keys[1],
        forward: keys[2],
        back: keys[3],
        strafe_left: keys[4],
        strafe_right: keys[5],
        ..Default::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn accepted_moves_never_cross_a_wall(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 1..300),
    ) {
        let mut sim = render_mode_sim(seed);
        for input in &inputs {
            let before = sim.viewer().position();
            sim.step(input);
            let after = sim.viewer().position();
            if after != before {
                prop_assert!(
                    !path_blocked(after, before, sim.walls()),
                    "moved through a wall from {:?} to {:?}",
                    before,
                    after
                );
            }
            prop_assert!(after.x >= 0.0 && after.x <= 498.0);
            prop_assert!(after.y >= 0.0 && after.y <= 498.0);
        }
    }
}
