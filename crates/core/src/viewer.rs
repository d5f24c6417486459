//! Viewer pose and the movement/collision controller.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::input::InputSnapshot;
use crate::raycast::path_blocked;
use crate::types::{Point, Segment};

/// Wraps any angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Idle,
    Moved,
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewer {
    position: Point,
    previous: Point,
    heading: f64,
}

impl Viewer {
    pub fn new(position: Point, heading: f64) -> Self {
        Self { position, previous: position, heading: normalize_angle(heading) }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn previous_position(&self) -> Point {
        self.previous
    }

    /// Heading in radians inside `[0, 2π)`.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn turn(&mut self, delta: f64) {
        self.heading = normalize_angle(self.heading + delta);
    }

    /// Applies one frame of turn input at `step` radians per held key.
    pub fn apply_turn(&mut self, input: &InputSnapshot, step: f64) {
        if input.turn_left {
            self.turn(-step);
        }
        if input.turn_right {
            self.turn(step);
        }
    }

    /// Jumps straight to `cursor` with no collision test.
    pub fn follow_cursor(&mut self, cursor: Point) {
        self.previous = self.position;
        self.position = cursor;
    }

    /// Moves by `speed` for every held direction key, then rejects the whole
    /// move if the path from the new position back to the old one touches a wall.
    pub fn move_with_collision(
        &mut self,
        input: &InputSnapshot,
        speed: f64,
        walls: &[Segment],
    ) -> MoveOutcome {
        self.previous = self.position;
        if !input.is_moving() {
            return MoveOutcome::Idle;
        }

        let mut next = self.position;
        if input.forward {
            next = next.offset(self.heading, speed);
        }
        if input.back {
            next = next.offset(self.heading, -speed);
        }
        if input.strafe_left {
            next = next.offset(self.heading - FRAC_PI_2, speed);
        }
        if input.strafe_right {
            next = next.offset(self.heading + FRAC_PI_2, speed);
        }

        if path_blocked(next, self.previous, walls) {
            return MoveOutcome::Blocked;
        }
        self.position = next;
        MoveOutcome::Moved
    }

    /// Keeps the viewer inside `[0, max - margin]` on both axes.
    pub fn clamp_to_area(&mut self, max_x: f64, max_y: f64, margin: f64) {
        self.position.x = self.position.x.clamp(0.0, (max_x - margin).max(0.0));
        self.position.y = self.position.y.clamp(0.0, (max_y - margin).max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < 1e-9 && (actual.y - y).abs() < 1e-9,
            "expected ({x}, {y}), got {actual:?}"
        );
    }

    #[test]
    fn heading_wraps_in_both_directions() {
        let mut viewer = Viewer::new(Point::new(0.0, 0.0), 0.0);
        viewer.turn(-0.25);
        assert!((viewer.heading() - (TAU - 0.25)).abs() < 1e-12);
        viewer.turn(0.5);
        assert!((viewer.heading() - 0.25).abs() < 1e-12);
        assert!((0.0..TAU).contains(&normalize_angle(-1e-20)));
        assert_eq!(normalize_angle(TAU), 0.0);
    }

    #[test]
    fn opposing_turn_keys_cancel() {
        let mut viewer = Viewer::new(Point::new(0.0, 0.0), 1.0);
        let input = InputSnapshot { turn_left: true, turn_right: true, ..Default::default() };
        viewer.apply_turn(&input, 0.1);
        assert!((viewer.heading() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn forward_and_strafe_follow_heading() {
        let mut viewer = Viewer::new(Point::new(10.0, 10.0), 0.0);
        let forward = InputSnapshot { forward: true, ..Default::default() };
        assert_eq!(viewer.move_with_collision(&forward, 2.0, &[]), MoveOutcome::Moved);
        assert_point(viewer.position(), 12.0, 10.0);
        assert_point(viewer.previous_position(), 10.0, 10.0);

        let strafe_right = InputSnapshot { strafe_right: true, ..Default::default() };
        viewer.move_with_collision(&strafe_right, 2.0, &[]);
        assert_point(viewer.position(), 12.0, 12.0);

        let strafe_left = InputSnapshot { strafe_left: true, ..Default::default() };
        viewer.move_with_collision(&strafe_left, 2.0, &[]);
        assert_point(viewer.position(), 12.0, 10.0);
    }

    #[test]
    fn back_moves_against_heading() {
        let mut viewer = Viewer::new(Point::new(10.0, 10.0), PI);
        let back = InputSnapshot { back: true, ..Default::default() };
        viewer.move_with_collision(&back, 1.0, &[]);
        assert_point(viewer.position(), 11.0, 10.0);
    }

    #[test]
    fn move_through_wall_is_rolled_back_entirely() {
        let wall = Segment::new(10.0, 0.0, 10.0, 20.0);
        let mut viewer = Viewer::new(Point::new(9.8, 5.0), 0.0);
        let input = InputSnapshot { forward: true, strafe_right: true, ..Default::default() };

        assert_eq!(viewer.move_with_collision(&input, 0.5, &[wall]), MoveOutcome::Blocked);
        assert_eq!(viewer.position(), viewer.previous_position());
        assert_point(viewer.position(), 9.8, 5.0);
    }

    #[test]
    fn idle_frame_refreshes_previous_position() {
        let mut viewer = Viewer::new(Point::new(1.0, 1.0), 0.0);
        viewer.follow_cursor(Point::new(4.0, 4.0));
        assert_eq!(viewer.previous_position(), Point::new(1.0, 1.0));

        let outcome = viewer.move_with_collision(&InputSnapshot::default(), 1.0, &[]);
        assert_eq!(outcome, MoveOutcome::Idle);
        assert_eq!(viewer.previous_position(), Point::new(4.0, 4.0));
    }

    #[test]
    fn clamp_keeps_viewer_off_the_far_edge() {
        let mut viewer = Viewer::new(Point::new(499.5, -3.0), 0.0);
        viewer.clamp_to_area(500.0, 500.0, 2.0);
        assert_point(viewer.position(), 498.0, 0.0);
    }
}
