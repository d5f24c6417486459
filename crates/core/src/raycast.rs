//! Ray and movement queries against wall segments using the two-segment
//! parametric intersection test.

use crate::types::{Point, Segment};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub point: Point,
    /// Euclidean distance from the ray origin to `point`.
    pub distance: f64,
}

/// Intersection of the segment `origin -> target` with `wall`.
///
/// Solves for `t` along the ray and `u` along the wall. Parallel and collinear
/// pairs (zero denominator) never count as a hit, and both parameters must lie
/// in `[0, 1]`.
pub fn intersect(origin: Point, target: Point, wall: &Segment) -> Option<Point> {
    let Point { x: x1, y: y1 } = origin;
    let Point { x: x2, y: y2 } = target;
    let Point { x: x3, y: y3 } = wall.start;
    let Point { x: x4, y: y4 } = wall.end;

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom == 0.0 {
        return None;
    }
    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;
    if !((0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)) {
        return None;
    }
    Some(Point { x: x1 + t * (x2 - x1), y: y1 + t * (y2 - y1) })
}

/// The wall intersection closest to `origin` along `origin -> target`.
/// Ties keep the earliest wall in `walls`.
pub fn nearest_hit(origin: Point, target: Point, walls: &[Segment]) -> Option<RayHit> {
    let mut nearest: Option<RayHit> = None;
    for wall in walls {
        let Some(point) = intersect(origin, target, wall) else {
            continue;
        };
        let distance = origin.distance_to(point);
        if nearest.is_none_or(|best| distance < best.distance) {
            nearest = Some(RayHit { point, distance });
        }
    }
    nearest
}

/// Casts a ray of `length` units from `origin` at `angle` radians.
pub fn cast(origin: Point, angle: f64, length: f64, walls: &[Segment]) -> Option<RayHit> {
    nearest_hit(origin, origin.offset(angle, length), walls)
}

/// Whether the straight path between two points touches any wall.
pub fn path_blocked(from: Point, to: Point, walls: &[Segment]) -> bool {
    walls.iter().any(|wall| intersect(from, to, wall).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn ray_hits_perpendicular_wall_at_its_midpoint() {
        let wall = Segment::new(5.0, -5.0, 5.0, 5.0);
        let hit = nearest_hit(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &[wall])
            .expect("ray should hit the wall");
        assert_close(hit.point.x, 5.0);
        assert_close(hit.point.y, 0.0);
        assert_close(hit.distance, 5.0);
    }

    #[test]
    fn parallel_wall_is_never_hit() {
        let wall = Segment::new(0.0, 1.0, 10.0, 1.0);
        assert_eq!(intersect(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &wall), None);
    }

    #[test]
    fn collinear_overlap_is_treated_as_a_miss() {
        let wall = Segment::new(2.0, 0.0, 8.0, 0.0);
        assert_eq!(intersect(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &wall), None);
    }

    #[test]
    fn wall_beyond_ray_end_is_missed() {
        let wall = Segment::new(15.0, -5.0, 15.0, 5.0);
        assert_eq!(intersect(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &wall), None);
    }

    #[test]
    fn wall_behind_origin_is_missed() {
        let wall = Segment::new(-3.0, -5.0, -3.0, 5.0);
        assert_eq!(intersect(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &wall), None);
    }

    #[test]
    fn ray_passing_beside_a_short_wall_is_missed() {
        let wall = Segment::new(5.0, 1.0, 5.0, 4.0);
        assert_eq!(intersect(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &wall), None);
    }

    #[test]
    fn wall_endpoint_on_the_ray_counts_as_a_hit() {
        let wall = Segment::new(5.0, 0.0, 5.0, 4.0);
        let point = intersect(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &wall)
            .expect("touching endpoint should hit");
        assert_close(point.x, 5.0);
    }

    #[test]
    fn nearest_of_two_walls_wins_regardless_of_order() {
        let near = Segment::new(3.0, -5.0, 3.0, 5.0);
        let far = Segment::new(7.0, -5.0, 7.0, 5.0);
        let origin = Point::new(0.0, 0.0);
        let target = Point::new(10.0, 0.0);

        for walls in [[near, far], [far, near]] {
            let hit = nearest_hit(origin, target, &walls).expect("both walls are in range");
            assert_close(hit.distance, 3.0);
        }
    }

    #[test]
    fn no_walls_means_no_hit() {
        assert_eq!(nearest_hit(Point::new(0.0, 0.0), Point::new(1.0, 1.0), &[]), None);
    }

    #[test]
    fn zero_length_ray_never_hits() {
        let wall = Segment::new(0.0, -1.0, 0.0, 1.0);
        let origin = Point::new(0.0, 0.0);
        assert_eq!(nearest_hit(origin, origin, &[wall]), None);
    }

    #[test]
    fn cast_uses_angle_and_length() {
        let wall = Segment::new(-5.0, 4.0, 5.0, 4.0);
        let down = std::f64::consts::FRAC_PI_2;
        let hit = cast(Point::new(0.0, 0.0), down, 10.0, &[wall]).expect("wall below origin");
        assert_close(hit.distance, 4.0);
        assert!(cast(Point::new(0.0, 0.0), down, 3.0, &[wall]).is_none());
    }

    #[test]
    fn path_blocked_detects_crossing() {
        let wall = Segment::new(5.0, -5.0, 5.0, 5.0);
        assert!(path_blocked(Point::new(4.8, 0.0), Point::new(5.2, 0.0), &[wall]));
        assert!(!path_blocked(Point::new(4.0, 0.0), Point::new(4.5, 0.0), &[wall]));
    }
}
