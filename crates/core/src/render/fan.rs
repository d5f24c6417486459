//! Ray fans: the 360° debug sweep and the first-person field of view.

use std::f64::consts::TAU;

use crate::raycast::{RayHit, cast};
use crate::types::{Point, Segment};
use crate::viewer::normalize_angle;

use super::projection::corrected_distance;

/// One first-person ray and the screen column it feeds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewColumn {
    pub column: usize,
    /// Signed angle from the view centre; negative is left of centre.
    pub angle_offset: f64,
    pub hit: Option<RayHit>,
}

impl ViewColumn {
    /// Hit distance with fisheye correction applied.
    pub fn corrected_distance(&self) -> Option<f64> {
        self.hit.map(|hit| corrected_distance(hit.distance, self.angle_offset))
    }
}

/// `count` angles evenly spaced around the full circle, starting at zero.
pub fn full_circle_angles(count: u32) -> impl Iterator<Item = f64> {
    let step = TAU / f64::from(count.max(1));
    (0..count).map(move |i| f64::from(i) * step)
}

/// Signed angle offsets for `count` columns spanning `fov` radians.
///
/// Column `count / 2` looks straight ahead; each column steps `fov / count`.
pub fn view_offsets(count: u32, fov: f64) -> impl Iterator<Item = (usize, f64)> {
    let step = fov / f64::from(count.max(1));
    let center = i64::from(count / 2);
    (0..count).map(move |column| {
        let offset = (i64::from(column) - center) as f64 * step;
        (column as usize, offset)
    })
}

/// Top-down lines from `origin` to each hit of a full 360° sweep.
pub fn cast_full_circle(origin: Point, count: u32, length: f64, walls: &[Segment]) -> Vec<Segment> {
    full_circle_angles(count)
        .filter_map(|angle| cast(origin, angle, length, walls))
        .map(|hit| Segment { start: origin, end: hit.point })
        .collect()
}

pub fn cast_view_fan(
    origin: Point,
    heading: f64,
    count: u32,
    fov: f64,
    length: f64,
    walls: &[Segment],
) -> Vec<ViewColumn> {
    view_offsets(count, fov)
        .map(|(column, angle_offset)| {
            let angle = normalize_angle(heading + angle_offset);
            ViewColumn { column, angle_offset, hit: cast(origin, angle, length, walls) }
        })
        .collect()
}
