//! Distance-to-strip conversion for the first-person view.

use crate::config::SimConfig;

/// Removes fisheye distortion by projecting onto the view direction.
pub fn corrected_distance(raw_distance: f64, angle_offset: f64) -> f64 {
    raw_distance * angle_offset.cos()
}

/// Grayscale intensity falling off inversely with distance, capped at `shade_cap`.
pub fn shade(corrected: f64, shade_constant: f64, shade_cap: f64) -> u8 {
    let intensity = if corrected > 0.0 {
        255.0 / (corrected / shade_constant)
    } else {
        f64::INFINITY
    };
    intensity.clamp(0.0, shade_cap.min(255.0)) as u8
}

/// Strip height inversely proportional to distance, capped at `max_height`.
pub fn strip_height(
    corrected: f64,
    projection_constant: f64,
    wall_height: f64,
    max_height: f64,
) -> f64 {
    if corrected <= 0.0 {
        return max_height;
    }
    (projection_constant / (corrected / wall_height)).clamp(0.0, max_height)
}

/// The projection tunables in effect for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub shade_constant: f64,
    pub shade_cap: f64,
    pub projection_constant: f64,
    pub wall_height: f64,
    pub max_height: f64,
}

impl Projection {
    pub fn from_config(config: &SimConfig, wall_height: i32) -> Self {
        Self {
            shade_constant: config.shade_constant,
            shade_cap: config.shade_cap,
            projection_constant: config.projection_constant,
            wall_height: f64::from(wall_height),
            max_height: config.max_strip_height,
        }
    }

    pub fn shade(&self, corrected: f64) -> u8 {
        shade(corrected, self.shade_constant, self.shade_cap)
    }

    pub fn strip_height(&self, corrected: f64) -> f64 {
        strip_height(corrected, self.projection_constant, self.wall_height, self.max_height)
    }
}
