//! Numeric tunables for maze size, ray casting, projection, and movement.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("cell_size must be greater than zero")]
    ZeroCellSize,
    #[error("play area {width}x{height} is smaller than one {cell_size}-unit cell")]
    PlayAreaTooSmall { width: u32, height: u32, cell_size: u32 },
    #[error("{field} must be at least 1")]
    ZeroRayCount { field: &'static str },
    #[error("field_of_view_degrees must be positive, got {0}")]
    FieldOfViewOutOfRange(f64),
    #[error("field_of_view_degrees must be below 180, got {0}")]
    FieldOfViewTooWide(f64),
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("malformed config document: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub cell_size: u32,
    pub play_area_width: u32,
    pub play_area_height: u32,
    pub full_ray_count: u32,
    pub view_ray_count: u32,
    pub field_of_view_degrees: f64,
    pub move_speed: f64,
    pub turn_step_degrees: f64,
    pub wall_height: i32,
    pub shade_constant: f64,
    pub shade_cap: f64,
    pub projection_constant: f64,
    pub max_strip_height: f64,
    pub ray_length: f64,
    pub view_panel_x: f64,
    pub view_center_y: f64,
    pub edge_margin: f64,
    pub start_x: f64,
    pub start_y: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cell_size: 25,
            play_area_width: 500,
            play_area_height: 500,
            full_ray_count: 2000,
            view_ray_count: 500,
            field_of_view_degrees: 70.0,
            move_speed: 0.5,
            turn_step_degrees: 1.0,
            wall_height: 14,
            shade_constant: 85.0,
            shade_cap: 240.0,
            projection_constant: 500.0,
            max_strip_height: 500.0,
            ray_length: 1000.0,
            view_panel_x: 500.0,
            view_center_y: 250.0,
            edge_margin: 2.0,
            start_x: 262.5,
            start_y: 262.5,
        }
    }
}

impl SimConfig {
    pub fn grid_width(&self) -> usize {
        (self.play_area_width / self.cell_size.max(1)) as usize
    }

    pub fn grid_height(&self) -> usize {
        (self.play_area_height / self.cell_size.max(1)) as usize
    }

    pub fn field_of_view_radians(&self) -> f64 {
        self.field_of_view_degrees.to_radians()
    }

    pub fn turn_step_radians(&self) -> f64 {
        self.turn_step_degrees.to_radians()
    }

    /// Parses a TOML document and validates it. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(text).map_err(|err| ConfigError::Malformed(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.play_area_width < self.cell_size || self.play_area_height < self.cell_size {
            return Err(ConfigError::PlayAreaTooSmall {
                width: self.play_area_width,
                height: self.play_area_height,
                cell_size: self.cell_size,
            });
        }
        if self.full_ray_count == 0 {
            return Err(ConfigError::ZeroRayCount { field: "full_ray_count" });
        }
        if self.view_ray_count == 0 {
            return Err(ConfigError::ZeroRayCount { field: "view_ray_count" });
        }
        if !(self.field_of_view_degrees.is_finite() && self.field_of_view_degrees > 0.0) {
            return Err(ConfigError::FieldOfViewOutOfRange(self.field_of_view_degrees));
        }
        // Columns past 90° off the heading would project walls behind the viewer.
        if self.field_of_view_degrees >= 180.0 {
            return Err(ConfigError::FieldOfViewTooWide(self.field_of_view_degrees));
        }
        for (field, value) in [
            ("move_speed", self.move_speed),
            ("turn_step_degrees", self.turn_step_degrees),
            ("shade_constant", self.shade_constant),
            ("shade_cap", self.shade_cap),
            ("projection_constant", self.projection_constant),
            ("max_strip_height", self.max_strip_height),
            ("ray_length", self.ray_length),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.wall_height < 1 {
            return Err(ConfigError::NonPositive {
                field: "wall_height",
                value: f64::from(self.wall_height),
            });
        }
        Ok(())
    }
}
