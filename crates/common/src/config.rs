use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::Millis;

/// Errors from loading or validating a [`GameConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported config format: {0:?} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Every gameplay tunable. Defaults reproduce the stock arcade balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Vertical field of view in degrees.
    pub field_of_view_degrees: f32,
    /// Viewport width / height.
    pub aspect_ratio: f32,
    pub camera_position: Vec3,
    pub ship_origin: Vec3,
    pub ship_size: f32,
    pub base_ship_speed: f32,
    pub initial_bullet_size: f32,
    /// Projectile speed away from the camera, units per second.
    pub bullet_speed: f32,
    pub bullet_interval_ms: Millis,
    pub planet_interval_ms: Millis,
    pub collectible_interval_ms: Millis,
    /// Projectiles further than this from the camera along -z are removed.
    pub far_bound: f32,
    pub planet_spawn_depth: f32,
    pub planet_spawn_spread: f32,
    /// Planet radius is `random_range(min, max) * 10`.
    pub planet_radius_range: [f32; 2],
    pub planet_speed: f32,
    pub collectible_spawn_spread: f32,
    pub collectible_depth: f32,
    pub collectible_size: f32,
    /// Entity-to-ship proximity threshold.
    pub pickup_radius: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_of_view_degrees: 45.0,
            aspect_ratio: 4.0 / 3.0,
            camera_position: Vec3::ZERO,
            ship_origin: Vec3::new(0.0, -20.0, -150.0),
            ship_size: 10.0,
            base_ship_speed: 50.0,
            initial_bullet_size: 2.0,
            bullet_speed: 2048.0,
            bullet_interval_ms: 200,
            planet_interval_ms: 2000,
            collectible_interval_ms: 5000,
            far_bound: 2000.0,
            planet_spawn_depth: 3000.0,
            planet_spawn_spread: 15.0,
            planet_radius_range: [1.0, 4.0],
            planet_speed: 300.0,
            collectible_spawn_spread: 6.0,
            collectible_depth: 150.0,
            collectible_size: 8.0,
            pickup_radius: 15.0,
        }
    }
}

/// Symmetric extent the ship may travel within, centered on the view axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipBounds {
    pub half_width: f32,
    pub half_height: f32,
}

/// Each check answers whether a ship at the given coordinate may keep moving
/// that way. A ship at the edge may step one frame past it.
impl ShipBounds {
    pub fn room_left(&self, x: f32) -> bool {
        x > -self.half_width
    }

    pub fn room_right(&self, x: f32) -> bool {
        x < self.half_width
    }

    pub fn room_up(&self, y: f32) -> bool {
        y < self.half_height
    }

    pub fn room_down(&self, y: f32) -> bool {
        y > -self.half_height
    }
}

impl GameConfig {
    /// Load from a `.json`, `.yaml` or `.yml` file and validate.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let config: Self = match ext.as_str() {
            "json" => serde_json::from_str(&data)?,
            "yaml" | "yml" => serde_yaml::from_str(&data)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject values that would make the simulation meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.field_of_view_degrees > 0.0 && self.field_of_view_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "field_of_view_degrees must be in (0, 180), got {}",
                self.field_of_view_degrees
            )));
        }
        let positive = [
            ("aspect_ratio", self.aspect_ratio),
            ("ship_size", self.ship_size),
            ("base_ship_speed", self.base_ship_speed),
            ("initial_bullet_size", self.initial_bullet_size),
            ("bullet_speed", self.bullet_speed),
            ("far_bound", self.far_bound),
            ("planet_spawn_depth", self.planet_spawn_depth),
            ("planet_speed", self.planet_speed),
            ("collectible_size", self.collectible_size),
            ("pickup_radius", self.pickup_radius),
        ];
        for (name, value) in positive {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        let intervals = [
            ("bullet_interval_ms", self.bullet_interval_ms),
            ("planet_interval_ms", self.planet_interval_ms),
            ("collectible_interval_ms", self.collectible_interval_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be non-zero")));
            }
        }
        let non_negative = [
            ("planet_spawn_spread", self.planet_spawn_spread),
            ("collectible_spawn_spread", self.collectible_spawn_spread),
            ("collectible_depth", self.collectible_depth),
        ];
        for (name, value) in non_negative {
            if value < 0.0 || !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("camera_position", self.camera_position),
            ("ship_origin", self.ship_origin),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        let [lo, hi] = self.planet_radius_range;
        if !(lo > 0.0 && lo < hi && hi.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "planet_radius_range must satisfy 0 < min < max, got [{lo}, {hi}]"
            )));
        }
        if self.ship_origin.z >= self.camera_position.z {
            return Err(ConfigError::Invalid(
                "ship_origin must be in front of the camera (smaller z)".into(),
            ));
        }
        Ok(())
    }

    /// Ship travel bounds from field of view, aspect ratio and the ship's
    /// distance from the camera.
    pub fn ship_bounds(&self) -> ShipBounds {
        let distance = self.camera_position.z - self.ship_origin.z;
        let half_fov = self.field_of_view_degrees.to_radians() / 2.0;
        let half_height = distance * half_fov.tan();
        ShipBounds {
            half_width: half_height * self.aspect_ratio,
            half_height,
        }
    }
}
