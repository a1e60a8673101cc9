//! Motion configuration
//!
//! Loaded from TOML. Every section and field has a default, so a partial file
//! (or none at all) yields the stock tuning of the follow camera and character.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::environment::LayerMask;
use crate::error::{invalid_config, MotionError, MotionResult};

/// Orbit camera tuning and initial state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitCameraConfig {
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub zoom_speed: f32,
    pub follow_smoothing: f32,
    pub horizontal_angle: f32,
    pub vertical_angle: f32,
    pub min_vertical_angle: f32,
    pub max_vertical_angle: f32,
    pub orbit_speed: f32,
    pub invert_horizontal: bool,
    pub invert_vertical: bool,
    /// World position of the camera before the first update
    pub start_position: Vec3,
}

impl Default for OrbitCameraConfig {
    fn default() -> Self {
        Self {
            distance: 10.0,
            min_distance: 3.0,
            max_distance: 20.0,
            zoom_speed: 0.01,
            follow_smoothing: 5.0,
            horizontal_angle: 0.0,
            vertical_angle: 45.0,
            min_vertical_angle: 10.0,
            max_vertical_angle: 80.0,
            orbit_speed: 0.1,
            invert_horizontal: false,
            invert_vertical: false,
            start_position: Vec3::new(0.0, 10.0, -10.0),
        }
    }
}

/// Character locomotion tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    pub move_speed: f32,
    pub gravity: f32,
    /// Layers a click may land on to become a navigation target
    pub ground_layers: LayerMask,
    /// Cap the horizontal step at the remaining distance to the target.
    /// Off by default: a large step may carry the character past the target.
    pub clamp_arrival: bool,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            gravity: -9.81,
            ground_layers: LayerMask::DEFAULT,
            clamp_arrival: false,
        }
    }
}

/// Startup wiring options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Tag searched for when the camera has no explicit subject
    pub subject_tag: String,
    /// Fail scene construction instead of running an inert camera
    pub require_subject: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            subject_tag: crate::constants::camera::DEFAULT_SUBJECT_TAG.to_string(),
            require_subject: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub camera: OrbitCameraConfig,
    pub locomotion: LocomotionConfig,
    pub scene: SceneConfig,
}

impl MotionConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> MotionResult<Self> {
        let config: MotionConfig =
            toml::from_str(source).map_err(|source| MotionError::ConfigParse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> MotionResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| MotionError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        log::info!("[MotionConfig] Loaded {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> MotionResult<()> {
        let cam = &self.camera;
        for (field, value) in [
            ("camera.distance", cam.distance),
            ("camera.min_distance", cam.min_distance),
            ("camera.max_distance", cam.max_distance),
            ("camera.zoom_speed", cam.zoom_speed),
            ("camera.follow_smoothing", cam.follow_smoothing),
            ("camera.horizontal_angle", cam.horizontal_angle),
            ("camera.vertical_angle", cam.vertical_angle),
            ("camera.min_vertical_angle", cam.min_vertical_angle),
            ("camera.max_vertical_angle", cam.max_vertical_angle),
            ("camera.orbit_speed", cam.orbit_speed),
            ("locomotion.move_speed", self.locomotion.move_speed),
            ("locomotion.gravity", self.locomotion.gravity),
        ] {
            if !value.is_finite() {
                return Err(invalid_config(field, "must be finite"));
            }
        }
        if !cam.start_position.is_finite() {
            return Err(invalid_config("camera.start_position", "must be finite"));
        }

        if cam.min_distance <= 0.0 {
            return Err(invalid_config("camera.min_distance", "must be positive"));
        }
        if cam.min_distance > cam.max_distance {
            return Err(invalid_config(
                "camera.min_distance",
                format!("{} exceeds max_distance {}", cam.min_distance, cam.max_distance),
            ));
        }
        if !(cam.min_distance..=cam.max_distance).contains(&cam.distance) {
            return Err(invalid_config(
                "camera.distance",
                format!("{} outside [{}, {}]", cam.distance, cam.min_distance, cam.max_distance),
            ));
        }
        // Keeping the pitch off the poles keeps look-at well defined
        if cam.min_vertical_angle <= -90.0 || cam.max_vertical_angle >= 90.0 {
            return Err(invalid_config(
                "camera.vertical_angle",
                "limits must stay strictly inside (-90, 90)",
            ));
        }
        if cam.min_vertical_angle > cam.max_vertical_angle {
            return Err(invalid_config(
                "camera.min_vertical_angle",
                format!(
                    "{} exceeds max_vertical_angle {}",
                    cam.min_vertical_angle, cam.max_vertical_angle
                ),
            ));
        }
        if !(cam.min_vertical_angle..=cam.max_vertical_angle).contains(&cam.vertical_angle) {
            return Err(invalid_config(
                "camera.vertical_angle",
                format!(
                    "{} outside [{}, {}]",
                    cam.vertical_angle, cam.min_vertical_angle, cam.max_vertical_angle
                ),
            ));
        }
        if cam.zoom_speed < 0.0 || cam.orbit_speed < 0.0 || cam.follow_smoothing < 0.0 {
            return Err(invalid_config("camera", "speeds and smoothing must not be negative"));
        }

        if self.locomotion.move_speed < 0.0 {
            return Err(invalid_config("locomotion.move_speed", "must not be negative"));
        }
        if self.scene.subject_tag.trim().is_empty() {
            return Err(invalid_config("scene.subject_tag", "must not be empty"));
        }
        Ok(())
    }
}
