// config.rs - View configuration: window size, input tuning, clip planes, initial pose
use std::path::Path;

use anyhow::Context;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{MAX_ZOOM, MIN_ZOOM};
use crate::traits::WindowDimensions;

pub const DEFAULT_WINDOW_WIDTH: u32 = 1000;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_MOVE_SPEED: f32 = 2.5;
pub const DEFAULT_NEAR_PLANE: f32 = 0.1;
pub const DEFAULT_FAR_PLANE: f32 = 100.0;

/// Starting pose of the camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPose {
    pub position: Vec3,
    /// Facing direction, normalized by the camera on construction
    pub front: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub zoom: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 12.0),
            front: Vec3::new(0.0, -0.5, -2.0),
            up: Vec3::Y,
            zoom: 80.0,
        }
    }
}

/// Everything the view controller needs at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Degrees of yaw/pitch per pixel of pointer motion
    pub sensitivity: f32,
    /// World units per second
    pub move_speed: f32,
    /// Degrees of field of view per scroll line
    pub zoom_speed: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    /// Half of the visible world height in orthographic mode
    pub ortho_half_height: f32,
    pub pose: CameraPose,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: "3D Scene".to_string(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            sensitivity: DEFAULT_SENSITIVITY,
            move_speed: DEFAULT_MOVE_SPEED,
            zoom_speed: 1.0,
            near_plane: DEFAULT_NEAR_PLANE,
            far_plane: DEFAULT_FAR_PLANE,
            ortho_half_height: 5.0,
            pose: CameraPose::default(),
        }
    }
}

impl ViewConfig {
    /// Read a JSON config file. Missing fields fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        log::info!("Loaded view config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that make the projection degenerate or the input tuning non-finite
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.width > 0 && self.height > 0,
            "window dimensions must be non-zero (got {}x{})",
            self.width,
            self.height
        );
        anyhow::ensure!(
            self.near_plane > 0.0 && self.far_plane > self.near_plane && self.far_plane.is_finite(),
            "clip planes must satisfy 0 < near < far (near={}, far={})",
            self.near_plane,
            self.far_plane
        );
        anyhow::ensure!(
            (MIN_ZOOM..=MAX_ZOOM).contains(&self.pose.zoom),
            "initial zoom must be within [{MIN_ZOOM}, {MAX_ZOOM}] degrees, got {}",
            self.pose.zoom
        );
        anyhow::ensure!(
            self.ortho_half_height.is_finite() && self.ortho_half_height > 0.0,
            "ortho_half_height must be positive, got {}",
            self.ortho_half_height
        );
        for (name, value) in [
            ("sensitivity", self.sensitivity),
            ("move_speed", self.move_speed),
            ("zoom_speed", self.zoom_speed),
        ] {
            anyhow::ensure!(
                value.is_finite() && value > 0.0,
                "{name} must be finite and positive, got {value}"
            );
        }
        anyhow::ensure!(
            self.pose.position.is_finite() && self.pose.up.is_finite(),
            "initial pose must be finite"
        );
        anyhow::ensure!(
            self.pose.front.is_finite() && self.pose.front.length_squared() > 0.0,
            "initial front vector must be finite and non-zero"
        );
        Ok(())
    }

    pub fn dimensions(&self) -> WindowDimensions {
        WindowDimensions::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_scene_constants() {
        let config = ViewConfig::default();
        assert_eq!(config.dimensions(), WindowDimensions::new(1000, 800));
        assert_eq!(config.sensitivity, 0.1);
        assert_eq!(config.move_speed, 2.5);
        assert_eq!(config.near_plane, 0.1);
        assert_eq!(config.far_plane, 100.0);
        assert_eq!(config.pose.position, Vec3::new(0.0, 5.0, 12.0));
        assert_eq!(config.pose.zoom, 80.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ViewConfig::from_json(r#"{ "width": 640, "height": 480 }"#).unwrap();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.sensitivity, DEFAULT_SENSITIVITY);
        assert_eq!(config.pose, CameraPose::default());
    }

    #[test]
    fn test_pose_from_json() {
        let config = ViewConfig::from_json(
            r#"{ "pose": { "position": [1.0, 2.0, 3.0], "zoom": 45.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.pose.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(config.pose.zoom, 45.0);
        assert_eq!(config.pose.up, Vec3::Y);
    }

    #[test]
    fn test_rejects_inverted_clip_planes() {
        let result = ViewConfig::from_json(r#"{ "near_plane": 10.0, "far_plane": 1.0 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_degenerate_zoom() {
        assert!(ViewConfig::from_json(r#"{ "pose": { "zoom": 180.0 } }"#).is_err());
        assert!(ViewConfig::from_json(r#"{ "pose": { "zoom": 0.0 } }"#).is_err());
    }

    #[test]
    fn test_zoom_bounds_match_camera() {
        assert!(ViewConfig::from_json(r#"{ "pose": { "zoom": 150.0 } }"#).is_err());
        assert!(ViewConfig::from_json(r#"{ "pose": { "zoom": 0.5 } }"#).is_err());
        assert!(ViewConfig::from_json(r#"{ "pose": { "zoom": 120.0 } }"#).is_ok());
        assert!(ViewConfig::from_json(r#"{ "pose": { "zoom": 1.0 } }"#).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_ortho_extent() {
        assert!(ViewConfig::from_json(r#"{ "ortho_half_height": 0.0 }"#).is_err());
        assert!(ViewConfig::from_json(r#"{ "ortho_half_height": -2.0 }"#).is_err());
    }

    #[test]
    fn test_rejects_bad_input_tuning() {
        // 1e39 overflows f32 to infinity
        assert!(ViewConfig::from_json(r#"{ "sensitivity": -1e39 }"#).is_err());
        assert!(ViewConfig::from_json(r#"{ "sensitivity": 0.0 }"#).is_err());
        assert!(ViewConfig::from_json(r#"{ "move_speed": 1e39 }"#).is_err());
        assert!(ViewConfig::from_json(r#"{ "move_speed": -1.0 }"#).is_err());
        assert!(ViewConfig::from_json(r#"{ "zoom_speed": 1e39 }"#).is_err());
        assert!(ViewConfig::from_json(r#"{ "zoom_speed": 0.0 }"#).is_err());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(ViewConfig::from_json(r#"{ "width": 0 }"#).is_err());
        assert!(ViewConfig::from_json(r#"{ "height": 0 }"#).is_err());
    }

    #[test]
    fn test_defaults_validate() {
        assert!(ViewConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(ViewConfig::from_json("{ width: ").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = ViewConfig::load("/nonexistent/scene-view.json").unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
