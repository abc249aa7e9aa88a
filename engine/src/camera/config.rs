//! Camera Configuration
//!
//! Centralized tuning for the free-look camera, loadable from a JSON
//! file. `Default` returns the built-in constants, so a partial config
//! file only needs the fields it wants to override.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Tunable parameters for [`FreeCamera`](super::FreeCamera).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Movement step added per movement command (world units).
    pub scale: f32,
    /// Per-command clamp on pitch deltas (degrees).
    pub max_pitch_rate: f32,
    /// Per-command clamp on heading deltas (degrees).
    pub max_heading_rate: f32,
    /// Vertical field of view (degrees).
    pub fov: f32,
    /// Near clip distance.
    pub near_clip: f32,
    /// Far clip distance.
    pub far_clip: f32,
    /// Rotation in degrees per pixel of mouse drag.
    pub drag_sensitivity: f32,
    /// Up-axis impulse per scroll wheel tick.
    pub scroll_step: f32,
    /// Clear movement/rotation accumulators on every mode change.
    ///
    /// When `false`, impulses accumulated before an Ortho switch stay
    /// parked and resume when the camera returns to Free mode.
    pub reset_accumulators_on_mode_change: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            scale: 0.5,
            max_pitch_rate: 5.0,
            max_heading_rate: 5.0,
            fov: 45.0,
            near_clip: 0.1,
            far_clip: 1000.0,
            drag_sensitivity: 0.08,
            scroll_step: 0.05,
            reset_accumulators_on_mode_change: false,
        }
    }
}

impl CameraConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

/// Errors that can occur while loading a camera configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}
