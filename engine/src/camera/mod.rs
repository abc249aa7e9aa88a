//! Camera Module
//!
//! Provides the smoothed free-look camera and its configuration.
//! This module is window-system agnostic - it only deals with camera
//! state and math.

pub mod config;
pub mod free_camera;

pub use config::{CameraConfig, ConfigError};
pub use free_camera::{CameraMatrices, CameraMode, FreeCamera, MoveDirection, Viewport};
