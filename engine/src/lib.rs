//! Smoothcam Engine Library
//!
//! A smoothed free-look camera controller for interactive 3D
//! applications. Discrete keyboard and mouse events accumulate into
//! damped impulses; a per-frame update advances the pose and derives
//! the projection/view/model matrices for the render loop.
//!
//! # Modules
//!
//! - [`camera`] - Camera state, per-frame update, and configuration
//! - [`input`] - Platform-agnostic input vocabulary and key bindings
//!
//! # Example
//!
//! ```ignore
//! use smoothcam_engine::camera::{CameraMode, FreeCamera, MoveDirection};
//! use smoothcam_engine::input::{KeyBindings, KeyCode, MouseButton};
//! use glam::Vec3;
//!
//! let mut camera = FreeCamera::new();
//! camera.set_mode(CameraMode::Free);
//! camera.set_position(Vec3::new(0.0, 0.0, -1.0));
//! camera.set_look_at(Vec3::ZERO);
//! camera.set_clipping(0.1, 1000.0);
//! camera.set_viewport(0, 0, 1280, 720);
//!
//! // Discrete events between frames
//! camera.apply_move(MoveDirection::Forward);
//! camera.handle_mouse_button(MouseButton::Left, true, 100.0, 100.0);
//! camera.handle_mouse_move(110.0, 100.0);
//!
//! // Once per rendered frame
//! camera.update();
//! let mvp = camera.matrices().mvp();
//! ```

pub mod camera;
pub mod input;

// Re-export commonly used types at crate level for convenience
pub use camera::{CameraConfig, CameraMatrices, CameraMode, FreeCamera, MoveDirection, Viewport};
pub use input::{CameraCommand, KeyBindings, KeyCode, MouseButton, Position, ScrollDelta};
