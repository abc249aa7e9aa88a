//! Input Module
//!
//! Platform-agnostic input vocabulary for keyboard and mouse. This
//! module is decoupled from any specific windowing system (like winit)
//! to allow for flexible integration: the event loop translates its
//! native events into these types and feeds them to the camera.

pub mod keyboard;
pub mod mouse;

// Re-export commonly used types at module level
pub use keyboard::{CameraCommand, KeyBindings, KeyCode};
pub use mouse::{MouseButton, Position, ScrollDelta};
