//! Keyboard Input Module
//!
//! Generic key codes and the key-to-command bindings table. Decoupled
//! from winit; the windowing glue translates its key events into these
//! codes at the boundary.

use std::collections::HashMap;

use crate::camera::MoveDirection;

/// Generic key codes for camera input, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    Q,
    E,
    R,
    X,
    Tab,
    Escape,
    /// Catch-all for unhandled keys
    Unknown,
}

/// Commands a key event can trigger on the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraCommand {
    /// Queue a movement impulse.
    Move(MoveDirection),
    /// Switch between Free and Ortho projection.
    ToggleMode,
    /// Reset the camera's up axis.
    ResetOrientation,
    /// Leave the application.
    Exit,
}

/// Key-to-command bindings table.
///
/// `Default` installs the classic free-camera layout: WASD for
/// horizontal movement, E/Q for up/down, Tab toggles the projection
/// mode, R resets, Escape or X exits.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, CameraCommand>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };
        bindings.bind(KeyCode::W, CameraCommand::Move(MoveDirection::Forward));
        bindings.bind(KeyCode::S, CameraCommand::Move(MoveDirection::Back));
        bindings.bind(KeyCode::A, CameraCommand::Move(MoveDirection::Left));
        bindings.bind(KeyCode::D, CameraCommand::Move(MoveDirection::Right));
        bindings.bind(KeyCode::E, CameraCommand::Move(MoveDirection::Up));
        bindings.bind(KeyCode::Q, CameraCommand::Move(MoveDirection::Down));
        bindings.bind(KeyCode::Tab, CameraCommand::ToggleMode);
        bindings.bind(KeyCode::R, CameraCommand::ResetOrientation);
        bindings.bind(KeyCode::Escape, CameraCommand::Exit);
        bindings.bind(KeyCode::X, CameraCommand::Exit);
        bindings
    }
}

impl KeyBindings {
    /// Create the default bindings table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key to a command, replacing any previous binding for
    /// that key.
    pub fn bind(&mut self, key: KeyCode, command: CameraCommand) {
        self.bindings.insert(key, command);
    }

    /// Remove the binding for a key.
    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Look up the command bound to a key, if any.
    pub fn command_for(&self, key: KeyCode) -> Option<CameraCommand> {
        self.bindings.get(&key).copied()
    }
}
