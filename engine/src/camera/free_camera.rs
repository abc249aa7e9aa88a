//! Free-Look Camera Module
//!
//! A smoothed free-look camera driven by discrete input impulses.
//! Movement and rotation commands accumulate between frames; each
//! `update` consumes the accumulators and decays them geometrically,
//! so a single keypress produces a fading impulse instead of an
//! instant snap or indefinite drift.
//!
//! This module is window-system agnostic - it only deals with camera
//! state and math. Event translation lives in the caller.

use glam::{Mat4, Quat, Vec3};

use super::config::CameraConfig;
use crate::input::{MouseButton, Position};

/// Default movement step added to the translation accumulator per command.
const DEFAULT_SCALE: f32 = 0.5;
/// Default per-command clamp on pitch deltas, in degrees.
const DEFAULT_MAX_PITCH_RATE: f32 = 5.0;
/// Default per-command clamp on heading deltas, in degrees.
const DEFAULT_MAX_HEADING_RATE: f32 = 5.0;
/// Default vertical field of view in degrees.
const DEFAULT_FOV: f32 = 45.0;
/// Default near clip distance.
const DEFAULT_NEAR_CLIP: f32 = 0.1;
/// Default far clip distance.
const DEFAULT_FAR_CLIP: f32 = 1000.0;
/// Default rotation in degrees per pixel of mouse drag.
const DEFAULT_DRAG_SENSITIVITY: f32 = 0.08;
/// Default up-axis impulse per scroll wheel tick.
const DEFAULT_SCROLL_STEP: f32 = 0.05;

/// Per-update decay factor for the heading accumulator.
const HEADING_DAMPING: f32 = 0.5;
/// Per-update decay factor for the pitch accumulator.
const PITCH_DAMPING: f32 = 0.5;
/// Per-update decay factor for the translation accumulator.
const POSITION_DAMPING: f32 = 0.8;

/// Half-height of the orthographic view volume; the half-width is this
/// value scaled by the viewport aspect ratio.
const ORTHO_HALF_HEIGHT: f32 = 1.5;
/// Near/far extent of the orthographic view volume.
const ORTHO_DEPTH: f32 = 10.0;

/// Projection mode - selects how the projection matrix is built and
/// whether movement commands have any effect.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CameraMode {
    /// Perspective projection with full free-look movement.
    #[default]
    Free,
    /// Orthographic projection; the pose is frozen and movement
    /// commands are ignored.
    Ortho,
}

/// Movement command directions, relative to the current orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
    Forward,
    Back,
}

/// Viewport rectangle in pixels, as handed to the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 1,
            height: 1,
        }
    }
}

/// Snapshot of the matrices derived by the last [`FreeCamera::update`].
///
/// Returned by value so the render loop can hold it without borrowing
/// the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    pub projection: Mat4,
    pub view: Mat4,
    pub model: Mat4,
}

impl Default for CameraMatrices {
    fn default() -> Self {
        Self {
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            model: Mat4::IDENTITY,
        }
    }
}

impl CameraMatrices {
    /// Combined model-view-projection transform.
    #[inline]
    pub fn mvp(&self) -> Mat4 {
        self.projection * self.view * self.model
    }
}

/// Free-look camera state.
///
/// Commands (movement, pitch/heading changes, pointer events) mutate
/// accumulator fields between frames; [`FreeCamera::update`] consumes
/// them once per frame, strictly before the matrices are read. The
/// instance is exclusively owned and mutated by the controlling loop.
#[derive(Debug, Clone)]
pub struct FreeCamera {
    /// World-space eye location.
    pub position: Vec3,
    /// Point the camera is oriented toward; recomputed each update as
    /// `position + direction`.
    pub look_at: Vec3,
    /// Unit forward vector; renormalized from `look_at - position` at
    /// the start of every update.
    pub direction: Vec3,
    /// Reference up axis. Never touched by movement commands; reset to
    /// +Y on mode changes and [`FreeCamera::reset`].
    pub up: Vec3,
    /// Accumulated, damped pitch input since the last update (degrees,
    /// kept within (-360, 360]).
    pub pitch: f32,
    /// Accumulated, damped heading input since the last update
    /// (degrees, kept within (-360, 360]).
    pub heading: f32,
    /// Accumulated, damped translation input since the last update.
    pub position_delta: Vec3,
    /// Movement step added per movement command.
    pub scale: f32,
    /// Per-command clamp on incoming pitch deltas (degrees).
    pub max_pitch_rate: f32,
    /// Per-command clamp on incoming heading deltas (degrees).
    pub max_heading_rate: f32,
    /// Vertical field of view in degrees (Free mode only).
    pub fov: f32,
    /// Near clip distance (Free mode only).
    pub near_clip: f32,
    /// Far clip distance (Free mode only).
    pub far_clip: f32,
    /// Rotation in degrees per pixel of mouse drag.
    pub drag_sensitivity: f32,
    /// Up-axis impulse per scroll wheel tick.
    pub scroll_step: f32,
    /// Clear the accumulators whenever the mode changes, instead of
    /// letting impulses parked during Ortho mode resume on the switch
    /// back to Free.
    pub reset_accumulators_on_mode_change: bool,
    mode: CameraMode,
    viewport: Viewport,
    aspect: f32,
    mouse_position: Position,
    dragging: bool,
    matrices: CameraMatrices,
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            direction: Vec3::NEG_Z,
            up: Vec3::Y,
            pitch: 0.0,
            heading: 0.0,
            position_delta: Vec3::ZERO,
            scale: DEFAULT_SCALE,
            max_pitch_rate: DEFAULT_MAX_PITCH_RATE,
            max_heading_rate: DEFAULT_MAX_HEADING_RATE,
            fov: DEFAULT_FOV,
            near_clip: DEFAULT_NEAR_CLIP,
            far_clip: DEFAULT_FAR_CLIP,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            scroll_step: DEFAULT_SCROLL_STEP,
            reset_accumulators_on_mode_change: false,
            mode: CameraMode::Free,
            viewport: Viewport::default(),
            aspect: 1.0,
            mouse_position: Position::default(),
            dragging: false,
            matrices: CameraMatrices::default(),
        }
    }
}

impl FreeCamera {
    /// Create a camera with default settings (Free mode, up = +Y,
    /// 45 degree field of view, zero accumulators).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera with a custom initial position.
    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a camera from a [`CameraConfig`].
    pub fn with_config(config: &CameraConfig) -> Self {
        Self {
            scale: config.scale,
            max_pitch_rate: config.max_pitch_rate,
            max_heading_rate: config.max_heading_rate,
            fov: config.fov,
            near_clip: config.near_clip,
            far_clip: config.far_clip,
            drag_sensitivity: config.drag_sensitivity,
            scroll_step: config.scroll_step,
            reset_accumulators_on_mode_change: config.reset_accumulators_on_mode_change,
            ..Default::default()
        }
    }

    /// Get the current projection mode.
    #[inline]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Get the matrix snapshot derived by the last update.
    #[inline]
    pub fn matrices(&self) -> CameraMatrices {
        self.matrices
    }

    /// Get the stored viewport rectangle.
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Get the viewport aspect ratio (width / height).
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Get the last observed pointer position.
    #[inline]
    pub fn mouse_position(&self) -> Position {
        self.mouse_position
    }

    /// Whether the primary pointer button is currently held.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Advance the camera by one frame.
    ///
    /// Renormalizes the forward direction, rebuilds the projection for
    /// the current mode, applies and decays the accumulated rotation
    /// and translation impulses (Free mode only), and recomputes the
    /// view/model matrices. Call once per rendered frame, strictly
    /// before reading [`FreeCamera::matrices`].
    pub fn update(&mut self) {
        self.direction = (self.look_at - self.position).normalize_or_zero();

        match self.mode {
            CameraMode::Ortho => {
                // Horizontal extent scales with aspect, otherwise the
                // volume distorts on non-square viewports.
                self.matrices.projection = Mat4::orthographic_rh(
                    -ORTHO_HALF_HEIGHT * self.aspect,
                    ORTHO_HALF_HEIGHT * self.aspect,
                    -ORTHO_HALF_HEIGHT,
                    ORTHO_HALF_HEIGHT,
                    -ORTHO_DEPTH,
                    ORTHO_DEPTH,
                );
                // The pose is frozen here: accumulators are neither
                // applied nor damped, and persist until the camera
                // returns to Free mode.
            }
            CameraMode::Free => {
                self.matrices.projection = Mat4::perspective_rh(
                    self.fov.to_radians(),
                    self.aspect,
                    self.near_clip,
                    self.far_clip,
                );

                // Pitch rotates about the axis perpendicular to the
                // view direction and up; heading rotates about up.
                let axis = self.direction.cross(self.up);
                let pitch_quat = Quat::from_axis_angle(axis, self.pitch.to_radians());
                let heading_quat = Quat::from_axis_angle(self.up, self.heading.to_radians());
                // Quaternion products do not commute; pitch composes
                // onto heading in this order.
                let rotation = (pitch_quat * heading_quat).normalize();
                self.direction = rotation * self.direction;

                self.position += self.position_delta;
                self.look_at = self.position + self.direction;

                // Geometric decay toward rest.
                self.heading *= HEADING_DAMPING;
                self.pitch *= PITCH_DAMPING;
                self.position_delta *= POSITION_DAMPING;
            }
        }

        self.matrices.view = Mat4::look_at_rh(self.position, self.look_at, self.up);
        self.matrices.model = Mat4::IDENTITY;
    }

    /// Set the projection mode. Always resets the up axis to +Y; also
    /// clears the accumulators when
    /// [`reset_accumulators_on_mode_change`](Self::reset_accumulators_on_mode_change)
    /// is enabled.
    pub fn set_mode(&mut self, mode: CameraMode) {
        self.mode = mode;
        self.up = Vec3::Y;
        if self.reset_accumulators_on_mode_change {
            self.position_delta = Vec3::ZERO;
            self.pitch = 0.0;
            self.heading = 0.0;
        }
    }

    /// Set the eye position directly.
    ///
    /// The forward direction is refreshed immediately so that movement
    /// commands issued before the next update already use it.
    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.direction = (self.look_at - self.position).normalize_or_zero();
    }

    /// Set the look-at target directly.
    ///
    /// The forward direction is refreshed immediately so that movement
    /// commands issued before the next update already use it.
    #[inline]
    pub fn set_look_at(&mut self, look_at: Vec3) {
        self.look_at = look_at;
        self.direction = (self.look_at - self.position).normalize_or_zero();
    }

    /// Set the vertical field of view in degrees.
    #[inline]
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    /// Set the near and far clip distances. Callers are responsible
    /// for `0 < near < far`.
    #[inline]
    pub fn set_clipping(&mut self, near_clip: f32, far_clip: f32) {
        self.near_clip = near_clip;
        self.far_clip = far_clip;
    }

    /// Store the viewport rectangle and recompute the aspect ratio.
    ///
    /// The division is done in floating point; integer truncation
    /// could otherwise yield a zero aspect. `height` must be positive.
    pub fn set_viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        debug_assert!(height > 0, "viewport height must be positive");
        self.viewport = Viewport {
            x,
            y,
            width,
            height,
        };
        self.aspect = width as f32 / height as f32;
    }

    /// Queue a movement impulse along one of the six directions.
    ///
    /// Impulses accumulate across calls within a frame and are only
    /// consumed (and damped) by the next update. Ignored outside Free
    /// mode.
    pub fn apply_move(&mut self, dir: MoveDirection) {
        if self.mode != CameraMode::Free {
            return;
        }
        self.position_delta += match dir {
            MoveDirection::Up => self.up * self.scale,
            MoveDirection::Down => -self.up * self.scale,
            MoveDirection::Left => -self.direction.cross(self.up) * self.scale,
            MoveDirection::Right => self.direction.cross(self.up) * self.scale,
            MoveDirection::Forward => self.direction * self.scale,
            MoveDirection::Back => -self.direction * self.scale,
        };
    }

    /// Accumulate a pitch delta in degrees, clamped to
    /// `max_pitch_rate` per call.
    pub fn change_pitch(&mut self, degrees: f32) {
        let degrees = degrees.clamp(-self.max_pitch_rate, self.max_pitch_rate);
        self.pitch = wrap_degrees(self.pitch + degrees);
    }

    /// Accumulate a heading delta in degrees, clamped to
    /// `max_heading_rate` per call.
    ///
    /// While the pitch is more than a quarter turn past level the view
    /// is upside-down, so the delta is inverted to keep left/right
    /// pointer motion consistent on screen.
    pub fn change_heading(&mut self, degrees: f32) {
        let degrees = degrees.clamp(-self.max_heading_rate, self.max_heading_rate);
        if heading_inverted(self.pitch) {
            self.heading = wrap_degrees(self.heading - degrees);
        } else {
            self.heading = wrap_degrees(self.heading + degrees);
        }
    }

    /// Handle a pointer motion event at pixel coordinates `(x, y)`.
    ///
    /// While dragging, the motion delta feeds heading then pitch at
    /// `drag_sensitivity` degrees per pixel. The position is recorded
    /// regardless of drag state.
    pub fn handle_mouse_move(&mut self, x: f32, y: f32) {
        let delta_x = self.mouse_position.x - x;
        let delta_y = self.mouse_position.y - y;
        if self.dragging {
            self.change_heading(self.drag_sensitivity * delta_x);
            self.change_pitch(self.drag_sensitivity * delta_y);
        }
        self.mouse_position = Position::new(x, y);
    }

    /// Handle a pointer button transition at pixel coordinates
    /// `(x, y)`. The primary button toggles drag-look; the position is
    /// recorded for every button.
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool, x: f32, y: f32) {
        if button == MouseButton::Left {
            self.dragging = pressed;
        }
        self.mouse_position = Position::new(x, y);
    }

    /// Handle a scroll wheel event. One wheel click is one tick; each
    /// tick nudges the translation accumulator along the up axis by
    /// `scroll_step`.
    pub fn handle_scroll(&mut self, ticks: f32) {
        self.position_delta += self.up * self.scroll_step * ticks;
    }

    /// Reset the up axis to +Y.
    pub fn reset(&mut self) {
        self.up = Vec3::Y;
    }
}

/// Wrap an accumulated angle back into (-360, 360].
///
/// A single correction suffices because per-call deltas are clamped to
/// the max rates, so the accumulator can only exceed the range by one
/// step.
fn wrap_degrees(angle: f32) -> f32 {
    if angle > 360.0 {
        angle - 360.0
    } else if angle <= -360.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// True while the pitch is in (90, 270) or (-270, -90) - the view has
/// flipped past vertical and heading input must reverse.
fn heading_inverted(pitch: f32) -> bool {
    (pitch > 90.0 && pitch < 270.0) || (pitch < -90.0 && pitch > -270.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_default_camera() {
        let camera = FreeCamera::new();
        assert_eq!(camera.mode(), CameraMode::Free);
        assert_eq!(camera.up, Vec3::Y);
        assert_eq!(camera.fov, 45.0);
        assert_eq!(camera.scale, 0.5);
        assert_eq!(camera.max_pitch_rate, 5.0);
        assert_eq!(camera.max_heading_rate, 5.0);
        assert_eq!(camera.position_delta, Vec3::ZERO);
        assert_eq!(camera.pitch, 0.0);
        assert_eq!(camera.heading, 0.0);
        assert!(!camera.is_dragging());
    }

    #[test]
    fn test_with_position() {
        let pos = Vec3::new(3.0, 2.0, 1.0);
        let camera = FreeCamera::with_position(pos);
        assert_eq!(camera.position, pos);
        assert_eq!(camera.mode(), CameraMode::Free);
    }

    #[test]
    fn test_pitch_clamped_to_max_rate() {
        let mut camera = FreeCamera::new();
        camera.change_pitch(90.0);
        assert!((camera.pitch - 5.0).abs() < EPS);

        camera.pitch = 0.0;
        camera.change_pitch(-90.0);
        assert!((camera.pitch + 5.0).abs() < EPS);
    }

    #[test]
    fn test_heading_clamped_to_max_rate() {
        let mut camera = FreeCamera::new();
        camera.change_heading(90.0);
        assert!((camera.heading - 5.0).abs() < EPS);
    }

    #[test]
    fn test_pitch_wraps_single_step() {
        let mut camera = FreeCamera::new();
        camera.pitch = 358.0;
        camera.change_pitch(5.0);
        // 363 wraps down by one full turn.
        assert!((camera.pitch - 3.0).abs() < EPS);

        camera.pitch = -358.0;
        camera.change_pitch(-5.0);
        assert!((camera.pitch + 3.0).abs() < EPS);
    }

    #[test]
    fn test_pitch_stays_in_range_under_many_calls() {
        let mut camera = FreeCamera::new();
        for _ in 0..500 {
            camera.change_pitch(5.0);
            assert!(camera.pitch > -360.0 && camera.pitch <= 360.0);
        }
        for _ in 0..1000 {
            camera.change_pitch(-5.0);
            assert!(camera.pitch > -360.0 && camera.pitch <= 360.0);
        }
    }

    #[test]
    fn test_heading_inverts_past_vertical() {
        let mut camera = FreeCamera::new();
        camera.change_heading(2.0);
        assert!((camera.heading - 2.0).abs() < EPS);

        camera.heading = 0.0;
        camera.pitch = 100.0;
        camera.change_heading(2.0);
        assert!((camera.heading + 2.0).abs() < EPS);

        camera.heading = 0.0;
        camera.pitch = -100.0;
        camera.change_heading(2.0);
        assert!((camera.heading + 2.0).abs() < EPS);
    }

    #[test]
    fn test_heading_normal_when_level() {
        let mut camera = FreeCamera::new();
        camera.pitch = 89.0;
        camera.change_heading(3.0);
        assert!((camera.heading - 3.0).abs() < EPS);

        camera.heading = 0.0;
        camera.pitch = 271.0;
        camera.change_heading(3.0);
        assert!((camera.heading - 3.0).abs() < EPS);
    }

    #[test]
    fn test_move_accumulates_impulses() {
        let mut camera = FreeCamera::new();
        camera.direction = Vec3::NEG_Z;
        camera.apply_move(MoveDirection::Forward);
        camera.apply_move(MoveDirection::Forward);
        assert!((camera.position_delta - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn test_move_directions() {
        let mut camera = FreeCamera::new();
        camera.direction = Vec3::NEG_Z;

        camera.apply_move(MoveDirection::Up);
        assert!((camera.position_delta - Vec3::new(0.0, 0.5, 0.0)).length() < EPS);

        camera.position_delta = Vec3::ZERO;
        camera.apply_move(MoveDirection::Right);
        // direction x up = (0,0,-1) x (0,1,0) = (1,0,0)
        assert!((camera.position_delta - Vec3::new(0.5, 0.0, 0.0)).length() < EPS);

        camera.position_delta = Vec3::ZERO;
        camera.apply_move(MoveDirection::Back);
        assert!((camera.position_delta - Vec3::new(0.0, 0.0, 0.5)).length() < EPS);
    }

    #[test]
    fn test_move_ignored_in_ortho() {
        let mut camera = FreeCamera::new();
        camera.set_mode(CameraMode::Ortho);
        camera.apply_move(MoveDirection::Forward);
        assert_eq!(camera.position_delta, Vec3::ZERO);
    }

    #[test]
    fn test_set_mode_resets_up() {
        let mut camera = FreeCamera::new();
        camera.up = Vec3::X;
        camera.set_mode(CameraMode::Ortho);
        assert_eq!(camera.up, Vec3::Y);

        camera.up = Vec3::X;
        camera.set_mode(CameraMode::Free);
        assert_eq!(camera.up, Vec3::Y);
    }

    #[test]
    fn test_accumulators_persist_across_mode_switch_by_default() {
        let mut camera = FreeCamera::new();
        camera.apply_move(MoveDirection::Forward);
        let parked = camera.position_delta;
        camera.set_mode(CameraMode::Ortho);
        camera.update();
        assert_eq!(camera.position_delta, parked);

        camera.set_mode(CameraMode::Free);
        assert_eq!(camera.position_delta, parked);
    }

    #[test]
    fn test_mode_switch_clears_accumulators_when_configured() {
        let mut camera = FreeCamera::new();
        camera.reset_accumulators_on_mode_change = true;
        camera.apply_move(MoveDirection::Forward);
        camera.pitch = 3.0;
        camera.heading = -2.0;
        camera.set_mode(CameraMode::Ortho);
        assert_eq!(camera.position_delta, Vec3::ZERO);
        assert_eq!(camera.pitch, 0.0);
        assert_eq!(camera.heading, 0.0);
    }

    #[test]
    fn test_viewport_aspect_float_division() {
        let mut camera = FreeCamera::new();
        camera.set_viewport(0, 0, 1024, 512);
        assert_eq!(camera.aspect(), 2.0);

        // Integer division would truncate this to zero.
        camera.set_viewport(0, 0, 400, 600);
        assert!((camera.aspect() - 400.0 / 600.0).abs() < EPS);
    }

    #[test]
    fn test_direction_unit_after_update() {
        let mut camera = FreeCamera::new();
        camera.set_position(Vec3::new(1.0, 2.0, 3.0));
        camera.set_look_at(Vec3::new(-4.0, 0.0, 5.0));
        camera.change_pitch(2.0);
        camera.change_heading(-3.0);
        camera.update();
        assert!((camera.direction.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_scroll_nudges_along_up() {
        let mut camera = FreeCamera::new();
        camera.handle_scroll(1.0);
        assert!((camera.position_delta - Vec3::new(0.0, 0.05, 0.0)).length() < EPS);
        camera.handle_scroll(-1.0);
        assert!(camera.position_delta.length() < EPS);
    }

    #[test]
    fn test_drag_toggle_and_position_tracking() {
        let mut camera = FreeCamera::new();
        camera.handle_mouse_button(MouseButton::Left, true, 10.0, 20.0);
        assert!(camera.is_dragging());
        assert_eq!(camera.mouse_position(), Position::new(10.0, 20.0));

        camera.handle_mouse_button(MouseButton::Left, false, 11.0, 21.0);
        assert!(!camera.is_dragging());
        assert_eq!(camera.mouse_position(), Position::new(11.0, 21.0));

        // Non-primary buttons still record the position.
        camera.handle_mouse_button(MouseButton::Right, true, 5.0, 5.0);
        assert!(!camera.is_dragging());
        assert_eq!(camera.mouse_position(), Position::new(5.0, 5.0));
    }

    #[test]
    fn test_mouse_move_without_drag_only_tracks() {
        let mut camera = FreeCamera::new();
        camera.handle_mouse_move(50.0, 60.0);
        assert_eq!(camera.heading, 0.0);
        assert_eq!(camera.pitch, 0.0);
        assert_eq!(camera.mouse_position(), Position::new(50.0, 60.0));
    }

    #[test]
    fn test_mouse_drag_feeds_heading_and_pitch() {
        let mut camera = FreeCamera::new();
        camera.handle_mouse_button(MouseButton::Left, true, 100.0, 100.0);
        camera.handle_mouse_move(110.0, 105.0);
        // delta = last - new = (-10, -5)
        assert!((camera.heading - 0.08 * -10.0).abs() < EPS);
        assert!((camera.pitch - 0.08 * -5.0).abs() < EPS);
    }

    #[test]
    fn test_reset_restores_up() {
        let mut camera = FreeCamera::new();
        camera.up = Vec3::new(0.3, 0.1, 0.7);
        camera.reset();
        assert_eq!(camera.up, Vec3::Y);
    }

    #[test]
    fn test_wrap_degrees_boundaries() {
        assert_eq!(wrap_degrees(360.0), 360.0);
        assert_eq!(wrap_degrees(360.5), 0.5);
        assert_eq!(wrap_degrees(-360.0), 0.0);
        assert_eq!(wrap_degrees(-359.9), -359.9);
    }

    #[test]
    fn test_config_constructor() {
        let config = CameraConfig {
            scale: 1.5,
            fov: 70.0,
            reset_accumulators_on_mode_change: true,
            ..Default::default()
        };
        let camera = FreeCamera::with_config(&config);
        assert_eq!(camera.scale, 1.5);
        assert_eq!(camera.fov, 70.0);
        assert!(camera.reset_accumulators_on_mode_change);
    }
}
