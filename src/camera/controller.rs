use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::input::MouseButton;
use crate::options::{CameraOptions, ControlOptions};
use crate::util::spherical::Spherical;

/// Pending motion below this magnitude counts as stopped.
const SETTLE_EPSILON: f32 = 1.0e-6;

/// Wheel delta → exponent scale (before `zoom_speed`).
const WHEEL_ZOOM_RATE: f32 = 0.001;

/// What an active pointer drag does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// No drag in progress.
    #[default]
    None,
    /// Orbit the camera around the target.
    Rotate,
    /// Slide the target (and camera) across the view plane.
    Pan,
}

/// Orbit camera driven by pointer drags and the scroll wheel.
///
/// Input handlers never touch the camera directly. They accumulate pending
/// rotation, pan and zoom which [`update`](Self::update) consumes once per
/// frame, so input rate and frame rate are independent and the camera pose
/// has a single writer.
///
/// The camera sits at `target + offset`, where the offset is kept in
/// spherical form (radius, polar angle from +Y, azimuth).
///
/// `min_distance` must be positive and no larger than `max_distance`, and
/// the polar limits must satisfy `0 < min_polar_angle <= max_polar_angle <
/// π`. These are not checked here; see
/// [`Options::validate`](crate::options::Options::validate).
pub struct OrbitController {
    /// The controlled camera.
    pub camera: Camera,
    /// Point the camera orbits and looks at.
    pub target: Vec3,
    /// Closest allowed camera distance.
    pub min_distance: f32,
    /// Farthest allowed camera distance.
    pub max_distance: f32,
    /// Smallest allowed polar angle, radians from +Y.
    pub min_polar_angle: f32,
    /// Largest allowed polar angle, radians from +Y.
    pub max_polar_angle: f32,
    /// Rotation sensitivity multiplier.
    pub rotate_speed: f32,
    /// Zoom sensitivity multiplier.
    pub zoom_speed: f32,
    /// Pan sensitivity multiplier.
    pub pan_speed: f32,
    /// Decay pending motion gradually instead of dropping it each update.
    pub enable_damping: bool,
    /// Fraction of pending motion removed per update when damping.
    pub damping_factor: f32,

    /// Offset of the camera from the target as of the last update.
    spherical: Spherical,
    /// Pending azimuth change, radians.
    pending_theta: f32,
    /// Pending polar change, radians.
    pending_phi: f32,
    /// Pending target translation.
    pan_offset: Vec3,
    /// Pending multiplicative distance change.
    scale: f32,

    drag: DragMode,
    /// Last recorded pointer position in pixels.
    pointer: Vec2,
    viewport: Vec2,
}

impl OrbitController {
    /// Create a controller with default limits for the given camera,
    /// orbiting `target`.
    #[must_use]
    pub fn new(camera: Camera, target: Vec3) -> Self {
        let mut controller = Self {
            spherical: Spherical::from_vec3(camera.eye - target),
            camera,
            target,
            min_distance: 0.0,
            max_distance: 0.0,
            min_polar_angle: 0.0,
            max_polar_angle: 0.0,
            rotate_speed: 0.0,
            zoom_speed: 0.0,
            pan_speed: 0.0,
            enable_damping: false,
            damping_factor: 0.0,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
            drag: DragMode::None,
            pointer: Vec2::ZERO,
            viewport: Vec2::new(1280.0, 720.0),
        };
        controller.apply_options(&ControlOptions::default());
        controller
    }

    /// Build the camera and controller from options for a viewport of
    /// `width` × `height` pixels.
    #[must_use]
    pub fn from_options(
        camera: &CameraOptions,
        controls: &ControlOptions,
        width: u32,
        height: u32,
    ) -> Self {
        let target = Vec3::from_array(camera.target);
        let mut controller =
            Self::new(Camera::from_options(camera, 1.0), target);
        controller.apply_options(controls);
        controller.resize(width, height);
        controller
    }

    /// Copy limits, sensitivities and damping settings from options.
    pub fn apply_options(&mut self, controls: &ControlOptions) {
        self.min_distance = controls.min_distance;
        self.max_distance = controls.max_distance;
        self.min_polar_angle = controls.min_polar_angle;
        self.max_polar_angle = controls.max_polar_angle;
        self.rotate_speed = controls.rotate_speed;
        self.zoom_speed = controls.zoom_speed;
        self.pan_speed = controls.pan_speed;
        self.enable_damping = controls.enable_damping;
        self.damping_factor = controls.damping_factor;
    }

    /// Record the viewport size in pixels and update the camera aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width.max(1) as f32, height.max(1) as f32);
        self.camera.aspect = self.viewport.x / self.viewport.y;
    }

    /// Viewport height in pixels, the normalization denominator for drags.
    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.viewport.y
    }

    // -- Input handlers (accumulate only) --

    /// Begin a drag at screen position (`x`, `y`).
    ///
    /// The secondary button or a held modifier selects pan, anything else
    /// rotates. Pressing again mid-drag restarts from the new position.
    pub fn on_pointer_down(
        &mut self,
        button: MouseButton,
        ctrl_held: bool,
        x: f32,
        y: f32,
    ) {
        self.drag = if button == MouseButton::Right || ctrl_held {
            DragMode::Pan
        } else {
            DragMode::Rotate
        };
        self.pointer = Vec2::new(x, y);
    }

    /// Pointer moved to (`x`, `y`). Ignored unless a drag is active.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let current = Vec2::new(x, y);
        let delta = current - self.pointer;
        match self.drag {
            DragMode::None => return,
            DragMode::Rotate => self.rotate(delta),
            DragMode::Pan => self.pan(delta),
        }
        self.pointer = current;
    }

    /// End any drag.
    pub fn on_pointer_up(&mut self) {
        self.drag = DragMode::None;
    }

    /// Scroll by `delta_y` (positive moves the camera away).
    pub fn on_wheel(&mut self, delta_y: f32) {
        self.scale *= (delta_y * WHEEL_ZOOM_RATE * self.zoom_speed).exp();
    }

    /// Height is the denominator for both axes so a drag of the same pixel
    /// length turns the camera equally in either direction.
    fn rotate(&mut self, delta: Vec2) {
        let height = self.viewport_height();
        self.pending_theta -= TAU * delta.x / height * self.rotate_speed;
        self.pending_phi -= TAU * delta.y / height * self.rotate_speed;
    }

    /// Convert a pixel delta to a world-space target translation at the
    /// target's depth.
    fn pan(&mut self, delta: Vec2) {
        let offset = self.camera.eye - self.target;
        let half_fov = self.camera.fovy.to_radians() / 2.0;
        let target_distance = offset.length() * half_fov.tan();
        let height = self.viewport_height();

        let pan_right =
            -2.0 * delta.x * target_distance / height * self.pan_speed;
        let pan_up = 2.0 * delta.y * target_distance / height * self.pan_speed;

        let up = self.camera.up.normalize_or_zero() * pan_up;
        let side = self.camera.right() * pan_right;
        self.pan_offset += up + side;
    }

    // -- Per-frame update --

    /// Apply pending input and resolve the camera pose.
    ///
    /// Reads the current offset from `camera.eye - target` (which a camera
    /// flight may have just written), adds pending rotation, clamps the
    /// polar angle, applies zoom and clamps the distance, moves the target
    /// by the pending pan, then places the camera and points it at the
    /// target. Pending motion is then decayed (damping) or cleared.
    pub fn update(&mut self) {
        let mut spherical = Spherical::from_vec3(self.camera.eye - self.target);

        spherical.theta += self.pending_theta;
        spherical.phi += self.pending_phi;

        spherical.phi = spherical
            .phi
            .min(self.max_polar_angle)
            .max(self.min_polar_angle);
        spherical.make_safe();
        spherical.radius *= self.scale;
        spherical.radius =
            spherical.radius.min(self.max_distance).max(self.min_distance);

        self.target += self.pan_offset;

        self.camera.eye = self.target + spherical.to_vec3();
        self.camera.look_at(self.target);
        self.spherical = spherical;

        if self.enable_damping {
            let damp = 1.0 - self.damping_factor;
            self.pending_theta *= damp;
            self.pending_phi *= damp;
            self.pan_offset *= damp;
        } else {
            self.pending_theta = 0.0;
            self.pending_phi = 0.0;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;
    }

    // -- Pose access --

    /// Place the camera at `eye` looking at `target`. Takes effect on the
    /// next [`update`](Self::update).
    pub fn set_pose(&mut self, eye: Vec3, target: Vec3) {
        self.camera.eye = eye;
        self.target = target;
    }

    /// Camera position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.camera.eye
    }

    /// Camera offset from the target as resolved by the last update.
    #[must_use]
    pub fn spherical(&self) -> Spherical {
        self.spherical
    }

    /// Current drag mode.
    #[must_use]
    pub fn drag_mode(&self) -> DragMode {
        self.drag
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag != DragMode::None
    }

    /// Pending (azimuth, polar) change in radians.
    #[must_use]
    pub fn pending_rotation(&self) -> Vec2 {
        Vec2::new(self.pending_theta, self.pending_phi)
    }

    /// Pending target translation.
    #[must_use]
    pub fn pending_pan(&self) -> Vec3 {
        self.pan_offset
    }

    /// Pending multiplicative zoom (1 = none).
    #[must_use]
    pub fn pending_zoom(&self) -> f32 {
        self.scale
    }

    /// Whether all pending motion has decayed to nothing.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pending_theta.abs() < SETTLE_EPSILON
            && self.pending_phi.abs() < SETTLE_EPSILON
            && self.pan_offset.length() < SETTLE_EPSILON
            && (self.scale - 1.0).abs() < SETTLE_EPSILON
    }

    /// Drop all pending motion and end any drag.
    pub fn stop(&mut self) {
        self.pending_theta = 0.0;
        self.pending_phi = 0.0;
        self.pan_offset = Vec3::ZERO;
        self.scale = 1.0;
        self.drag = DragMode::None;
    }
}
