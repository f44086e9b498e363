//! The frame-driven orrery engine.
//!
//! [`OrreryEngine`] owns every stateful part of the viewer: the orbit
//! controller, the flight tween, the solar system and the frame clock.
//! Hosts feed it [`OrreryCommand`]s and call [`frame`](OrreryEngine::frame)
//! once per displayed frame.

pub mod command;
pub mod focus;
mod input;
mod options;

use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_time::Instant;

pub use self::command::OrreryCommand;
pub use self::focus::{FocusInfo, FocusTarget, Viewpoint};
use crate::camera::controller::OrbitController;
use crate::camera::core::{Camera, CameraUniform};
use crate::camera::flight::FlightTween;
use crate::error::OrreryError;
use crate::options::Options;
use crate::orbit::SolarSystem;
use crate::scene::Backdrop;
use crate::util::frame_timing::FrameClock;

/// Seed offset so the backdrop does not reuse the phase generator's stream.
const BACKDROP_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Orbit camera, camera flights and orbital motion behind one frame loop.
///
/// # Frame loop
///
/// Each frame, call [`frame`](Self::frame) with the current time. It
/// advances the orbits, then the active flight, then the controller, so a
/// drag made during a flight is applied on top of the flight's pose.
///
/// # Input
///
/// Convert window events with an
/// [`InputProcessor`](crate::input::InputProcessor) and pass the resulting
/// commands to [`execute`](Self::execute).
///
/// # Focus
///
/// [`focus_on`](Self::focus_on), [`cycle_focus`](Self::cycle_focus) and
/// [`reset_focus`](Self::reset_focus) start a flight to a body's
/// viewpoint. The flight aims at where the body is when it starts; the
/// camera does not follow the body afterwards.
pub struct OrreryEngine {
    /// Orbit camera controller.
    pub controller: OrbitController,
    flight: FlightTween,
    system: SolarSystem,
    backdrop: Backdrop,
    clock: FrameClock,
    focus: FocusTarget,
    /// Slot of `focus`: 0 is the Sun, `i` the `i`-th body.
    focus_slot: usize,
    /// Runtime camera, flight and system options.
    options: Options,
    /// Currently applied options preset name, if any.
    active_preset: Option<String>,
    uniform: CameraUniform,
}

impl OrreryEngine {
    /// Engine with default options for a `width` × `height` viewport.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_options(Options::default(), width, height)
    }

    /// Engine built from `options` for a `width` × `height` viewport.
    ///
    /// The camera starts at the configured eye with the Sun focused; no
    /// flight is running until a focus command arrives.
    #[must_use]
    pub fn from_options(options: Options, width: u32, height: u32) -> Self {
        let _ = options.validate();

        let controller = OrbitController::from_options(
            &options.camera,
            &options.controls,
            width,
            height,
        );
        let system = SolarSystem::from_options(&options.system);
        let mut rng = match options.system.seed {
            Some(seed) => StdRng::seed_from_u64(seed ^ BACKDROP_SEED_SALT),
            None => StdRng::from_os_rng(),
        };
        let backdrop = Backdrop::generate(&options.system.bodies, &mut rng);

        log::info!(
            "orrery engine: {} bodies, {width}x{height} viewport",
            system.bodies().len()
        );

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&controller.camera);

        Self {
            controller,
            flight: FlightTween::new(options.flight.easing),
            system,
            backdrop,
            clock: FrameClock::new(options.system.max_frame_dt),
            focus: FocusTarget::Sun,
            focus_slot: 0,
            options,
            active_preset: None,
            uniform,
        }
    }

    /// Advance one frame to `now`. Returns the clamped delta in seconds.
    ///
    /// Order: orbital integration, then the active flight writes its pose,
    /// then the controller consumes pending input and rewrites the camera.
    pub fn frame(&mut self, now: Instant) -> f32 {
        let dt = self.clock.tick(now);
        self.system.advance(dt);
        self.flight.tick(&mut self.controller, now);
        self.controller.update();
        self.uniform.update_view_proj(&self.controller.camera);
        dt
    }

    // -- Focus --

    /// Fly to `target`, starting at `now`.
    ///
    /// Unknown bodies are ignored: focus and camera stay as they were.
    /// Returns whether a flight was started.
    pub fn focus_on(&mut self, target: FocusTarget, now: Instant) -> bool {
        let sun_view = self.sun_view_offset();
        let goal = focus::viewpoint(&target, &self.system, sun_view);
        let slot = focus::slot_of(&target, &self.system);
        let (Some(goal), Some(slot)) = (goal, slot) else {
            log::debug!("focus on unknown body {target} ignored");
            return false;
        };
        self.fly_to(target, slot, goal, now);
        true
    }

    /// Fly to the body in a numbered slot: 0 is the Sun, `i` the `i`-th
    /// body. Returns whether the slot exists.
    pub fn focus_on_slot(&mut self, slot: usize, now: Instant) -> bool {
        let sun_view = self.sun_view_offset();
        let goal = focus::slot_viewpoint(slot, &self.system, sun_view);
        let target = focus::focus_slot(slot, &self.system);
        let (Some(goal), Some(target)) = (goal, target) else {
            log::debug!("focus slot {slot} is empty");
            return false;
        };
        self.fly_to(target, slot, goal, now);
        true
    }

    fn fly_to(
        &mut self,
        target: FocusTarget,
        slot: usize,
        goal: Viewpoint,
        now: Instant,
    ) {
        log::debug!("focus -> {target} (slot {slot})");
        self.flight.start(
            &self.controller,
            goal.eye,
            goal.target,
            self.options.flight.duration,
            now,
        );
        self.focus = target;
        self.focus_slot = slot;
    }

    fn sun_view_offset(&self) -> Vec3 {
        Vec3::from_array(self.options.system.sun_view_offset)
    }

    /// Fly to a body by name.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::UnknownBody`] when no body has that name.
    pub fn focus_by_name(
        &mut self,
        name: &str,
        now: Instant,
    ) -> Result<(), OrreryError> {
        if self.focus_on(FocusTarget::from_name(name), now) {
            Ok(())
        } else {
            Err(OrreryError::UnknownBody(name.to_owned()))
        }
    }

    /// Fly to the next body: Sun → each body in order → Sun.
    pub fn cycle_focus(&mut self, now: Instant) -> FocusTarget {
        let next = focus::next_slot(self.focus_slot, &self.system);
        let _ = self.focus_on_slot(next, now);
        self.focus.clone()
    }

    /// Fly back to the Sun.
    pub fn reset_focus(&mut self, now: Instant) {
        let _ = self.focus_on(FocusTarget::Sun, now);
    }

    /// The currently focused body.
    #[must_use]
    pub fn focus(&self) -> &FocusTarget {
        &self.focus
    }

    /// Info-panel summary for the focused body.
    #[must_use]
    pub fn focus_info(&self) -> Option<FocusInfo> {
        FocusInfo::describe(self.focus_slot, &self.system)
    }

    /// Whether a camera flight is in progress.
    #[must_use]
    pub fn is_flying(&self) -> bool {
        self.flight.is_active()
    }

    /// Progress of the active flight at `now`.
    #[must_use]
    pub fn flight_progress(&self, now: Instant) -> Option<f32> {
        self.flight.progress(now)
    }

    // -- Accessors --

    /// The controlled camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.controller.camera
    }

    /// Camera position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.controller.eye()
    }

    /// Point the camera orbits and looks at.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.controller.target
    }

    /// Combined view-projection matrix for the current pose.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.controller.camera.build_matrix()
    }

    /// GPU-ready camera block as of the last frame.
    #[must_use]
    pub fn uniform(&self) -> &CameraUniform {
        &self.uniform
    }

    /// The simulated bodies.
    #[must_use]
    pub fn system(&self) -> &SolarSystem {
        &self.system
    }

    /// Static scene geometry.
    #[must_use]
    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }
}
