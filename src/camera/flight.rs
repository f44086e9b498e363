//! Eased camera flights between two poses.
//!
//! A flight captures where the camera is when it starts and moves the eye
//! and the look-at target together toward a requested pose. At most one
//! flight exists; starting another replaces it outright, beginning from
//! wherever the camera is at that moment, so there is never a jump.

use glam::Vec3;
use web_time::Instant;

use crate::camera::controller::OrbitController;
use crate::util::easing::EasingFunction;

/// One in-progress flight.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraFlight {
    /// When the flight began.
    pub start_time: Instant,
    /// Length in seconds. Zero or less completes on the first tick.
    pub duration: f32,
    /// Eye position captured at start.
    pub start_eye: Vec3,
    /// Look-at target captured at start.
    pub start_target: Vec3,
    /// Requested final eye position.
    pub end_eye: Vec3,
    /// Requested final look-at target.
    pub end_target: Vec3,
}

impl CameraFlight {
    /// Normalized progress at `now`, clamped to [0, 1].
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f32() / self.duration).clamp(0.0, 1.0)
    }
}

/// Owner of the optional active flight.
#[derive(Debug, Clone, Default)]
pub struct FlightTween {
    active: Option<CameraFlight>,
    easing: EasingFunction,
}

impl FlightTween {
    /// Create an idle tween with the given response curve.
    #[must_use]
    pub fn new(easing: EasingFunction) -> Self {
        Self {
            active: None,
            easing,
        }
    }

    /// Change the response curve for current and future flights.
    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.easing = easing;
    }

    /// Start flying toward `end_eye` looking at `end_target`.
    ///
    /// Replaces any flight in progress. The start pose is the controller's
    /// current eye and target.
    pub fn start(
        &mut self,
        controller: &OrbitController,
        end_eye: Vec3,
        end_target: Vec3,
        duration: f32,
        now: Instant,
    ) {
        if self.active.is_some() {
            log::debug!("camera flight superseded");
        }
        self.active = Some(CameraFlight {
            start_time: now,
            duration,
            start_eye: controller.eye(),
            start_target: controller.target,
            end_eye,
            end_target,
        });
    }

    /// Write the interpolated pose for `now` into the controller.
    ///
    /// Does nothing without an active flight. Once progress reaches 1 the
    /// end pose is written exactly and the flight is cleared.
    pub fn tick(&mut self, controller: &mut OrbitController, now: Instant) {
        let Some(flight) = &self.active else {
            return;
        };

        let t = flight.progress(now);
        if t >= 1.0 {
            controller.set_pose(flight.end_eye, flight.end_target);
            self.active = None;
            log::debug!("camera flight complete");
            return;
        }

        let ease = self.easing.evaluate(t);
        controller.set_pose(
            flight.start_eye.lerp(flight.end_eye, ease),
            flight.start_target.lerp(flight.end_target, ease),
        );
    }

    /// Drop the active flight, leaving the camera where it is.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Whether a flight is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The flight in progress, if any.
    #[must_use]
    pub fn active(&self) -> Option<&CameraFlight> {
        self.active.as_ref()
    }

    /// Normalized progress of the active flight at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        self.active.as_ref().map(|f| f.progress(now))
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::camera::core::Camera;

    fn controller() -> OrbitController {
        let camera = Camera {
            eye: Vec3::new(0.0, 130.0, 260.0),
            target: Vec3::ZERO,
            ..Camera::default()
        };
        OrbitController::new(camera, Vec3::ZERO)
    }

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    #[test]
    fn completes_exactly_at_the_end_pose() {
        let mut c = controller();
        let mut tween = FlightTween::default();
        let t0 = Instant::now();
        let end_eye = Vec3::new(77.0, 30.0, 12.5);
        let end_target = Vec3::new(52.0, 0.0, 0.0);

        tween.start(&c, end_eye, end_target, 2.0, t0);
        tween.tick(&mut c, t0 + secs(2.0));

        assert_eq!(c.eye(), end_eye);
        assert_eq!(c.target, end_target);
        assert!(!tween.is_active());

        // Later ticks leave the pose alone.
        c.set_pose(Vec3::new(1.0, 2.0, 300.0), Vec3::ZERO);
        tween.tick(&mut c, t0 + secs(3.0));
        assert_eq!(c.eye(), Vec3::new(1.0, 2.0, 300.0));
    }

    #[test]
    fn halfway_uses_cubic_ease_out() {
        let mut c = controller();
        let mut tween = FlightTween::default();
        let t0 = Instant::now();
        let start_eye = c.eye();
        let end_eye = Vec3::new(100.0, 130.0, 260.0);

        tween.start(&c, end_eye, Vec3::new(100.0, 0.0, 0.0), 2.0, t0);
        tween.tick(&mut c, t0 + secs(1.0));

        // 1 - 0.5³ of the way, not 0.5
        let expected = start_eye.lerp(end_eye, 0.875);
        assert!((c.eye() - expected).length() < 1e-3);
        assert!((c.target - Vec3::new(87.5, 0.0, 0.0)).length() < 1e-3);
        assert!(tween.is_active());
    }

    #[test]
    fn replacement_starts_from_the_current_pose() {
        let mut c = controller();
        let mut tween = FlightTween::default();
        let t0 = Instant::now();

        tween.start(&c, Vec3::new(200.0, 0.0, 0.0), Vec3::X, 2.0, t0);
        let t1 = t0 + secs(0.7);
        tween.tick(&mut c, t1);
        let before = (c.eye(), c.target);

        tween.start(&c, Vec3::new(-200.0, 50.0, 0.0), Vec3::NEG_X, 2.0, t1);
        let flight = tween.active().cloned();
        assert_eq!(
            flight.map(|f| (f.start_eye, f.start_target)),
            Some(before)
        );

        tween.tick(&mut c, t1);
        assert!((c.eye() - before.0).length() < 1e-5);
        assert!((c.target - before.1).length() < 1e-5);
    }

    #[test]
    fn zero_or_negative_duration_completes_on_first_tick() {
        for duration in [0.0, -1.0] {
            let mut c = controller();
            let mut tween = FlightTween::default();
            let t0 = Instant::now();
            tween.start(&c, Vec3::splat(90.0), Vec3::ONE, duration, t0);
            assert_eq!(tween.progress(t0), Some(1.0));
            tween.tick(&mut c, t0);
            assert_eq!(c.eye(), Vec3::splat(90.0));
            assert!(!tween.is_active());
        }
    }

    #[test]
    fn flight_to_current_pose_is_harmless() {
        let mut c = controller();
        let mut tween = FlightTween::default();
        let t0 = Instant::now();
        let (eye, target) = (c.eye(), c.target);
        tween.start(&c, eye, target, 2.0, t0);
        tween.tick(&mut c, t0 + secs(0.3));
        assert!((c.eye() - eye).length() < 1e-4);
        tween.tick(&mut c, t0 + secs(5.0));
        assert_eq!(c.eye(), eye);
        assert!(!tween.is_active());
    }

    #[test]
    fn tick_without_flight_is_noop() {
        let mut c = controller();
        let mut tween = FlightTween::default();
        let eye = c.eye();
        tween.tick(&mut c, Instant::now());
        assert_eq!(c.eye(), eye);
        assert_eq!(tween.progress(Instant::now()), None);
    }

    #[test]
    fn cancel_keeps_camera_in_place() {
        let mut c = controller();
        let mut tween = FlightTween::new(EasingFunction::Linear);
        let t0 = Instant::now();
        tween.start(&c, Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO, 1.0, t0);
        tween.tick(&mut c, t0 + secs(0.5));
        let mid = c.eye();
        tween.cancel();
        tween.tick(&mut c, t0 + secs(1.0));
        assert_eq!(c.eye(), mid);
    }
}
