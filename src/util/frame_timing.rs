//! Frame delta timing for the frame driver.

use web_time::{Duration, Instant};

/// Per-frame delta time with clamping and a smoothed FPS readout.
///
/// The orbital integrator trusts the delta it is given, so this clock is
/// where oversized gaps (a backgrounded tab, a debugger pause) get capped.
pub struct FrameClock {
    /// Timestamp of the previous frame, `None` before the first tick.
    last_frame: Option<Instant>,
    /// Largest delta handed out, in seconds.
    max_dt: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock that never reports a delta larger than `max_dt`
    /// seconds.
    #[must_use]
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_frame: None,
            max_dt: max_dt.max(0.0),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Change the delta cap.
    pub fn set_max_dt(&mut self, max_dt: f32) {
        self.max_dt = max_dt.max(0.0);
    }

    /// Record a frame at `now` and return the clamped delta in seconds.
    ///
    /// The first call returns 0. A `now` earlier than the previous frame
    /// also yields 0.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let Some(last) = self.last_frame.replace(now) else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(last);
        self.record_fps(elapsed);
        elapsed.as_secs_f32().min(self.max_dt)
    }

    fn record_fps(&mut self, elapsed: Duration) {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.tick(Instant::now()), 0.0);
    }

    #[test]
    fn reports_elapsed_time() {
        let mut clock = FrameClock::new(0.1);
        let t0 = Instant::now();
        let _ = clock.tick(t0);
        let dt = clock.tick(t0 + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-5);
    }

    #[test]
    fn clamps_large_gaps() {
        let mut clock = FrameClock::new(0.1);
        let t0 = Instant::now();
        let _ = clock.tick(t0);
        assert_eq!(clock.tick(t0 + Duration::from_secs(30)), 0.1);
    }

    #[test]
    fn fps_moves_toward_frame_rate() {
        let mut clock = FrameClock::new(1.0);
        let mut t = Instant::now();
        let _ = clock.tick(t);
        for _ in 0..500 {
            t += Duration::from_millis(10);
            let _ = clock.tick(t);
        }
        assert!((clock.fps() - 100.0).abs() < 1.0);
    }
}
