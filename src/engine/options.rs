//! Options methods for OrreryEngine

use std::path::Path;

use super::OrreryEngine;
use crate::error::OrreryError;
use crate::options::Options;

impl OrreryEngine {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Name of the preset last loaded with
    /// [`load_preset`](Self::load_preset).
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Replace options and apply all changes to subsystems.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.active_preset = None;
        self.apply_options();
    }

    /// Load a TOML preset from `dir/<name>.toml` and apply it.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError`] if the preset cannot be read or parsed; the
    /// current options are kept in that case.
    pub fn load_preset(
        &mut self,
        dir: &Path,
        name: &str,
    ) -> Result<(), OrreryError> {
        let options = Options::load(&dir.join(format!("{name}.toml")))?;
        self.set_options(options);
        self.active_preset = Some(name.to_owned());
        Ok(())
    }

    /// Push current option values to the controller, flight tween, frame
    /// clock and solar system.
    ///
    /// Live state (camera pose, orbital phases, focus) is kept. The body
    /// list is not rebuilt; changing it needs a new engine.
    pub fn apply_options(&mut self) {
        let _ = self.options.validate();
        self.apply_camera();
        self.controller.apply_options(&self.options.controls);
        self.flight.set_easing(self.options.flight.easing);
        self.clock.set_max_dt(self.options.system.max_frame_dt);
        self.system
            .set_orbit_speed_scale(self.options.system.orbit_speed_scale);
    }

    /// Push camera projection options to the controller's camera.
    fn apply_camera(&mut self) {
        let co = &self.options.camera;
        self.controller.camera.fovy = co.fovy;
        self.controller.camera.znear = co.znear;
        self.controller.camera.zfar = co.zfar;
    }
}
