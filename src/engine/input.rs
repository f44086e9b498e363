//! Command dispatch for OrreryEngine

use web_time::Instant;

use super::command::OrreryCommand;
use super::OrreryEngine;
use crate::input::KeyAction;

impl OrreryEngine {
    /// Execute a command at the current time.
    ///
    /// This is the primary input entry point. Gestures only accumulate in
    /// the controller; they take effect on the next [`frame`](Self::frame).
    pub fn execute(&mut self, cmd: OrreryCommand) {
        self.execute_at(cmd, Instant::now());
    }

    /// Execute a command as if it arrived at `now`.
    ///
    /// Focus commands start their flight at `now`, which lets scripted and
    /// test sessions run on simulated time.
    pub fn execute_at(&mut self, cmd: OrreryCommand, now: Instant) {
        match cmd {
            OrreryCommand::PointerDown { button, ctrl, x, y } => {
                self.controller.on_pointer_down(button, ctrl, x, y);
            }
            OrreryCommand::PointerMove { x, y } => {
                self.controller.on_pointer_move(x, y);
            }
            OrreryCommand::PointerUp => self.controller.on_pointer_up(),
            OrreryCommand::Wheel { delta_y } => {
                self.controller.on_wheel(delta_y);
            }
            OrreryCommand::Resize { width, height } => {
                self.controller.resize(width, height);
            }
            OrreryCommand::FocusOn { target } => {
                let _ = self.focus_on(target, now);
            }
            OrreryCommand::FocusSlot { index } => {
                let _ = self.focus_on_slot(index, now);
            }
            OrreryCommand::CycleFocus => {
                let _ = self.cycle_focus(now);
            }
            OrreryCommand::ResetFocus => self.reset_focus(now),
            OrreryCommand::CancelFlight => {
                self.flight.cancel();
                self.controller.stop();
            }
            OrreryCommand::TogglePause => {
                let paused = self.system.toggle_paused();
                let state = if paused { "paused" } else { "running" };
                log::debug!("orbits {state}");
            }
            OrreryCommand::ToggleDamping => {
                let damping = &mut self.controller.enable_damping;
                *damping = !*damping;
            }
            OrreryCommand::ScaleOrbitSpeed { factor } => {
                let scale = self.system.scale_orbit_speed(factor);
                log::debug!("orbit speed scale {scale}");
            }
        }
    }

    /// Execute the command bound to a key action.
    pub fn execute_action(&mut self, action: KeyAction, now: Instant) {
        self.execute_at(action.into(), now);
    }
}
