//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it comes from a mouse gesture, a
//! key press or a scripted call, is an [`OrreryCommand`]. Consumers build
//! commands and pass them to
//! [`OrreryEngine::execute`](super::OrreryEngine::execute).

use super::focus::FocusTarget;
use crate::input::{KeyAction, MouseButton};

/// A single request to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum OrreryCommand {
    // ── Camera gestures ─────────────────────────────────────────────
    /// A button went down over the viewport.
    PointerDown {
        /// Which button.
        button: MouseButton,
        /// Whether the control modifier is held (turns rotate into pan).
        ctrl: bool,
        /// Pointer x in physical pixels.
        x: f32,
        /// Pointer y in physical pixels.
        y: f32,
    },
    /// The pointer moved while a button is held.
    PointerMove {
        /// Pointer x in physical pixels.
        x: f32,
        /// Pointer y in physical pixels.
        y: f32,
    },
    /// Any button was released.
    PointerUp,
    /// Wheel scroll; positive zooms out.
    Wheel {
        /// Vertical wheel delta in pixels.
        delta_y: f32,
    },
    /// Viewport size changed.
    Resize {
        /// Width in physical pixels.
        width: u32,
        /// Height in physical pixels.
        height: u32,
    },

    // ── Focus ───────────────────────────────────────────────────────
    /// Fly to a named body or the Sun.
    FocusOn {
        /// Where to go.
        target: FocusTarget,
    },
    /// Fly to a numbered slot (0 = Sun, `i` = the `i`-th body).
    FocusSlot {
        /// Slot index.
        index: usize,
    },
    /// Fly to the next body in order, wrapping back to the Sun.
    CycleFocus,
    /// Fly back to the Sun.
    ResetFocus,
    /// Stop the camera flight where it is.
    CancelFlight,

    // ── Simulation ──────────────────────────────────────────────────
    /// Freeze or resume orbital motion.
    TogglePause,
    /// Switch camera damping on or off.
    ToggleDamping,
    /// Multiply the global orbit speed.
    ScaleOrbitSpeed {
        /// Multiplier applied to the current speed scale.
        factor: f32,
    },
}

impl From<KeyAction> for OrreryCommand {
    fn from(action: KeyAction) -> Self {
        match action {
            KeyAction::CycleFocus => Self::CycleFocus,
            KeyAction::ResetFocus => Self::ResetFocus,
            KeyAction::TogglePause => Self::TogglePause,
            KeyAction::ToggleDamping => Self::ToggleDamping,
            KeyAction::SpeedUp => Self::ScaleOrbitSpeed { factor: 2.0 },
            KeyAction::SlowDown => Self::ScaleOrbitSpeed { factor: 0.5 },
            KeyAction::Cancel => Self::CancelFlight,
        }
    }
}
