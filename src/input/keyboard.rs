use serde::{Deserialize, Serialize};

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// cycle_focus = "Tab"
/// toggle_pause = "Space"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Fly to the next body (Sun → planets in order → Sun).
    CycleFocus,
    /// Fly back to the Sun.
    ResetFocus,
    /// Freeze or resume orbital motion.
    TogglePause,
    /// Switch camera damping on or off.
    ToggleDamping,
    /// Double the orbit speed.
    SpeedUp,
    /// Halve the orbit speed.
    SlowDown,
    /// Stop any camera flight where it is.
    Cancel,
}
