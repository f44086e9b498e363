//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! the held button, modifier keys) and the key-binding map. It is the only
//! thing that sits between raw window events and the engine's
//! [`execute`](crate::engine::OrreryEngine::execute) method.

use super::event::{InputEvent, MouseButton};
use crate::engine::command::OrreryCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`OrreryCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("Tab") {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    cursor: (f32, f32),
    /// Button that started the current drag, if any.
    pressed: Option<MouseButton>,
    /// Whether the control modifier is currently held.
    ctrl_pressed: bool,
    /// Key string → action mapping.
    keybindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_keybindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_keybindings(keybindings: KeybindingOptions) -> Self {
        Self {
            cursor: (0.0, 0.0),
            pressed: None,
            ctrl_pressed: false,
            keybindings,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> (f32, f32) {
        self.cursor
    }

    /// Button held since the last press, if any.
    #[must_use]
    pub fn pressed_button(&self) -> Option<MouseButton> {
        self.pressed
    }

    /// Whether the control modifier is held.
    #[must_use]
    pub fn ctrl_pressed(&self) -> bool {
        self.ctrl_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn keybindings(&self) -> &KeybindingOptions {
        &self.keybindings
    }

    /// Replace the key bindings, e.g. after loading a preset.
    pub fn set_keybindings(&mut self, mut keybindings: KeybindingOptions) {
        keybindings.rebuild_reverse_map();
        self.keybindings = keybindings;
    }

    /// Look up a key press and return the corresponding command, if bound.
    ///
    /// Action bindings take precedence over focus keys.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<OrreryCommand> {
        if let Some(action) = self.keybindings.lookup(key) {
            return Some(action.into());
        }
        self.keybindings
            .focus_slot(key)
            .map(|index| OrreryCommand::FocusSlot { index })
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<OrreryCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = (x, y);
                self.pressed.map(|_| OrreryCommand::PointerMove { x, y })
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed)
            }
            InputEvent::Scroll { delta } => {
                Some(OrreryCommand::Wheel { delta_y: delta })
            }
            InputEvent::ModifiersChanged { ctrl } => {
                self.ctrl_pressed = ctrl;
                None
            }
            InputEvent::Resized { width, height } => {
                Some(OrreryCommand::Resize { width, height })
            }
        }
    }

    /// Any release ends the drag, whichever button started it.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<OrreryCommand> {
        if !pressed {
            self.pressed = None;
            return Some(OrreryCommand::PointerUp);
        }

        self.pressed = Some(button);
        let (x, y) = self.cursor;
        Some(OrreryCommand::PointerDown {
            button,
            ctrl: self.ctrl_pressed,
            x,
            y,
        })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
