/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`OrreryCommand`](crate::engine::OrreryCommand)
/// values.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) =
///     input_processor.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 })
/// {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel, in pixels.
    Scroll {
        /// Positive scrolls toward the user and zooms out.
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the control key is held.
        ctrl: bool,
    },
    /// Viewport resized.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

/// Pixels per scroll line for line-based wheel deltas.
#[cfg(feature = "viewer")]
const LINE_HEIGHT_PX: f32 = 100.0;

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit window event, if it is one the camera cares about.
    #[must_use]
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
    ) -> Option<Self> {
        use winit::event::{ElementState, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                Some(Self::MouseButton {
                    button: (*button).into(),
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => Some(Self::Scroll {
                delta: scroll_delta(*delta),
            }),
            WindowEvent::ModifiersChanged(modifiers) => {
                Some(Self::ModifiersChanged {
                    ctrl: modifiers.state().control_key(),
                })
            }
            WindowEvent::Resized(size) => Some(Self::Resized {
                width: size.width,
                height: size.height,
            }),
            _ => None,
        }
    }
}

/// Wheel delta in pixels, positive toward the user.
///
/// winit reports scrolling away from the user as positive.
#[cfg(feature = "viewer")]
fn scroll_delta(delta: winit::event::MouseScrollDelta) -> f32 {
    use winit::event::MouseScrollDelta;

    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT_PX,
        MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
    }
}

/// Key string (`KeyCode` debug format, e.g. `"Tab"`) for a fresh key press.
#[cfg(feature = "viewer")]
#[must_use]
pub fn key_press_string(event: &winit::event::WindowEvent) -> Option<String> {
    let winit::event::WindowEvent::KeyboardInput { event, .. } = event else {
        return None;
    };
    key_string(event.physical_key, event.state, event.repeat)
}

/// Releases, auto-repeats and unidentified keys produce nothing.
#[cfg(feature = "viewer")]
fn key_string(
    key: winit::keyboard::PhysicalKey,
    state: winit::event::ElementState,
    repeat: bool,
) -> Option<String> {
    use winit::keyboard::PhysicalKey;

    if state != winit::event::ElementState::Pressed || repeat {
        return None;
    }
    match key {
        PhysicalKey::Code(code) => Some(format!("{code:?}")),
        PhysicalKey::Unidentified(_) => None,
    }
}

#[cfg(all(test, feature = "viewer"))]
mod tests {
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::{ElementState, Modifiers, MouseScrollDelta, WindowEvent};
    use winit::keyboard::{KeyCode, ModifiersState, NativeKeyCode, PhysicalKey};

    use super::*;

    #[test]
    fn scroll_sign_is_flipped() {
        assert_eq!(
            scroll_delta(MouseScrollDelta::LineDelta(0.0, 1.0)),
            -LINE_HEIGHT_PX
        );
        assert_eq!(
            scroll_delta(MouseScrollDelta::LineDelta(3.0, -2.0)),
            2.0 * LINE_HEIGHT_PX
        );
        assert_eq!(
            scroll_delta(MouseScrollDelta::PixelDelta(PhysicalPosition::new(
                0.0, 42.0
            ))),
            -42.0
        );
    }

    #[test]
    fn ctrl_modifier_is_tracked() {
        let held = WindowEvent::ModifiersChanged(Modifiers::from(
            ModifiersState::CONTROL | ModifiersState::SHIFT,
        ));
        assert_eq!(
            InputEvent::from_window_event(&held),
            Some(InputEvent::ModifiersChanged { ctrl: true })
        );

        let shift_only = WindowEvent::ModifiersChanged(Modifiers::from(
            ModifiersState::SHIFT,
        ));
        assert_eq!(
            InputEvent::from_window_event(&shift_only),
            Some(InputEvent::ModifiersChanged { ctrl: false })
        );
    }

    #[test]
    fn resize_and_ignored_events() {
        let resized = WindowEvent::Resized(PhysicalSize::new(640, 480));
        assert_eq!(
            InputEvent::from_window_event(&resized),
            Some(InputEvent::Resized {
                width: 640,
                height: 480
            })
        );
        let focused = WindowEvent::Focused(true);
        assert_eq!(InputEvent::from_window_event(&focused), None);
    }

    #[test]
    fn button_mapping() {
        use winit::event::MouseButton as Winit;

        assert_eq!(MouseButton::from(Winit::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(Winit::Right), MouseButton::Right);
        assert_eq!(MouseButton::from(Winit::Middle), MouseButton::Middle);
        // Extra buttons rotate like the primary one
        assert_eq!(MouseButton::from(Winit::Back), MouseButton::Left);
        assert_eq!(MouseButton::from(Winit::Other(7)), MouseButton::Left);
    }

    #[test]
    fn only_fresh_presses_yield_keys() {
        let tab = PhysicalKey::Code(KeyCode::Tab);
        assert_eq!(
            key_string(tab, ElementState::Pressed, false),
            Some("Tab".to_owned())
        );
        assert_eq!(key_string(tab, ElementState::Pressed, true), None);
        assert_eq!(key_string(tab, ElementState::Released, false), None);
        assert_eq!(
            key_string(
                PhysicalKey::Code(KeyCode::Digit3),
                ElementState::Pressed,
                false
            ),
            Some("Digit3".to_owned())
        );
        assert_eq!(
            key_string(
                PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
                ElementState::Pressed,
                false
            ),
            None
        );
    }
}
