//! Input handling: event types, key actions, and the input processor that
//! converts raw window events into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Key-bindable actions.
pub mod keyboard;
/// Converts raw events into engine commands.
pub mod processor;

#[cfg(feature = "viewer")]
pub use event::key_press_string;
pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
