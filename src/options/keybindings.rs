use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `CycleFocus` → `"Tab"`). A preset
    /// only lists the actions it rebinds; the rest keep their default keys.
    #[serde(deserialize_with = "bindings_over_defaults")]
    pub bindings: HashMap<KeyAction, String>,
    /// Keys that focus a body directly: index 0 is the Sun, index `i` the
    /// `i`-th body.
    pub focus_keys: Vec<String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::CycleFocus, "Tab".into()),
            (KeyAction::ResetFocus, "Backquote".into()),
            (KeyAction::TogglePause, "Space".into()),
            (KeyAction::ToggleDamping, "KeyD".into()),
            (KeyAction::SpeedUp, "Equal".into()),
            (KeyAction::SlowDown, "Minus".into()),
            (KeyAction::Cancel, "Escape".into()),
        ]);
        let focus_keys = (0..=8).map(|i| format!("Digit{i}")).collect();

        let mut opts = Self {
            bindings,
            focus_keys,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

/// Layer the bindings read from a preset over the default set.
fn bindings_over_defaults<'de, D>(
    deserializer: D,
) -> Result<HashMap<KeyAction, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = HashMap::<KeyAction, String>::deserialize(deserializer)?;
    let mut bindings = KeybindingOptions::default().bindings;
    bindings.extend(overrides);
    Ok(bindings)
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Focus slot bound to a key string (0 = Sun).
    #[must_use]
    pub fn focus_slot(&self, key: &str) -> Option<usize> {
        self.focus_keys.iter().position(|k| k == key)
    }
}
