//! Centralized camera, flight and simulation options with TOML preset
//! support.
//!
//! All tweakable settings (camera projection, orbit-control limits, flight
//! timing, the body list and keybindings) are consolidated here. Options
//! serialize to/from TOML so a preset file can override any subset.

mod camera;
mod controls;
mod flight;
mod keybindings;
mod system;

use std::f32::consts::PI;
use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use flight::FlightOptions;
pub use keybindings::KeybindingOptions;
use rustc_hash::FxHashSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use system::SystemOptions;

use crate::error::OrreryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and starting pose.
    pub camera: CameraOptions,
    /// Orbit-control limits and sensitivities.
    pub controls: ControlOptions,
    /// Focus flight timing.
    pub flight: FlightOptions,
    /// Bodies and simulation speed.
    pub system: SystemOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The options schema as pretty-printed JSON, for a settings UI.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::OptionsParse`] if the schema cannot be
    /// serialized.
    pub fn json_schema_string() -> Result<String, OrreryError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))
    }

    /// Current values as JSON, matching [`json_schema`](Self::json_schema).
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::OptionsParse`] if serialization fails.
    pub fn to_json(&self) -> Result<String, OrreryError> {
        serde_json::to_string(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Io`] if the file cannot be read and
    /// [`OrreryError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::OptionsParse`] on malformed input.
    pub fn from_toml(content: &str) -> Result<Self, OrreryError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::OptionsParse`] if serialization fails and
    /// [`OrreryError::Io`] if the file or its directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), OrreryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Check for settings the controller assumes but does not enforce.
    ///
    /// Each problem is logged as a warning. Returns how many were found;
    /// nothing is rejected or corrected.
    #[must_use]
    pub fn validate(&self) -> usize {
        let mut problems = Vec::new();

        let c = &self.controls;
        if c.min_distance <= 0.0 {
            problems.push(format!(
                "controls.min_distance must be positive (got {})",
                c.min_distance
            ));
        }
        if c.min_distance > c.max_distance {
            problems.push(format!(
                "controls.min_distance {} exceeds max_distance {}",
                c.min_distance, c.max_distance
            ));
        }
        if c.min_polar_angle <= 0.0 || c.max_polar_angle >= PI {
            problems.push(format!(
                "polar limits [{}, {}] must lie strictly inside (0, π)",
                c.min_polar_angle, c.max_polar_angle
            ));
        }
        if c.min_polar_angle > c.max_polar_angle {
            problems.push(format!(
                "controls.min_polar_angle {} exceeds max_polar_angle {}",
                c.min_polar_angle, c.max_polar_angle
            ));
        }
        if c.enable_damping
            && (c.damping_factor <= 0.0 || c.damping_factor > 1.0)
        {
            problems.push(format!(
                "controls.damping_factor {} outside (0, 1]; \
                 motion will not settle",
                c.damping_factor
            ));
        }

        let mut seen = FxHashSet::default();
        for body in &self.system.bodies {
            if !seen.insert(body.name.as_str()) {
                problems.push(format!("duplicate body name {:?}", body.name));
            }
            if body.orbit_radius <= 0.0 {
                problems.push(format!(
                    "body {:?} has non-positive orbit radius {}",
                    body.name, body.orbit_radius
                ));
            }
        }

        let mut keys = FxHashSet::default();
        for key in self
            .keybindings
            .bindings
            .values()
            .chain(&self.keybindings.focus_keys)
        {
            if !keys.insert(key.as_str()) {
                problems.push(format!("key {key:?} is bound more than once"));
            }
        }

        for problem in &problems {
            log::warn!("options: {problem}");
        }
        problems.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;
    use crate::orbit::BodyDef;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[controls]
max_distance = 600.0

[flight]
easing = 'linear'
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.controls.max_distance, 600.0);
        // Everything else should be default
        assert_eq!(opts.controls.min_distance, 80.0);
        assert_eq!(opts.flight.duration, 2.0);
        assert_eq!(opts.system.bodies.len(), 8);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[controls]\nmax_distance = 'far'");
        assert!(matches!(err, Err(OrreryError::OptionsParse(_))));
    }

    #[test]
    fn custom_bodies_replace_the_planets() {
        let toml_str = r"
[[system.bodies]]
name = 'Vulcan'
radius = 1.0
orbit_radius = 15.0
angular_speed = 6.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.system.bodies.len(), 1);
        assert_eq!(opts.system.bodies[0].name, "Vulcan");
        assert_eq!(opts.system.bodies[0].inclination, 0.0);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("Tab"), Some(KeyAction::CycleFocus));
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(KeyAction::TogglePause)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
        assert_eq!(opts.keybindings.focus_slot("Digit0"), Some(0));
        assert_eq!(opts.keybindings.focus_slot("Digit3"), Some(3));
    }

    #[test]
    fn rebound_keys_survive_loading() {
        let toml_str = r"
[keybindings.bindings]
cycle_focus = 'KeyN'
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyN"),
            Some(KeyAction::CycleFocus)
        );
        assert_eq!(opts.keybindings.lookup("Tab"), None);
        // Actions the preset does not mention keep their default keys
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(KeyAction::TogglePause)
        );
        assert_eq!(
            opts.keybindings.lookup("Escape"),
            Some(KeyAction::Cancel)
        );
        assert_eq!(opts.keybindings.bindings.len(), 7);
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("orrery-options-{}", std::process::id()));
        let path = dir.join("wide.toml");
        let mut opts = Options::default();
        opts.camera.fovy = 60.0;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.camera.fovy, 60.0);
        assert_eq!(Options::list_presets(&dir), vec!["wide".to_owned()]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Options::load(Path::new("/nonexistent/orrery/preset.toml"));
        assert!(matches!(err, Err(OrreryError::Io(_))));
    }

    #[test]
    fn defaults_validate_cleanly() {
        assert_eq!(Options::default().validate(), 0);
    }

    #[test]
    fn validate_counts_problems() {
        let mut opts = Options::default();
        opts.controls.min_distance = 500.0;
        opts.controls.min_polar_angle = 0.0;
        opts.system.bodies.push(BodyDef::new("Earth", 1.0, 20.0, 1.0));
        assert_eq!(opts.validate(), 3);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("controls"));
        assert!(props.contains_key("flight"));
        assert!(props.contains_key("system"));
        assert!(!props.contains_key("keybindings"));

        let system = &props["system"]["properties"];
        assert!(system.get("orbit_speed_scale").is_some());
        assert!(system.get("bodies").is_none());
    }

    #[test]
    fn json_exports() {
        let schema = Options::json_schema_string().unwrap();
        assert!(schema.contains("orbit_speed_scale"));

        let values: serde_json::Value =
            serde_json::from_str(&Options::default().to_json().unwrap())
                .unwrap();
        assert_eq!(values["controls"]["max_distance"], 400.0);
        assert_eq!(values["flight"]["easing"], "cubic_out");
    }
}
