use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Orbit controller limits, sensitivities and damping.
pub struct ControlOptions {
    /// Closest the camera may get to its target.
    #[schemars(title = "Min Distance", range(min = 1.0, max = 400.0), extend("step" = 1.0))]
    pub min_distance: f32,
    /// Farthest the camera may get from its target.
    #[schemars(title = "Max Distance", range(min = 50.0, max = 1500.0), extend("step" = 10.0))]
    pub max_distance: f32,
    /// Smallest polar angle from +Y, radians. Must stay above 0.
    #[schemars(skip)]
    pub min_polar_angle: f32,
    /// Largest polar angle from +Y, radians. Must stay below π.
    #[schemars(skip)]
    pub max_polar_angle: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 3.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 2.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Let drags coast to a stop instead of halting on release.
    #[schemars(title = "Damping")]
    pub enable_damping: bool,
    /// Fraction of pending motion removed per update when damping is on.
    #[schemars(title = "Damping Factor", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            min_distance: 80.0,
            max_distance: 400.0,
            min_polar_angle: 0.1,
            max_polar_angle: PI - 0.1,
            rotate_speed: 0.9,
            zoom_speed: 1.0,
            pan_speed: 0.5,
            enable_damping: true,
            damping_factor: 0.12,
        }
    }
}
