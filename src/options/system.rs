use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::orbit::body::BodyDef;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Solar System", inline)]
#[serde(default)]
/// Bodies in the scene and how fast time runs for them.
pub struct SystemOptions {
    /// Global multiplier on every body's angular speed.
    #[schemars(title = "Orbit Speed", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub orbit_speed_scale: f32,
    /// Largest frame delta fed to the integrator, seconds.
    #[schemars(skip)]
    pub max_frame_dt: f32,
    /// Visual radius of the Sun.
    #[schemars(skip)]
    pub sun_radius: f32,
    /// Camera eye used when flying back to the Sun.
    #[schemars(skip)]
    pub sun_view_offset: [f32; 3],
    /// Start each body at a random phase instead of phase 0.
    #[schemars(skip)]
    pub randomize_phases: bool,
    /// Seed for the phase and backdrop generators; `None` draws from the OS.
    #[schemars(skip)]
    pub seed: Option<u64>,
    /// Orbiting bodies, innermost first.
    #[schemars(skip)]
    pub bodies: Vec<BodyDef>,
}

impl Default for SystemOptions {
    fn default() -> Self {
        Self {
            orbit_speed_scale: 0.25,
            max_frame_dt: 0.1,
            sun_radius: 10.0,
            sun_view_offset: [0.0, 80.0, 220.0],
            randomize_phases: true,
            seed: None,
            bodies: BodyDef::planets(),
        }
    }
}
