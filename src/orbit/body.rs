use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::integrator::orbit_position;

/// Static description of an orbiting body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct BodyDef {
    /// Unique identifier, also used as the display name.
    pub name: String,
    /// Visual radius of the body.
    pub radius: f32,
    /// Distance from the Sun.
    pub orbit_radius: f32,
    /// Angular speed in radians per second at an orbit speed scale of 1.
    pub angular_speed: f32,
    /// Tilt of the orbital plane about +X, degrees.
    #[serde(default)]
    pub inclination: f32,
}

impl BodyDef {
    /// Create a body on an untilted orbit.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        radius: f32,
        orbit_radius: f32,
        angular_speed: f32,
    ) -> Self {
        Self {
            name: name.into(),
            radius,
            orbit_radius,
            angular_speed,
            inclination: 0.0,
        }
    }

    /// The eight planets of the default scene.
    #[must_use]
    pub fn planets() -> Vec<Self> {
        vec![
            Self::new("Mercury", 2.2, 30.0, 4.0),
            Self::new("Venus", 3.0, 40.0, 3.2),
            Self::new("Earth", 3.2, 52.0, 2.6),
            Self::new("Mars", 2.8, 64.0, 2.0),
            Self::new("Jupiter", 6.5, 86.0, 1.3),
            Self::new("Saturn", 5.5, 110.0, 1.0),
            Self::new("Uranus", 4.8, 134.0, 0.8),
            Self::new("Neptune", 4.6, 158.0, 0.6),
        ]
    }
}

/// A body and its current place on its orbit.
///
/// The phase is authoritative; the position is derived from it whenever the
/// phase changes.
#[derive(Debug, Clone)]
pub struct Body {
    def: BodyDef,
    phase: f32,
    position: Vec3,
}

impl Body {
    /// Place a body at the given phase (radians).
    #[must_use]
    pub fn new(def: BodyDef, phase: f32) -> Self {
        let mut body = Self {
            def,
            phase: 0.0,
            position: Vec3::ZERO,
        };
        body.set_phase(phase);
        body
    }

    /// Static definition.
    #[must_use]
    pub fn def(&self) -> &BodyDef {
        &self.def
    }

    /// Identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// Current phase in [0, 2π).
    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Move the body to `phase` and recompute its position.
    pub fn set_phase(&mut self, phase: f32) {
        let wrapped = phase.rem_euclid(TAU);
        // Rounding lands tiny negative inputs exactly on TAU
        self.phase = if wrapped >= TAU { 0.0 } else { wrapped };
        self.position = orbit_position(self.def.orbit_radius, self.phase);
    }

    /// Position in the body's own orbital plane.
    #[must_use]
    pub fn local_position(&self) -> Vec3 {
        self.position
    }

    /// Position in the scene, with the orbital plane's tilt applied.
    #[must_use]
    pub fn world_position(&self) -> Vec3 {
        if self.def.inclination == 0.0 {
            return self.position;
        }
        Quat::from_rotation_x(self.def.inclination.to_radians()) * self.position
    }
}
