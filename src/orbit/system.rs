use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;

use super::body::{Body, BodyDef};
use super::integrator;
use crate::options::SystemOptions;

/// Largest magnitude the orbit speed multiplier may reach.
pub const MAX_ORBIT_SPEED_SCALE: f32 = 64.0;
/// Smallest nonzero magnitude reachable by stepping the multiplier down.
pub const MIN_ORBIT_SPEED_STEP: f32 = 1.0 / 64.0;

/// Name-based lookup of body positions and sizes.
///
/// Focus selection only needs these two queries, so anything that can
/// answer them (the [`SolarSystem`] or a test double) can drive camera
/// flights.
pub trait BodyRegistry {
    /// Current world position of the named body.
    fn world_position(&self, name: &str) -> Option<Vec3>;
    /// Visual radius of the named body.
    fn body_radius(&self, name: &str) -> Option<f32>;
}

/// The Sun at the origin plus bodies on circular orbits around it.
pub struct SolarSystem {
    sun_radius: f32,
    /// Bodies in definition order.
    bodies: Vec<Body>,
    /// Body name → index into `bodies`.
    index: FxHashMap<String, usize>,
    orbit_speed_scale: f32,
    paused: bool,
}

impl SolarSystem {
    /// Build a system with every body at phase 0.
    ///
    /// When two definitions share a name the first one wins the name lookup.
    #[must_use]
    pub fn new(sun_radius: f32, defs: Vec<BodyDef>) -> Self {
        let bodies: Vec<Body> =
            defs.into_iter().map(|def| Body::new(def, 0.0)).collect();
        let mut index = FxHashMap::default();
        for (i, body) in bodies.iter().enumerate() {
            if index.contains_key(body.name()) {
                log::warn!(
                    "duplicate body name {:?} ignored in lookup",
                    body.name()
                );
                continue;
            }
            let _ = index.insert(body.name().to_owned(), i);
        }
        Self {
            sun_radius,
            bodies,
            index,
            orbit_speed_scale: 1.0,
            paused: false,
        }
    }

    /// Build a system from options, randomizing phases if configured.
    #[must_use]
    pub fn from_options(options: &SystemOptions) -> Self {
        let mut system = Self::new(options.sun_radius, options.bodies.clone());
        system.set_orbit_speed_scale(options.orbit_speed_scale);
        if options.randomize_phases {
            let mut rng = match options.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            system.randomize_phases(&mut rng);
        }
        system
    }

    /// Put every body at a uniformly random phase.
    pub fn randomize_phases<R: Rng>(&mut self, rng: &mut R) {
        for body in &mut self.bodies {
            body.set_phase(rng.random_range(0.0..TAU));
        }
    }

    /// Advance all bodies by `dt` seconds unless paused.
    pub fn advance(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        integrator::advance_all(&mut self.bodies, dt, self.orbit_speed_scale);
    }

    /// Bodies in definition order.
    #[must_use]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Look up a body by name.
    #[must_use]
    pub fn body(&self, name: &str) -> Option<&Body> {
        self.index.get(name).map(|&i| &self.bodies[i])
    }

    /// Visual radius of the Sun.
    #[must_use]
    pub fn sun_radius(&self) -> f32 {
        self.sun_radius
    }

    /// Global angular speed multiplier.
    #[must_use]
    pub fn orbit_speed_scale(&self) -> f32 {
        self.orbit_speed_scale
    }

    /// Change the global angular speed multiplier. Negative values run the
    /// orbits backwards.
    ///
    /// The magnitude is capped at [`MAX_ORBIT_SPEED_SCALE`]; non-finite
    /// values are ignored.
    pub fn set_orbit_speed_scale(&mut self, scale: f32) {
        if !scale.is_finite() {
            log::warn!("ignoring non-finite orbit speed scale {scale}");
            return;
        }
        self.orbit_speed_scale =
            scale.clamp(-MAX_ORBIT_SPEED_SCALE, MAX_ORBIT_SPEED_SCALE);
    }

    /// Multiply the speed multiplier by `factor` and return the result.
    ///
    /// A nonzero multiplier keeps its magnitude within
    /// [`MIN_ORBIT_SPEED_STEP`, `MAX_ORBIT_SPEED_SCALE`], so repeated steps
    /// in either direction can always be undone.
    pub fn scale_orbit_speed(&mut self, factor: f32) -> f32 {
        let current = self.orbit_speed_scale;
        if current == 0.0 || !factor.is_finite() || factor == 0.0 {
            return current;
        }
        let magnitude = (current.abs() * factor.abs())
            .clamp(MIN_ORBIT_SPEED_STEP, MAX_ORBIT_SPEED_SCALE);
        self.orbit_speed_scale = magnitude.copysign(current * factor.signum());
        self.orbit_speed_scale
    }

    /// Whether orbital motion is frozen.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freeze or resume orbital motion. Returns the new paused state.
    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}

impl BodyRegistry for SolarSystem {
    fn world_position(&self, name: &str) -> Option<Vec3> {
        self.body(name).map(Body::world_position)
    }

    fn body_radius(&self, name: &str) -> Option<f32> {
        self.body(name).map(|b| b.def().radius)
    }
}
