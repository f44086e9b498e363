//! Static backdrop of the orrery: orbit lines, star field, asteroid belt and
//! ring bands.
//!
//! The [`Backdrop`] is generated once from the system layout and handed to
//! whatever draws the scene. Body spheres are not part of it; their
//! positions come from [`SolarSystem`](crate::orbit::SolarSystem) every
//! frame.

pub mod geometry;

use glam::Vec3;
use rand::Rng;

use self::geometry::{asteroid_belt, orbit_ring, starfield, ORBIT_SEGMENTS};
use crate::orbit::BodyDef;

/// Number of background stars.
const STAR_COUNT: usize = 800;
/// Outer radius of the star shell.
const STAR_RADIUS: f32 = 900.0;
/// Number of belt particles.
const BELT_COUNT: usize = 900;
/// Belt inner and outer orbit radius.
const BELT_RADII: (f32, f32) = (70.0, 82.0);
/// Belt half thickness.
const BELT_HALF_THICKNESS: f32 = 0.6;
/// Bodies at or past this index get the dimmer outer orbit line.
const OUTER_ORBIT_INDEX: usize = 4;

/// One body's orbit line.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitLine {
    /// Name of the body on this orbit.
    pub body: String,
    /// Whether the body is an outer planet (drawn dimmer).
    pub outer: bool,
    /// Closed polyline in the orbital plane.
    pub points: Vec<Vec3>,
}

/// Flat annulus around a body, in the body's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingBand {
    /// Inner radius.
    pub inner: f32,
    /// Outer radius.
    pub outer: f32,
}

impl RingBand {
    /// The thin ring used for Saturn, scaled to the body's radius.
    #[must_use]
    pub fn for_radius(radius: f32) -> Self {
        Self {
            inner: radius * 1.45,
            outer: radius * 2.1,
        }
    }
}

/// Everything in the scene that does not move.
#[derive(Debug, Clone, Default)]
pub struct Backdrop {
    /// One orbit line per body, in body order.
    pub orbits: Vec<OrbitLine>,
    /// Background star positions.
    pub stars: Vec<Vec3>,
    /// Asteroid belt particle positions.
    pub belt: Vec<Vec3>,
    /// Ring bands keyed by body name.
    pub rings: Vec<(String, RingBand)>,
}

impl Backdrop {
    /// Generate the backdrop for `bodies`, drawing randomness from `rng`.
    pub fn generate<R: Rng>(bodies: &[BodyDef], rng: &mut R) -> Self {
        let orbits = bodies
            .iter()
            .enumerate()
            .map(|(i, def)| OrbitLine {
                body: def.name.clone(),
                outer: i >= OUTER_ORBIT_INDEX,
                points: orbit_ring(def.orbit_radius, ORBIT_SEGMENTS),
            })
            .collect();

        let rings = bodies
            .iter()
            .filter(|def| def.name == "Saturn")
            .map(|def| (def.name.clone(), RingBand::for_radius(def.radius)))
            .collect();

        let stars = starfield(rng, STAR_COUNT, STAR_RADIUS);
        let belt = asteroid_belt(
            rng,
            BELT_COUNT,
            BELT_RADII.0,
            BELT_RADII.1,
            BELT_HALF_THICKNESS,
        );

        log::debug!(
            "backdrop: {} orbits, {} stars, {} belt particles",
            bodies.len(),
            stars.len(),
            belt.len()
        );

        Self {
            orbits,
            stars,
            belt,
            rings,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn default_planets_backdrop() {
        let mut rng = StdRng::seed_from_u64(1);
        let backdrop = Backdrop::generate(&BodyDef::planets(), &mut rng);

        assert_eq!(backdrop.orbits.len(), 8);
        assert!(!backdrop.orbits[3].outer);
        assert!(backdrop.orbits[4].outer);
        assert_eq!(backdrop.stars.len(), STAR_COUNT);
        assert_eq!(backdrop.belt.len(), BELT_COUNT);

        assert_eq!(backdrop.rings.len(), 1);
        let (name, band) = &backdrop.rings[0];
        assert_eq!(name, "Saturn");
        assert!((band.inner - 5.5 * 1.45).abs() < 1e-4);
        assert!((band.outer - 5.5 * 2.1).abs() < 1e-4);
    }

    #[test]
    fn no_bodies_still_has_stars() {
        let mut rng = StdRng::seed_from_u64(1);
        let backdrop = Backdrop::generate(&[], &mut rng);
        assert!(backdrop.orbits.is_empty());
        assert!(backdrop.rings.is_empty());
        assert_eq!(backdrop.stars.len(), STAR_COUNT);
    }
}
