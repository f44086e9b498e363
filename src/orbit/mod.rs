//! Bodies on fixed circular orbits around the Sun.
//!
//! Orbits are planar circles with a constant angular speed. There is no
//! gravity; a body's phase is the only state that changes over time.

/// Body definitions and per-body orbital state.
pub mod body;
/// Phase advance and circle placement.
pub mod integrator;
/// The body registry the camera focuses on.
pub mod system;

pub use body::{Body, BodyDef};
pub use system::{BodyRegistry, SolarSystem};
