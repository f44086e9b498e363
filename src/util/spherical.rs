//! Spherical coordinates relative to a +Y up axis.

use std::f32::consts::PI;

use glam::Vec3;

/// Smallest polar angle distance kept from either pole.
///
/// At φ = 0 or φ = π the view direction is parallel to the up vector and
/// `look_at` has no defined right axis.
pub const POLE_EPSILON: f32 = 1.0e-6;

/// A displacement expressed as radius, polar angle and azimuth.
///
/// `phi` is measured from +Y; `theta` is measured around +Y starting at +Z,
/// so `theta = 0, phi = π/2` points along +Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f32,
    /// Polar angle from +Y in radians.
    pub phi: f32,
    /// Azimuth around +Y in radians.
    pub theta: f32,
}

impl Spherical {
    /// Create from explicit components.
    #[must_use]
    pub const fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    /// Convert a Cartesian offset. A zero vector maps to all-zero angles.
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    /// Convert back to a Cartesian offset.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Keep `phi` strictly inside (0, π).
    pub fn make_safe(&mut self) {
        self.phi = self.phi.clamp(POLE_EPSILON, PI - POLE_EPSILON);
    }
}
