//! Advances bodies along their circular orbits.
//!
//! Each body is stepped independently: `phase += dt · angular_speed ·
//! scale`, then its position is placed on the circle in the XZ plane. No
//! clamping of `dt` happens here; a frame driver that may see long gaps
//! should cap the delta first (see
//! [`FrameClock`](crate::util::frame_timing::FrameClock)).

use glam::Vec3;

use super::body::Body;

/// Point on a circle of `orbit_radius` in the XZ plane at `phase` radians.
#[inline]
#[must_use]
pub fn orbit_position(orbit_radius: f32, phase: f32) -> Vec3 {
    let (sin, cos) = phase.sin_cos();
    Vec3::new(cos * orbit_radius, 0.0, sin * orbit_radius)
}

/// Advance one body by `dt` seconds at the given global speed scale.
#[inline]
pub fn advance(body: &mut Body, dt: f32, scale: f32) {
    let phase = body.phase() + dt * body.def().angular_speed * scale;
    body.set_phase(phase);
}

/// Advance every body by `dt` seconds.
pub fn advance_all(bodies: &mut [Body], dt: f32, scale: f32) {
    for body in bodies {
        advance(body, dt, scale);
    }
}
