//! Point and polyline generators for the static parts of the scene.
//!
//! Everything here is plain position data in world units, ready to upload
//! as a vertex buffer. Random generators take the RNG from the caller so a
//! seeded run is reproducible.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// Segments in an orbit line loop.
pub const ORBIT_SEGMENTS: usize = 256;

/// Closed circle of `radius` in the orbital plane.
///
/// Returns `segments + 1` points; the last repeats the first so the line
/// closes whether it is drawn as a strip or a loop.
#[must_use]
pub fn orbit_ring(radius: f32, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32 * TAU;
            Vec3::new(t.cos() * radius, 0.0, t.sin() * radius)
        })
        .collect()
}

/// Background stars scattered through a thick spherical shell.
///
/// Each star has a random direction and sits between 70% and 100% of
/// `radius` from the origin.
pub fn starfield<R: Rng>(rng: &mut R, count: usize, radius: f32) -> Vec<Vec3> {
    let mut stars = Vec::with_capacity(count);
    while stars.len() < count {
        let dir = Vec3::new(
            rng.random::<f32>() * 2.0 - 1.0,
            rng.random::<f32>() * 2.0 - 1.0,
            rng.random::<f32>() * 2.0 - 1.0,
        );
        // Too short to normalize; draw again
        let Some(dir) = dir.try_normalize() else {
            continue;
        };
        let dist = radius * (0.7 + rng.random::<f32>() * 0.3);
        stars.push(dir * dist);
    }
    stars
}

/// Flat ring of debris between `inner` and `outer` orbit radius.
///
/// Heights are uniform within ±`half_thickness`.
pub fn asteroid_belt<R: Rng>(
    rng: &mut R,
    count: usize,
    inner: f32,
    outer: f32,
    half_thickness: f32,
) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let r = inner + (outer - inner) * rng.random::<f32>();
            let angle = rng.random::<f32>() * TAU;
            let y = (rng.random::<f32>() * 2.0 - 1.0) * half_thickness;
            Vec3::new(angle.cos() * r, y, angle.sin() * r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn ring_is_closed_and_flat() {
        let ring = orbit_ring(52.0, ORBIT_SEGMENTS);
        assert_eq!(ring.len(), ORBIT_SEGMENTS + 1);
        let (first, last) = (ring[0], ring[ORBIT_SEGMENTS]);
        assert!((first - last).length() < 1e-3);
        for p in &ring {
            assert!(p.y.abs() < f32::EPSILON);
            assert!((p.length() - 52.0).abs() < 1e-3);
        }
    }

    #[test]
    fn degenerate_segment_count_still_makes_a_polygon() {
        assert_eq!(orbit_ring(1.0, 0).len(), 4);
    }

    #[test]
    fn stars_stay_inside_the_shell() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = starfield(&mut rng, 800, 900.0);
        assert_eq!(stars.len(), 800);
        for s in &stars {
            let d = s.length();
            assert!(d >= 900.0 * 0.7 - 1e-2 && d <= 900.0 + 1e-2, "{d}");
        }
    }

    #[test]
    fn belt_respects_radius_and_thickness() {
        let mut rng = StdRng::seed_from_u64(7);
        let belt = asteroid_belt(&mut rng, 900, 70.0, 82.0, 0.6);
        assert_eq!(belt.len(), 900);
        for p in &belt {
            let r = p.x.hypot(p.z);
            assert!((70.0 - 1e-3..=82.0 + 1e-3).contains(&r));
            assert!(p.y.abs() <= 0.6);
        }
    }

    #[test]
    fn same_seed_same_points() {
        let a = starfield(&mut StdRng::seed_from_u64(42), 16, 900.0);
        let b = starfield(&mut StdRng::seed_from_u64(42), 16, 900.0);
        assert_eq!(a, b);
    }
}
